use yew::prelude::*;

/// Alcance de uma exclusão ou edição de despesa recorrente.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Escopo {
    Uma,
    Futuras,
}

impl Escopo {
    pub fn as_str(self) -> &'static str {
        match self {
            Escopo::Uma => "one",
            Escopo::Futuras => "future",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Opcao {
    pub rotulo: &'static str,
    pub classe: &'static str,
    pub escopo: Option<Escopo>,
}

pub fn opcoes_exclusao() -> Vec<Opcao> {
    vec![
        Opcao {
            rotulo: "Apenas Esta",
            classe: "bg-red-600 hover:bg-red-500 text-white",
            escopo: Some(Escopo::Uma),
        },
        Opcao {
            rotulo: "Esta e as Próximas",
            classe: "bg-orange-600 hover:bg-orange-500 text-white",
            escopo: Some(Escopo::Futuras),
        },
        Opcao {
            rotulo: "Cancelar",
            classe: "bg-gray-600 hover:bg-gray-500 text-white",
            escopo: None,
        },
    ]
}

pub fn opcoes_edicao() -> Vec<Opcao> {
    vec![
        Opcao {
            rotulo: "Apenas nesta competência",
            classe: "bg-blue-600 hover:bg-blue-500 text-white",
            escopo: Some(Escopo::Uma),
        },
        Opcao {
            rotulo: "Nesta e nas próximas",
            classe: "bg-yellow-600 hover:bg-yellow-500 text-white",
            escopo: Some(Escopo::Futuras),
        },
        Opcao {
            rotulo: "Cancelar",
            classe: "bg-gray-600 hover:bg-gray-500 text-white",
            escopo: None,
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub mensagem: AttrValue,
    #[prop_or(AttrValue::Static("Confirmar"))]
    pub rotulo_confirmar: AttrValue,
    pub on_close: Callback<bool>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let confirmar = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(true))
    };
    let cancelar = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(false))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div class="w-full max-w-sm bg-white rounded-xl shadow-lg p-6 mx-4">
                <p class="text-sm text-gray-700">{ props.mensagem.clone() }</p>
                <div class="mt-6 flex justify-end gap-3">
                    <button onclick={cancelar} class="px-4 py-2 rounded-lg text-sm font-bold bg-gray-600 hover:bg-gray-500 text-white">
                        {"Cancelar"}
                    </button>
                    <button onclick={confirmar} class="px-4 py-2 rounded-lg text-sm font-bold bg-red-600 hover:bg-red-500 text-white">
                        { props.rotulo_confirmar.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OptionDialogProps {
    pub titulo: AttrValue,
    pub mensagem: AttrValue,
    pub opcoes: Vec<Opcao>,
    pub on_close: Callback<Option<Escopo>>,
}

#[function_component(OptionDialog)]
pub fn option_dialog(props: &OptionDialogProps) -> Html {
    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div class="w-full max-w-sm bg-white rounded-xl shadow-lg p-6 mx-4">
                <h3 class="text-base font-bold text-gray-900">{ props.titulo.clone() }</h3>
                <p class="mt-2 text-sm text-gray-700">{ props.mensagem.clone() }</p>
                <div class="mt-6 flex flex-col gap-2">
                    { for props.opcoes.iter().map(|opcao| {
                        let on_close = props.on_close.clone();
                        let escopo = opcao.escopo;
                        let classe = format!("w-full px-4 py-2 rounded-lg text-sm font-bold {}", opcao.classe);
                        html! {
                            <button class={classe} onclick={Callback::from(move |_| on_close.emit(escopo))}>
                                { opcao.rotulo }
                            </button>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escopo_no_formato_do_servidor() {
        assert_eq!(Escopo::Uma.as_str(), "one");
        assert_eq!(Escopo::Futuras.as_str(), "future");
    }

    #[test]
    fn exclusao_oferece_uma_futuras_e_cancelar() {
        let opcoes = opcoes_exclusao();
        assert_eq!(opcoes.len(), 3);
        assert_eq!(opcoes[0].escopo, Some(Escopo::Uma));
        assert_eq!(opcoes[1].escopo, Some(Escopo::Futuras));
        assert_eq!(opcoes[2].escopo, None);
        assert_eq!(opcoes[2].rotulo, "Cancelar");
    }

    #[test]
    fn edicao_mapeia_competencias_para_os_mesmos_escopos() {
        let opcoes = opcoes_edicao();
        assert_eq!(opcoes[0].escopo.map(Escopo::as_str), Some("one"));
        assert_eq!(opcoes[1].escopo.map(Escopo::as_str), Some("future"));
        assert_eq!(opcoes[2].escopo, None);
    }
}
