use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::{self, Cartao, Categoria, Despesa, ToggleResposta};
use crate::despesa_form::{Confirmacao, DespesaContexto, DespesaForm, Recorrencia};
use crate::dialog::{opcoes_exclusao, ConfirmDialog, Escopo, OptionDialog};
use crate::money::{data_br, formatar_moeda};

#[derive(Clone, PartialEq, Default)]
pub struct Filtros {
    pub categoria_id: Option<i64>,
    pub mes: Option<u8>,
    pub ano: Option<i32>,
}

fn componentes_data(iso: &str) -> Option<(i32, u8)> {
    let ano = iso.get(0..4)?.parse().ok()?;
    let mes = iso.get(5..7)?.parse().ok()?;
    Some((ano, mes))
}

pub fn aplicar_filtros<'a>(despesas: &'a [Despesa], filtros: &Filtros) -> Vec<&'a Despesa> {
    despesas
        .iter()
        .filter(|d| match filtros.categoria_id {
            Some(id) => d.categoria_id == id,
            None => true,
        })
        .filter(|d| {
            if filtros.mes.is_none() && filtros.ano.is_none() {
                return true;
            }
            let Some((ano, mes)) = componentes_data(&d.data_inicio) else {
                return false;
            };
            filtros.mes.map_or(true, |m| m == mes) && filtros.ano.map_or(true, |a| a == ano)
        })
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Estatisticas {
    pub total: usize,
    pub valor_total: i64,
    pub media: i64,
    pub maior: i64,
}

pub fn estatisticas(despesas: &[&Despesa]) -> Estatisticas {
    let total = despesas.len();
    let valor_total: i64 = despesas.iter().map(|d| d.valor).sum();
    Estatisticas {
        total,
        valor_total,
        media: if total > 0 { valor_total / total as i64 } else { 0 },
        maior: despesas.iter().map(|d| d.valor).max().unwrap_or(0),
    }
}

const MESES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

enum FormAberto {
    Fechado,
    Nova,
    Edicao(Despesa),
}

#[function_component(DespesasPage)]
pub fn despesas_page() -> Html {
    let settings = use_context::<UseStateHandle<crate::AppSettings>>();
    let simbolo = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "R$".to_string());

    let despesas = use_state(Vec::<Despesa>::new);
    let categorias = use_state(Vec::<Categoria>::new);
    let cartoes = use_state(Vec::<Cartao>::new);
    let carregando = use_state(|| true);
    let recarregar = use_state(|| 0u32);

    let filtro_categoria = use_state(String::new);
    let filtro_mes = use_state(String::new);
    let filtro_ano = use_state(String::new);

    let form = use_state(|| FormAberto::Fechado);
    let confirmacao = use_state(|| None::<(i64, Confirmacao)>);
    let aviso = use_state(|| None::<String>);

    {
        let categorias = categorias.clone();
        let cartoes = cartoes.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::buscar::<Vec<Categoria>>("/api/categorias/despesas").await {
                        Ok(lista) => categorias.set(lista),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar categorias: {}", erro))
                        }
                    }
                    match api::buscar::<Vec<Cartao>>("/api/cartoes").await {
                        Ok(lista) => cartoes.set(lista),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar cartões: {}", erro))
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let despesas = despesas.clone();
        let carregando = carregando.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::buscar::<Vec<Despesa>>("/api/despesas").await {
                        Ok(lista) => despesas.set(lista),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar despesas: {}", erro))
                        }
                    }
                    carregando.set(false);
                });
                || ()
            },
            *recarregar,
        );
    }

    let filtros = Filtros {
        categoria_id: filtro_categoria.parse().ok(),
        mes: filtro_mes.parse().ok(),
        ano: filtro_ano.parse().ok(),
    };
    let visiveis = aplicar_filtros(&despesas, &filtros);
    let stats = estatisticas(&visiveis);

    let on_nova = {
        let form = form.clone();
        Callback::from(move |_| form.set(FormAberto::Nova))
    };

    let on_salva = {
        let form = form.clone();
        let recarregar = recarregar.clone();
        Callback::from(move |_| {
            form.set(FormAberto::Fechado);
            recarregar.set(*recarregar + 1);
        })
    };

    let on_cancelar_form = {
        let form = form.clone();
        Callback::from(move |_| form.set(FormAberto::Fechado))
    };

    let pedir_exclusao = {
        let confirmacao = confirmacao.clone();
        let aviso = aviso.clone();
        Callback::from(move |contexto: DespesaContexto| {
            match contexto.confirmacao_exclusao() {
                Ok(par) => confirmacao.set(Some(par)),
                Err(mensagem) => aviso.set(Some(mensagem.to_string())),
            }
        })
    };

    let executar_exclusao = {
        let recarregar = recarregar.clone();
        let aviso = aviso.clone();
        move |id: i64, escopo: Escopo| {
            let recarregar = recarregar.clone();
            let aviso = aviso.clone();
            spawn_local(async move {
                let caminho = format!("/api/despesas/{}/excluir", id);
                let corpo = serde_json::json!({ "scope": escopo.as_str() });
                match api::enviar(&caminho, &corpo).await {
                    Ok(()) => recarregar.set(*recarregar + 1),
                    Err(erro) => aviso.set(Some(format!("Erro ao excluir despesa: {}", erro))),
                }
            });
        }
    };

    let on_toggle_pago = {
        let despesas = despesas.clone();
        let aviso = aviso.clone();
        Callback::from(move |id: i64| {
            let despesas = despesas.clone();
            let aviso = aviso.clone();
            spawn_local(async move {
                let caminho = format!("/api/despesas/{}/toggle-pagamento", id);
                let corpo = serde_json::json!({});
                match api::enviar_e_ler::<_, ToggleResposta>(&caminho, &corpo).await {
                    Ok(resposta) if resposta.success => {
                        let atualizadas: Vec<Despesa> = (*despesas)
                            .iter()
                            .cloned()
                            .map(|mut d| {
                                if d.id == id {
                                    d.pago = resposta.pago;
                                }
                                d
                            })
                            .collect();
                        despesas.set(atualizadas);
                    }
                    Ok(resposta) => aviso.set(Some(resposta.message)),
                    Err(erro) => {
                        aviso.set(Some(format!("Erro ao atualizar pagamento: {}", erro)))
                    }
                }
            });
        })
    };

    let dialogo = match *confirmacao {
        Some((id, Confirmacao::Simples)) => {
            let confirmacao = confirmacao.clone();
            let executar = executar_exclusao.clone();
            html! {
                <ConfirmDialog
                    mensagem="Tem certeza que deseja excluir esta despesa? Esta ação não pode ser desfeita."
                    rotulo_confirmar="Excluir"
                    on_close={Callback::from(move |confirmado: bool| {
                        confirmacao.set(None);
                        if confirmado {
                            executar(id, Escopo::Uma);
                        }
                    })}
                />
            }
        }
        Some((id, Confirmacao::Escolha)) => {
            let confirmacao = confirmacao.clone();
            let executar = executar_exclusao.clone();
            html! {
                <OptionDialog
                    titulo="Excluir Despesa Recorrente"
                    mensagem="Esta é uma despesa recorrente. O que deseja excluir?"
                    opcoes={opcoes_exclusao()}
                    on_close={Callback::from(move |escolha: Option<Escopo>| {
                        confirmacao.set(None);
                        if let Some(escopo) = escolha {
                            executar(id, escopo);
                        }
                    })}
                />
            }
        }
        None => html! {},
    };

    let conteudo_form = match &*form {
        FormAberto::Fechado => html! {},
        FormAberto::Nova => html! {
            <DespesaForm
                categorias={(*categorias).clone()}
                cartoes={(*cartoes).clone()}
                on_salva={on_salva.clone()}
                on_cancelar={on_cancelar_form.clone()}
            />
        },
        FormAberto::Edicao(despesa) => html! {
            <DespesaForm
                categorias={(*categorias).clone()}
                cartoes={(*cartoes).clone()}
                despesa={Some(despesa.clone())}
                on_salva={on_salva.clone()}
                on_cancelar={on_cancelar_form.clone()}
            />
        },
    };

    html! {
        { crate::page_shell(
            "Minhas Despesas",
            html! {
                <button onclick={on_nova} class="flex items-center gap-2 bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-xl font-bold text-sm">
                    { crate::icon_plus() }
                    {"Nova Despesa"}
                </button>
            },
            html! {
                <>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <div class="bg-white p-4 rounded-xl border border-gray-200">
                            <p class="text-[10px] font-bold text-gray-400 uppercase tracking-widest">{"Despesas"}</p>
                            <p class="text-xl font-bold text-gray-900 mt-1">{ stats.total }</p>
                        </div>
                        <div class="bg-white p-4 rounded-xl border border-gray-200">
                            <p class="text-[10px] font-bold text-gray-400 uppercase tracking-widest">{"Valor Total"}</p>
                            <p class="text-xl font-bold text-gray-900 mt-1">{ formatar_moeda(stats.valor_total, &simbolo) }</p>
                        </div>
                        <div class="bg-white p-4 rounded-xl border border-gray-200">
                            <p class="text-[10px] font-bold text-gray-400 uppercase tracking-widest">{"Valor Médio"}</p>
                            <p class="text-xl font-bold text-gray-900 mt-1">{ formatar_moeda(stats.media, &simbolo) }</p>
                        </div>
                        <div class="bg-white p-4 rounded-xl border border-gray-200">
                            <p class="text-[10px] font-bold text-gray-400 uppercase tracking-widest">{"Maior Valor"}</p>
                            <p class="text-xl font-bold text-gray-900 mt-1">{ formatar_moeda(stats.maior, &simbolo) }</p>
                        </div>
                    </div>

                    <div class="bg-white p-4 rounded-xl border border-gray-200 grid grid-cols-1 md:grid-cols-3 gap-3">
                        <div>
                            <label class="block text-xs font-bold text-gray-500 uppercase tracking-wide mb-1">{"Categoria"}</label>
                            <select class="w-full px-3 py-2 bg-gray-50 border border-gray-200 rounded-lg text-sm" value={(*filtro_categoria).clone()} onchange={{
                                let filtro_categoria = filtro_categoria.clone();
                                Callback::from(move |e: Event| {
                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                    filtro_categoria.set(select.value());
                                })
                            }}>
                                <option value="">{"Todas"}</option>
                                { for categorias.iter().map(|c| html! {
                                    <option value={c.id.to_string()}>{ c.nome.clone() }</option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label class="block text-xs font-bold text-gray-500 uppercase tracking-wide mb-1">{"Mês"}</label>
                            <select class="w-full px-3 py-2 bg-gray-50 border border-gray-200 rounded-lg text-sm" value={(*filtro_mes).clone()} onchange={{
                                let filtro_mes = filtro_mes.clone();
                                Callback::from(move |e: Event| {
                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                    filtro_mes.set(select.value());
                                })
                            }}>
                                <option value="">{"Todos"}</option>
                                { for MESES.iter().enumerate().map(|(i, nome)| html! {
                                    <option value={(i + 1).to_string()}>{ *nome }</option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label class="block text-xs font-bold text-gray-500 uppercase tracking-wide mb-1">{"Ano"}</label>
                            <input type="number" placeholder="Todos" class="w-full px-3 py-2 bg-gray-50 border border-gray-200 rounded-lg text-sm" value={(*filtro_ano).clone()} oninput={{
                                let filtro_ano = filtro_ano.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    filtro_ano.set(input.value());
                                })
                            }} />
                        </div>
                    </div>

                    if let Some(mensagem) = &*aviso {
                        <div class="bg-red-50 border border-red-200 text-red-700 text-sm rounded-lg px-4 py-3 flex items-center justify-between">
                            <span>{ mensagem.clone() }</span>
                            <button class="font-bold" onclick={{
                                let aviso = aviso.clone();
                                Callback::from(move |_| aviso.set(None))
                            }}>{"×"}</button>
                        </div>
                    }

                    { conteudo_form }

                    <div class="bg-white rounded-xl border border-gray-200 overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-gray-50 text-gray-400 text-[10px] uppercase tracking-widest">
                                        <th class="px-6 py-3 font-bold">{"Data"}</th>
                                        <th class="px-6 py-3 font-bold">{"Categoria"}</th>
                                        <th class="px-6 py-3 font-bold">{"Recorrência"}</th>
                                        <th class="px-6 py-3 font-bold text-right">{"Valor"}</th>
                                        <th class="px-6 py-3 font-bold text-center">{"Pago"}</th>
                                        <th class="px-6 py-3 font-bold text-right">{"Ações"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-100">
                                    { if *carregando {
                                        html! { <tr><td colspan="6" class="px-6 py-6 text-center text-gray-400">{"Carregando..."}</td></tr> }
                                    } else if visiveis.is_empty() {
                                        html! { <tr><td colspan="6" class="px-6 py-6 text-center text-gray-400">{"Nenhuma despesa encontrada."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for visiveis.iter().map(|despesa| {
                                                    let despesa = (*despesa).clone();
                                                    let recorrencia = Recorrencia::parse(&despesa.tipo_recorrencia);
                                                    let contexto = DespesaContexto {
                                                        id: Some(despesa.id),
                                                        recorrencia,
                                                        em_edicao: false,
                                                    };
                                                    let parcela = match (despesa.parcela_atual, despesa.numero_parcelas.as_deref()) {
                                                        (Some(atual), Some(total)) => format!(" {}/{}", atual, total),
                                                        _ => String::new(),
                                                    };
                                                    let on_editar = {
                                                        let form = form.clone();
                                                        let despesa = despesa.clone();
                                                        Callback::from(move |_| form.set(FormAberto::Edicao(despesa.clone())))
                                                    };
                                                    let on_excluir = {
                                                        let pedir_exclusao = pedir_exclusao.clone();
                                                        Callback::from(move |_| pedir_exclusao.emit(contexto))
                                                    };
                                                    let on_pago = {
                                                        let on_toggle_pago = on_toggle_pago.clone();
                                                        let id = despesa.id;
                                                        Callback::from(move |_| on_toggle_pago.emit(id))
                                                    };
                                                    let classe_pago = if despesa.pago {
                                                        "px-3 py-1 rounded-full text-[10px] font-bold bg-green-100 text-green-700"
                                                    } else {
                                                        "px-3 py-1 rounded-full text-[10px] font-bold bg-yellow-100 text-yellow-700"
                                                    };
                                                    html! {
                                                        <tr key={despesa.id} class="text-sm hover:bg-gray-50 transition-colors">
                                                            <td class="px-6 py-3 text-gray-500">{ data_br(&despesa.data_inicio) }</td>
                                                            <td class="px-6 py-3 text-gray-900">
                                                                { despesa.categoria_nome.clone() }
                                                                if let Some(sub) = &despesa.subcategoria_nome {
                                                                    <span class="ml-2 bg-gray-100 text-gray-500 px-2 py-0.5 rounded-full text-[10px] font-bold">{ sub.clone() }</span>
                                                                }
                                                            </td>
                                                            <td class="px-6 py-3 text-gray-500">
                                                                { recorrencia.rotulo() }{ parcela }
                                                                if despesa.fixo {
                                                                    <span class="ml-2 bg-primary-50 text-primary-700 px-2 py-0.5 rounded-full text-[10px] font-bold">{"Fixa"}</span>
                                                                }
                                                            </td>
                                                            <td class="px-6 py-3 text-right font-semibold text-gray-900">{ formatar_moeda(despesa.valor, &simbolo) }</td>
                                                            <td class="px-6 py-3 text-center">
                                                                <button class={classe_pago} onclick={on_pago}>
                                                                    { if despesa.pago { "Pago" } else { "Pendente" } }
                                                                </button>
                                                            </td>
                                                            <td class="px-6 py-3 text-right">
                                                                <button class="p-1.5 text-gray-400 hover:text-primary-600" title="Editar" onclick={on_editar}>
                                                                    { crate::icon_pencil() }
                                                                </button>
                                                                <button class="p-1.5 text-gray-400 hover:text-red-600" title="Excluir" onclick={on_excluir}>
                                                                    { crate::icon_trash() }
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>

                    { dialogo }
                </>
            }
        ) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn despesa(id: i64, categoria_id: i64, data: &str, valor: i64) -> Despesa {
        Despesa {
            id,
            categoria_id,
            categoria_nome: "Moradia".to_string(),
            subcategoria_id: None,
            subcategoria_nome: None,
            cartao_id: None,
            data_inicio: data.to_string(),
            data_fim: None,
            tipo_recorrencia: "mensal".to_string(),
            numero_parcelas: None,
            parcela_atual: None,
            dia_comum_pagamento: None,
            valor,
            fixo: false,
            pago: false,
        }
    }

    #[test]
    fn filtra_por_categoria_mes_e_ano() {
        let lista = vec![
            despesa(1, 10, "2024-01-15", 1_000),
            despesa(2, 10, "2024-02-15", 2_000),
            despesa(3, 20, "2023-02-10", 3_000),
        ];

        let so_categoria = aplicar_filtros(
            &lista,
            &Filtros {
                categoria_id: Some(10),
                ..Filtros::default()
            },
        );
        assert_eq!(so_categoria.len(), 2);

        let fevereiro_2024 = aplicar_filtros(
            &lista,
            &Filtros {
                categoria_id: None,
                mes: Some(2),
                ano: Some(2024),
            },
        );
        assert_eq!(fevereiro_2024.len(), 1);
        assert_eq!(fevereiro_2024[0].id, 2);
    }

    #[test]
    fn filtro_vazio_devolve_tudo() {
        let lista = vec![despesa(1, 10, "2024-01-15", 1_000)];
        assert_eq!(aplicar_filtros(&lista, &Filtros::default()).len(), 1);
    }

    #[test]
    fn data_fora_do_formato_nao_passa_em_filtro_de_periodo() {
        let lista = vec![despesa(1, 10, "invalida", 1_000)];
        let filtros = Filtros {
            categoria_id: None,
            mes: Some(1),
            ano: None,
        };
        assert!(aplicar_filtros(&lista, &filtros).is_empty());
    }

    #[test]
    fn estatisticas_da_lista_filtrada() {
        let lista = vec![
            despesa(1, 10, "2024-01-15", 10_000),
            despesa(2, 10, "2024-02-15", 20_000),
            despesa(3, 10, "2024-03-15", 60_000),
        ];
        let refs: Vec<&Despesa> = lista.iter().collect();
        let stats = estatisticas(&refs);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.valor_total, 90_000);
        assert_eq!(stats.media, 30_000);
        assert_eq!(stats.maior, 60_000);
    }

    #[test]
    fn estatisticas_de_lista_vazia_sao_zero() {
        assert_eq!(estatisticas(&[]), Estatisticas::default());
    }
}
