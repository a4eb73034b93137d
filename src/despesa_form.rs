use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::{self, Cartao, Categoria, Despesa, Subcategoria};
use crate::dialog::{opcoes_edicao, Escopo, OptionDialog};
use crate::money::parse_centavos;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Recorrencia {
    Unica,
    Semanal,
    Quinzenal,
    Mensal,
    Bimestral,
    Trimestral,
    Quadrimestral,
    Semestral,
    Anual,
}

impl Recorrencia {
    pub const TODAS: [Recorrencia; 9] = [
        Recorrencia::Unica,
        Recorrencia::Semanal,
        Recorrencia::Quinzenal,
        Recorrencia::Mensal,
        Recorrencia::Bimestral,
        Recorrencia::Trimestral,
        Recorrencia::Quadrimestral,
        Recorrencia::Semestral,
        Recorrencia::Anual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Recorrencia::Unica => "unica",
            Recorrencia::Semanal => "semanal",
            Recorrencia::Quinzenal => "quinzenal",
            Recorrencia::Mensal => "mensal",
            Recorrencia::Bimestral => "bimestral",
            Recorrencia::Trimestral => "trimestral",
            Recorrencia::Quadrimestral => "quadrimestral",
            Recorrencia::Semestral => "semestral",
            Recorrencia::Anual => "anual",
        }
    }

    pub fn rotulo(self) -> &'static str {
        match self {
            Recorrencia::Unica => "Única",
            Recorrencia::Semanal => "Semanal",
            Recorrencia::Quinzenal => "Quinzenal",
            Recorrencia::Mensal => "Mensal",
            Recorrencia::Bimestral => "Bimestral",
            Recorrencia::Trimestral => "Trimestral",
            Recorrencia::Quadrimestral => "Quadrimestral",
            Recorrencia::Semestral => "Semestral",
            Recorrencia::Anual => "Anual",
        }
    }

    /// Tipos desconhecidos caem em mensal, o mesmo padrão do gerador de
    /// parcelas do servidor.
    pub fn parse(texto: &str) -> Recorrencia {
        Recorrencia::TODAS
            .into_iter()
            .find(|r| r.as_str() == texto)
            .unwrap_or(Recorrencia::Mensal)
    }

    pub fn recorrente(self) -> bool {
        self != Recorrencia::Unica
    }
}

/// O que o formulário mostra e exige, em função dos três sinais que o
/// controlam: tipo de recorrência, cartão selecionado e compra parcelada.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlanoCampos {
    pub mostra_campos_padrao: bool,
    pub mostra_campos_parcelados: bool,
    pub mostra_opcao_parcelada: bool,
    pub mostra_aviso_fatura: bool,
    pub mostra_data_fim: bool,
    pub mostra_dia_comum: bool,
    pub rotulo_valor: &'static str,
    pub ajuda_valor: &'static str,
    pub rotulo_data: &'static str,
    pub valor_obrigatorio: bool,
    pub recorrencia_obrigatoria: bool,
    pub data_obrigatoria: bool,
    pub parcelamento_obrigatorio: bool,
}

pub fn planejar(recorrencia: Recorrencia, tem_cartao: bool, compra_parcelada: bool) -> PlanoCampos {
    // A compra parcelada só existe com cartão selecionado.
    let parcelada = tem_cartao && compra_parcelada;
    let recorrente = recorrencia.recorrente();

    PlanoCampos {
        mostra_campos_padrao: !parcelada,
        mostra_campos_parcelados: parcelada,
        mostra_opcao_parcelada: tem_cartao,
        mostra_aviso_fatura: tem_cartao,
        mostra_data_fim: !parcelada && recorrente,
        mostra_dia_comum: !parcelada && recorrente && !tem_cartao,
        rotulo_valor: if recorrente {
            "Valor por Parcela *"
        } else {
            "Valor da Despesa *"
        },
        ajuda_valor: if recorrente {
            "Este será o valor de cada parcela gerada (ex: aluguel mensal)"
        } else {
            "Valor total desta despesa específica"
        },
        rotulo_data: if tem_cartao {
            "Data da Compra *"
        } else {
            "Data de Início *"
        },
        valor_obrigatorio: !parcelada,
        recorrencia_obrigatoria: !parcelada,
        data_obrigatoria: !parcelada,
        parcelamento_obrigatorio: parcelada,
    }
}

/// Contexto da despesa em tela, o que as ações de excluir e salvar
/// consultam antes de disparar qualquer requisição.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DespesaContexto {
    pub id: Option<i64>,
    pub recorrencia: Recorrencia,
    pub em_edicao: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Confirmacao {
    Simples,
    Escolha,
}

impl DespesaContexto {
    pub fn confirmacao_exclusao(&self) -> Result<(i64, Confirmacao), &'static str> {
        let id = self.id.ok_or("Erro: ID da despesa não encontrado.")?;
        let modo = if self.recorrencia.recorrente() {
            Confirmacao::Escolha
        } else {
            Confirmacao::Simples
        };
        Ok((id, modo))
    }

    pub fn exige_escopo(&self) -> bool {
        self.em_edicao && self.recorrencia.recorrente()
    }
}

/// Entradas cruas do formulário, antes de qualquer validação.
#[derive(Clone, PartialEq, Default)]
pub struct Campos {
    pub categoria_id: String,
    pub subcategoria_id: String,
    pub cartao_id: String,
    pub data_inicio: String,
    pub data_fim: String,
    pub recorrencia: Recorrencia,
    pub dia_comum: String,
    pub valor: String,
    pub fixo: bool,
    pub compra_parcelada: bool,
    pub valor_total: String,
    pub qtd_parcelas: String,
    pub mes_primeira_fatura: String,
}

impl Default for Recorrencia {
    fn default() -> Self {
        Recorrencia::Unica
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DespesaPayload {
    pub categoria_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategoria_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cartao_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_recorrencia: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dia_comum_pagamento: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<i64>,
    pub fixo: bool,
    pub compra_parcelada: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qtd_parcelas: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mes_primeira_fatura: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<&'static str>,
}

fn opt_i64(texto: &str) -> Option<i64> {
    texto.trim().parse().ok()
}

/// Valida as entradas e monta o corpo da requisição. Campos que o plano
/// atual esconde são descartados mesmo que guardem valores antigos.
pub fn montar_payload(campos: &Campos) -> Result<DespesaPayload, String> {
    let categoria_id =
        opt_i64(&campos.categoria_id).ok_or_else(|| "Selecione uma categoria.".to_string())?;
    let subcategoria_id = opt_i64(&campos.subcategoria_id);
    let cartao_id = opt_i64(&campos.cartao_id);

    let plano = planejar(campos.recorrencia, cartao_id.is_some(), campos.compra_parcelada);

    if plano.parcelamento_obrigatorio {
        let valor_total = parse_centavos(&campos.valor_total).map_err(|e| e.to_string())?;
        let qtd_parcelas: u32 = campos
            .qtd_parcelas
            .trim()
            .parse()
            .map_err(|_| "Informe a quantidade de parcelas.".to_string())?;
        if qtd_parcelas == 0 {
            return Err("A quantidade de parcelas deve ser maior que zero.".to_string());
        }
        let mes = campos.mes_primeira_fatura.trim();
        if mes.is_empty() {
            return Err("Informe o mês da primeira fatura.".to_string());
        }

        return Ok(DespesaPayload {
            categoria_id,
            subcategoria_id,
            cartao_id,
            data_inicio: None,
            data_fim: None,
            tipo_recorrencia: None,
            dia_comum_pagamento: None,
            valor: None,
            fixo: campos.fixo,
            compra_parcelada: true,
            valor_total: Some(valor_total),
            qtd_parcelas: Some(qtd_parcelas),
            mes_primeira_fatura: Some(mes.to_string()),
            scope: None,
        });
    }

    if campos.data_inicio.trim().is_empty() {
        return Err("Informe a data de início.".to_string());
    }
    let valor = parse_centavos(&campos.valor).map_err(|e| e.to_string())?;

    let dia_comum = if plano.mostra_dia_comum && !campos.dia_comum.trim().is_empty() {
        match campos.dia_comum.trim().parse::<u8>() {
            Ok(dia) if (1..=31).contains(&dia) => Some(dia),
            Ok(_) => return Err("Dia comum deve estar entre 1 e 31.".to_string()),
            Err(_) => None,
        }
    } else {
        None
    };

    let data_fim = if plano.mostra_data_fim && !campos.data_fim.trim().is_empty() {
        Some(campos.data_fim.trim().to_string())
    } else {
        None
    };

    Ok(DespesaPayload {
        categoria_id,
        subcategoria_id,
        cartao_id,
        data_inicio: Some(campos.data_inicio.trim().to_string()),
        data_fim,
        tipo_recorrencia: Some(campos.recorrencia.as_str()),
        dia_comum_pagamento: dia_comum,
        valor: Some(valor),
        fixo: campos.fixo,
        compra_parcelada: false,
        valor_total: None,
        qtd_parcelas: None,
        mes_primeira_fatura: None,
        scope: None,
    })
}

fn carregar_subcategorias(categoria_id: String, lista: UseStateHandle<Vec<Subcategoria>>) {
    // A lista volta ao placeholder imediatamente; falha de rede ou de parse
    // é registrada no console e o select fica sem opções.
    lista.set(Vec::new());
    let Some(id) = opt_i64(&categoria_id) else {
        return;
    };
    spawn_local(async move {
        match api::buscar_subcategorias(id).await {
            Ok(subcategorias) => lista.set(subcategorias),
            Err(erro) => gloo_console::error!(format!("Erro ao buscar subcategorias: {}", erro)),
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct DespesaFormProps {
    pub categorias: Vec<Categoria>,
    pub cartoes: Vec<Cartao>,
    #[prop_or_default]
    pub despesa: Option<Despesa>,
    pub on_salva: Callback<()>,
    pub on_cancelar: Callback<()>,
}

#[function_component(DespesaForm)]
pub fn despesa_form(props: &DespesaFormProps) -> Html {
    let edicao = props.despesa.clone();
    let contexto = DespesaContexto {
        id: edicao.as_ref().map(|d| d.id),
        recorrencia: edicao
            .as_ref()
            .map(|d| Recorrencia::parse(&d.tipo_recorrencia))
            .unwrap_or(Recorrencia::Unica),
        em_edicao: edicao.is_some(),
    };

    let categoria_id = use_state(|| {
        edicao
            .as_ref()
            .map(|d| d.categoria_id.to_string())
            .unwrap_or_default()
    });
    let subcategoria_id = use_state(|| {
        edicao
            .as_ref()
            .and_then(|d| d.subcategoria_id)
            .map(|id| id.to_string())
            .unwrap_or_default()
    });
    let cartao_id = use_state(|| {
        edicao
            .as_ref()
            .and_then(|d| d.cartao_id)
            .map(|id| id.to_string())
            .unwrap_or_default()
    });
    let data_inicio = use_state(|| {
        edicao
            .as_ref()
            .map(|d| d.data_inicio.clone())
            .unwrap_or_else(crate::hoje_iso)
    });
    let data_fim = use_state(|| {
        edicao
            .as_ref()
            .and_then(|d| d.data_fim.clone())
            .unwrap_or_default()
    });
    let recorrencia = use_state(|| contexto.recorrencia);
    let dia_comum = use_state(|| {
        edicao
            .as_ref()
            .and_then(|d| d.dia_comum_pagamento)
            .map(|dia| dia.to_string())
            .unwrap_or_default()
    });
    let valor = use_state(|| {
        edicao
            .as_ref()
            .map(|d| crate::money::formatar_centavos(d.valor))
            .unwrap_or_default()
    });
    let fixo = use_state(|| edicao.as_ref().map(|d| d.fixo).unwrap_or(false));
    let compra_parcelada = use_state(|| false);
    let valor_total = use_state(String::new);
    let qtd_parcelas = use_state(String::new);
    let mes_primeira_fatura = use_state(String::new);

    let subcategorias = use_state(Vec::<Subcategoria>::new);
    let erro = use_state(|| None::<String>);
    let salvando = use_state(|| false);
    let pendente = use_state(|| None::<DespesaPayload>);

    {
        let categoria_inicial = (*categoria_id).clone();
        let subcategorias = subcategorias.clone();
        use_effect_with_deps(
            move |_| {
                if !categoria_inicial.is_empty() {
                    carregar_subcategorias(categoria_inicial, subcategorias);
                }
                || ()
            },
            (),
        );
    }

    let plano = planejar(
        *recorrencia,
        !cartao_id.is_empty(),
        *compra_parcelada,
    );

    let on_categoria = {
        let categoria_id = categoria_id.clone();
        let subcategoria_id = subcategoria_id.clone();
        let subcategorias = subcategorias.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let escolhida = select.value();
            subcategoria_id.set(String::new());
            carregar_subcategorias(escolhida.clone(), subcategorias.clone());
            categoria_id.set(escolhida);
        })
    };

    let on_subcategoria = {
        let subcategoria_id = subcategoria_id.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            subcategoria_id.set(select.value());
        })
    };

    let on_cartao = {
        let cartao_id = cartao_id.clone();
        let compra_parcelada = compra_parcelada.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let escolhido = select.value();
            if escolhido.is_empty() {
                // Sem cartão não existe compra parcelada.
                compra_parcelada.set(false);
            }
            cartao_id.set(escolhido);
        })
    };

    let on_recorrencia = {
        let recorrencia = recorrencia.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            recorrencia.set(Recorrencia::parse(&select.value()));
        })
    };

    let on_parcelada = {
        let compra_parcelada = compra_parcelada.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            compra_parcelada.set(input.checked());
        })
    };

    let on_fixo = {
        let fixo = fixo.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            fixo.set(input.checked());
        })
    };

    let campos_atuais = {
        let categoria_id = categoria_id.clone();
        let subcategoria_id = subcategoria_id.clone();
        let cartao_id = cartao_id.clone();
        let data_inicio = data_inicio.clone();
        let data_fim = data_fim.clone();
        let recorrencia = recorrencia.clone();
        let dia_comum = dia_comum.clone();
        let valor = valor.clone();
        let fixo = fixo.clone();
        let compra_parcelada = compra_parcelada.clone();
        let valor_total = valor_total.clone();
        let qtd_parcelas = qtd_parcelas.clone();
        let mes_primeira_fatura = mes_primeira_fatura.clone();
        move || Campos {
            categoria_id: (*categoria_id).clone(),
            subcategoria_id: (*subcategoria_id).clone(),
            cartao_id: (*cartao_id).clone(),
            data_inicio: (*data_inicio).clone(),
            data_fim: (*data_fim).clone(),
            recorrencia: *recorrencia,
            dia_comum: (*dia_comum).clone(),
            valor: (*valor).clone(),
            fixo: *fixo,
            compra_parcelada: *compra_parcelada,
            valor_total: (*valor_total).clone(),
            qtd_parcelas: (*qtd_parcelas).clone(),
            mes_primeira_fatura: (*mes_primeira_fatura).clone(),
        }
    };

    let despachar = {
        let erro = erro.clone();
        let salvando = salvando.clone();
        let on_salva = props.on_salva.clone();
        let id_edicao = contexto.id;
        move |mut payload: DespesaPayload, escopo: Option<Escopo>| {
            payload.scope = escopo.map(Escopo::as_str);
            let erro = erro.clone();
            let salvando = salvando.clone();
            let on_salva = on_salva.clone();
            salvando.set(true);
            spawn_local(async move {
                let caminho = match id_edicao {
                    Some(id) => format!("/api/despesas/{}", id),
                    None => "/api/despesas".to_string(),
                };
                match api::enviar(&caminho, &payload).await {
                    Ok(()) => on_salva.emit(()),
                    Err(e) => erro.set(Some(format!("Erro ao salvar despesa: {}", e))),
                }
                salvando.set(false);
            });
        }
    };

    let on_submit = {
        let campos_atuais = campos_atuais.clone();
        let erro = erro.clone();
        let pendente = pendente.clone();
        let despachar = despachar.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match montar_payload(&campos_atuais()) {
                Err(mensagem) => erro.set(Some(mensagem)),
                Ok(payload) => {
                    erro.set(None);
                    if contexto.exige_escopo() {
                        // Despesa recorrente em edição: o envio espera a
                        // escolha de escopo no diálogo.
                        pendente.set(Some(payload));
                    } else {
                        despachar(payload, None);
                    }
                }
            }
        })
    };

    let on_escopo = {
        let pendente = pendente.clone();
        let despachar = despachar.clone();
        Callback::from(move |escolha: Option<Escopo>| {
            let payload = (*pendente).clone();
            pendente.set(None);
            if let (Some(escopo), Some(payload)) = (escolha, payload) {
                despachar(payload, Some(escopo));
            }
        })
    };

    let classe_input = "w-full px-3 py-2 bg-gray-50 border border-gray-200 rounded-lg text-sm text-gray-900 focus:outline-none focus:ring-2 focus:ring-primary-500";
    let classe_label = "block text-xs font-bold text-gray-500 uppercase tracking-wide mb-1";

    html! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
            <h3 class="text-lg font-bold text-gray-900 mb-4">
                { if contexto.em_edicao { "Editar Despesa" } else { "Nova Despesa" } }
            </h3>

            <form onsubmit={on_submit} class="space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class={classe_label}>{"Categoria *"}</label>
                        <select class={classe_input} value={(*categoria_id).clone()} onchange={on_categoria}>
                            <option value="">{"Selecione uma categoria"}</option>
                            { for props.categorias.iter().map(|c| html! {
                                <option value={c.id.to_string()} selected={c.id.to_string() == *categoria_id}>{ c.nome.clone() }</option>
                            }) }
                        </select>
                    </div>
                    <div>
                        <label class={classe_label}>{"Subcategoria"}</label>
                        <select class={classe_input} value={(*subcategoria_id).clone()} onchange={on_subcategoria}>
                            <option value="">{"Selecione uma subcategoria (opcional)"}</option>
                            { for subcategorias.iter().map(|s| html! {
                                <option value={s.id.to_string()} selected={s.id.to_string() == *subcategoria_id}>{ s.nome.clone() }</option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class={classe_label}>{"Cartão de Crédito"}</label>
                        <select class={classe_input} value={(*cartao_id).clone()} onchange={on_cartao}>
                            <option value="">{"Sem cartão"}</option>
                            { for props.cartoes.iter().map(|c| html! {
                                <option value={c.id.to_string()} selected={c.id.to_string() == *cartao_id}>
                                    { format!("{} •••• {}", c.nome_cartao, c.ultimos_digitos) }
                                </option>
                            }) }
                        </select>
                    </div>
                    if plano.mostra_campos_padrao {
                        <div>
                            <label class={classe_label}>{ plano.rotulo_data }</label>
                            <input type="date" class={classe_input} required={plano.data_obrigatoria} value={(*data_inicio).clone()} oninput={{
                                let data_inicio = data_inicio.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    data_inicio.set(input.value());
                                })
                            }} />
                            if plano.mostra_aviso_fatura {
                                <p class="text-[10px] text-yellow-600 mt-1">{"O vencimento será calculado automaticamente conforme a fatura."}</p>
                            }
                        </div>
                    }
                </div>

                if plano.mostra_opcao_parcelada {
                    <label class="flex items-center gap-2 text-sm text-gray-700">
                        <input type="checkbox" checked={*compra_parcelada} onchange={on_parcelada} />
                        <span class="font-medium">{"Compra Parcelada"}</span>
                        <span class="text-xs text-gray-400">{"(um bem dividido em parcelas na fatura)"}</span>
                    </label>
                }

                if plano.mostra_campos_padrao {
                    <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div>
                            <label class={classe_label}>{"Tipo de Recorrência *"}</label>
                            <select class={classe_input} required={plano.recorrencia_obrigatoria} value={recorrencia.as_str().to_string()} onchange={on_recorrencia}>
                                { for Recorrencia::TODAS.iter().map(|r| html! {
                                    <option value={r.as_str()} selected={*r == *recorrencia}>{ r.rotulo() }</option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label class={classe_label}>{ plano.rotulo_valor }</label>
                            <input type="text" inputmode="decimal" placeholder="0,00" class={classe_input} required={plano.valor_obrigatorio} value={(*valor).clone()} oninput={{
                                let valor = valor.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    valor.set(input.value());
                                })
                            }} />
                            <p class="text-xs text-gray-400 mt-1">{ plano.ajuda_valor }</p>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        if plano.mostra_data_fim {
                            <div>
                                <label class={classe_label}>{"Data de Fim"}</label>
                                <input type="date" class={classe_input} value={(*data_fim).clone()} oninput={{
                                    let data_fim = data_fim.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        data_fim.set(input.value());
                                    })
                                }} />
                                <p class="text-xs text-gray-400 mt-1">{"Em branco, a despesa se repete sem prazo."}</p>
                            </div>
                        }
                        if plano.mostra_dia_comum {
                            <div>
                                <label class={classe_label}>{"Dia Comum de Pagamento"}</label>
                                <input type="number" min="1" max="31" class={classe_input} value={(*dia_comum).clone()} oninput={{
                                    let dia_comum = dia_comum.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        dia_comum.set(input.value());
                                    })
                                }} />
                            </div>
                        }
                    </div>

                    <label class="flex items-center gap-2 text-sm text-gray-700">
                        <input type="checkbox" checked={*fixo} onchange={on_fixo} />
                        <span class="font-medium">{"Despesa fixa"}</span>
                    </label>
                    </>
                }

                if plano.mostra_campos_parcelados {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div>
                            <label class={classe_label}>{"Valor Total do Bem *"}</label>
                            <input type="text" inputmode="decimal" placeholder="0,00" class={classe_input} required={plano.parcelamento_obrigatorio} value={(*valor_total).clone()} oninput={{
                                let valor_total = valor_total.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    valor_total.set(input.value());
                                })
                            }} />
                        </div>
                        <div>
                            <label class={classe_label}>{"Quantidade de Parcelas *"}</label>
                            <input type="number" min="1" class={classe_input} required={plano.parcelamento_obrigatorio} value={(*qtd_parcelas).clone()} oninput={{
                                let qtd_parcelas = qtd_parcelas.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    qtd_parcelas.set(input.value());
                                })
                            }} />
                        </div>
                        <div>
                            <label class={classe_label}>{"Mês da Primeira Fatura *"}</label>
                            <input type="month" class={classe_input} required={plano.parcelamento_obrigatorio} value={(*mes_primeira_fatura).clone()} oninput={{
                                let mes_primeira_fatura = mes_primeira_fatura.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    mes_primeira_fatura.set(input.value());
                                })
                            }} />
                        </div>
                    </div>
                }

                if let Some(mensagem) = &*erro {
                    <p class="text-sm text-red-500">{ mensagem.clone() }</p>
                }

                <div class="flex gap-3 pt-2">
                    <button type="submit" disabled={*salvando} class="bg-primary-600 hover:bg-primary-700 text-white px-5 py-2 rounded-lg text-sm font-bold">
                        { if *salvando { "Salvando..." } else { "Salvar Despesa" } }
                    </button>
                    <button type="button" onclick={{
                        let on_cancelar = props.on_cancelar.clone();
                        Callback::from(move |_| on_cancelar.emit(()))
                    }} class="bg-gray-200 hover:bg-gray-300 text-gray-700 px-5 py-2 rounded-lg text-sm font-bold">
                        {"Cancelar"}
                    </button>
                </div>
            </form>

            if pendente.is_some() {
                <OptionDialog
                    titulo="Salvar Alterações"
                    mensagem="Esta é uma despesa recorrente. Como deseja aplicar as alterações?"
                    opcoes={opcoes_edicao()}
                    on_close={on_escopo}
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campos_padrao() -> Campos {
        Campos {
            categoria_id: "3".to_string(),
            data_inicio: "2024-05-01".to_string(),
            recorrencia: Recorrencia::Mensal,
            valor: "150,00".to_string(),
            ..Campos::default()
        }
    }

    #[test]
    fn unica_esconde_data_fim_e_dia_comum() {
        let plano = planejar(Recorrencia::Unica, false, false);
        assert!(!plano.mostra_data_fim);
        assert!(!plano.mostra_dia_comum);
        assert_eq!(plano.rotulo_valor, "Valor da Despesa *");
    }

    #[test]
    fn recorrente_mostra_data_fim_e_dia_comum_sem_cartao() {
        let plano = planejar(Recorrencia::Mensal, false, false);
        assert!(plano.mostra_data_fim);
        assert!(plano.mostra_dia_comum);
        assert_eq!(plano.rotulo_valor, "Valor por Parcela *");
        assert_eq!(plano.rotulo_data, "Data de Início *");
    }

    #[test]
    fn cartao_esconde_dia_comum_e_troca_rotulo_da_data() {
        let plano = planejar(Recorrencia::Mensal, true, false);
        assert!(plano.mostra_data_fim);
        assert!(!plano.mostra_dia_comum);
        assert!(plano.mostra_opcao_parcelada);
        assert!(plano.mostra_aviso_fatura);
        assert_eq!(plano.rotulo_data, "Data da Compra *");
    }

    #[test]
    fn compra_parcelada_troca_o_conjunto_de_campos_obrigatorios() {
        let plano = planejar(Recorrencia::Mensal, true, true);
        assert!(!plano.mostra_campos_padrao);
        assert!(plano.mostra_campos_parcelados);
        assert!(!plano.valor_obrigatorio);
        assert!(!plano.recorrencia_obrigatoria);
        assert!(!plano.data_obrigatoria);
        assert!(plano.parcelamento_obrigatorio);
    }

    #[test]
    fn compra_parcelada_sem_cartao_nao_existe() {
        let plano = planejar(Recorrencia::Mensal, false, true);
        assert!(plano.mostra_campos_padrao);
        assert!(!plano.mostra_campos_parcelados);
        assert!(!plano.mostra_opcao_parcelada);
    }

    #[test]
    fn exclusao_sem_id_e_um_erro() {
        let contexto = DespesaContexto {
            id: None,
            recorrencia: Recorrencia::Mensal,
            em_edicao: false,
        };
        assert_eq!(
            contexto.confirmacao_exclusao(),
            Err("Erro: ID da despesa não encontrado.")
        );
    }

    #[test]
    fn exclusao_escolhe_o_dialogo_pelo_tipo() {
        let unica = DespesaContexto {
            id: Some(7),
            recorrencia: Recorrencia::Unica,
            em_edicao: false,
        };
        assert_eq!(unica.confirmacao_exclusao(), Ok((7, Confirmacao::Simples)));

        let mensal = DespesaContexto {
            id: Some(7),
            recorrencia: Recorrencia::Mensal,
            em_edicao: false,
        };
        assert_eq!(mensal.confirmacao_exclusao(), Ok((7, Confirmacao::Escolha)));
    }

    #[test]
    fn escopo_so_e_exigido_em_edicao_de_recorrente() {
        let casos = [
            (Recorrencia::Unica, false, false),
            (Recorrencia::Unica, true, false),
            (Recorrencia::Mensal, false, false),
            (Recorrencia::Mensal, true, true),
        ];
        for (recorrencia, em_edicao, esperado) in casos {
            let contexto = DespesaContexto {
                id: Some(1),
                recorrencia,
                em_edicao,
            };
            assert_eq!(contexto.exige_escopo(), esperado);
        }
    }

    #[test]
    fn payload_padrao_converte_valor_e_inclui_recorrencia() {
        let mut campos = campos_padrao();
        campos.data_fim = "2024-12-01".to_string();
        campos.dia_comum = "5".to_string();
        let payload = montar_payload(&campos).unwrap();
        assert_eq!(payload.valor, Some(15_000));
        assert_eq!(payload.tipo_recorrencia, Some("mensal"));
        assert_eq!(payload.data_fim.as_deref(), Some("2024-12-01"));
        assert_eq!(payload.dia_comum_pagamento, Some(5));
        assert!(!payload.compra_parcelada);
        assert_eq!(payload.scope, None);
    }

    #[test]
    fn payload_unica_descarta_residuos_de_recorrencia() {
        let mut campos = campos_padrao();
        campos.recorrencia = Recorrencia::Unica;
        campos.data_fim = "2024-12-01".to_string();
        campos.dia_comum = "5".to_string();
        let payload = montar_payload(&campos).unwrap();
        assert_eq!(payload.data_fim, None);
        assert_eq!(payload.dia_comum_pagamento, None);
    }

    #[test]
    fn cartao_selecionado_descarta_dia_comum() {
        let mut campos = campos_padrao();
        campos.cartao_id = "2".to_string();
        campos.dia_comum = "5".to_string();
        let payload = montar_payload(&campos).unwrap();
        assert_eq!(payload.cartao_id, Some(2));
        assert_eq!(payload.dia_comum_pagamento, None);
    }

    #[test]
    fn dia_comum_fora_da_faixa_e_erro() {
        let mut campos = campos_padrao();
        campos.dia_comum = "32".to_string();
        assert_eq!(
            montar_payload(&campos),
            Err("Dia comum deve estar entre 1 e 31.".to_string())
        );
    }

    #[test]
    fn categoria_vazia_e_erro() {
        let mut campos = campos_padrao();
        campos.categoria_id = String::new();
        assert_eq!(
            montar_payload(&campos),
            Err("Selecione uma categoria.".to_string())
        );
    }

    #[test]
    fn payload_parcelado_usa_os_campos_da_fatura() {
        let mut campos = campos_padrao();
        campos.cartao_id = "2".to_string();
        campos.compra_parcelada = true;
        campos.valor_total = "1.200,00".to_string();
        campos.qtd_parcelas = "12".to_string();
        campos.mes_primeira_fatura = "2024-06".to_string();
        let payload = montar_payload(&campos).unwrap();
        assert!(payload.compra_parcelada);
        assert_eq!(payload.valor_total, Some(120_000));
        assert_eq!(payload.qtd_parcelas, Some(12));
        assert_eq!(payload.mes_primeira_fatura.as_deref(), Some("2024-06"));
        assert_eq!(payload.valor, None);
        assert_eq!(payload.tipo_recorrencia, None);
        assert_eq!(payload.data_inicio, None);
    }

    #[test]
    fn parcelas_zeradas_sao_rejeitadas() {
        let mut campos = campos_padrao();
        campos.cartao_id = "2".to_string();
        campos.compra_parcelada = true;
        campos.valor_total = "1.200,00".to_string();
        campos.qtd_parcelas = "0".to_string();
        campos.mes_primeira_fatura = "2024-06".to_string();
        assert_eq!(
            montar_payload(&campos),
            Err("A quantidade de parcelas deve ser maior que zero.".to_string())
        );
    }

    #[test]
    fn recorrencia_desconhecida_cai_em_mensal() {
        assert_eq!(Recorrencia::parse("quinzenal"), Recorrencia::Quinzenal);
        assert_eq!(Recorrencia::parse("diaria"), Recorrencia::Mensal);
    }
}
