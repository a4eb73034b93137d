use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

mod api;
mod despesa_form;
mod despesas;
mod dialog;
mod money;

use api::{Cartao, Categoria, Despesa, Instituicao, Receita, Resumo};
use despesas::DespesasPage;
use money::{data_br, formatar_moeda, parse_centavos};

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
}

fn default_settings() -> AppSettings {
    AppSettings {
        currency_code: "BRL".to_string(),
        currency_symbol: "R$".to_string(),
    }
}

fn load_settings() -> AppSettings {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item("settings") {
                if let Ok(settings) = serde_json::from_str::<AppSettings>(&raw) {
                    return settings;
                }
            }
        }
    }
    default_settings()
}

fn save_settings(settings: &AppSettings) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(settings) {
                let _ = storage.set_item("settings", &raw);
            }
        }
    }
}

fn simbolo_para(codigo: &str) -> &'static str {
    match codigo {
        "USD" => "$",
        "EUR" => "€",
        _ => "R$",
    }
}

fn guardar_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("access_token", token);
        }
    }
}

fn token_existente() -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item("access_token") {
                return !token.is_empty();
            }
        }
    }
    false
}

pub fn hoje_iso() -> String {
    let agora = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        agora.get_full_year(),
        agora.get_month() + 1,
        agora.get_date()
    )
}

#[derive(Clone, Copy, PartialEq)]
enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Despesas,
    Receitas,
    Cartoes,
    Categorias,
    Ajustes,
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-gray-100 font-sans">
            <div class="hidden md:flex">
                <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="bg-white border-b border-gray-200 h-16 flex items-center justify-end px-6">
            <span class="text-sm text-gray-400 font-medium">{ data_br(&hoje_iso()) }</span>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Painel",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Despesas",
            page: Page::Despesas,
            icon: icon_arrow_down_right,
        },
        NavItem {
            label: "Receitas",
            page: Page::Receitas,
            icon: icon_trending_up,
        },
        NavItem {
            label: "Cartões",
            page: Page::Cartoes,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Categorias",
            page: Page::Categorias,
            icon: icon_tag,
        },
        NavItem {
            label: "Ajustes",
            page: Page::Ajustes,
            icon: icon_settings,
        },
    ];

    let on_logout = Callback::from(move |_| {
        spawn_local(async move {
            let _ = api::post("/api/auth/logout").send().await;
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item("access_token");
                }
                let _ = window.location().reload();
            }
        });
    });

    html! {
        <div class="w-[220px] h-screen bg-white border-r border-gray-200 p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-10 h-10 bg-primary-600 rounded-full flex items-center justify-center text-white font-black">
                    {"G"}
                </div>
                <span class="text-primary-900 text-2xl font-black tracking-tight">{"GranaBro"}</span>
            </div>

            <nav class="flex-1 space-y-1">
                { for nav_items.iter().map(|item| {
                    let is_active = item.page == props.active_page;
                    let class_name = if is_active {
                        "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-primary-50 text-primary-700 w-full"
                    } else {
                        "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-gray-500 hover:bg-gray-50 hover:text-gray-900 w-full"
                    };
                    let on_select = props.on_select.clone();
                    let page = item.page;

                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                        </button>
                    }
                }) }
            </nav>

            <div class="mt-auto pt-4">
                <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-gray-50 transition-colors text-[13px] font-medium text-gray-500">
                    { icon_log_out() }
                    <span>{"Sair"}</span>
                </button>
            </div>
        </div>
    }
}

fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-gray-200">
                <h1 class="text-2xl font-bold text-gray-900">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    UpRight,
    DownRight,
    Wallet,
    Alert,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    valor: String,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-200 flex justify-between items-start">
            <div>
                <p class="text-gray-400 text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class="text-2xl font-bold text-primary-900 tracking-tight">{ props.valor.clone() }</h3>
            </div>
            <div class="p-3 bg-primary-50 rounded-xl">
                {
                    match props.icon {
                        StatIcon::UpRight => icon_trending_up(),
                        StatIcon::DownRight => icon_arrow_down_right(),
                        StatIcon::Wallet => icon_wallet(),
                        StatIcon::Alert => icon_alert(),
                    }
                }
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
fn dashboard_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let simbolo = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "R$".to_string());

    let resumo = use_state(Resumo::default);
    let recentes = use_state(Vec::<Despesa>::new);
    let carregando = use_state(|| true);

    {
        let resumo = resumo.clone();
        let recentes = recentes.clone();
        let carregando = carregando.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::buscar::<Resumo>("/api/dashboard/resumo").await {
                        Ok(dados) => resumo.set(dados),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar resumo: {}", erro))
                        }
                    }
                    match api::buscar::<Vec<Despesa>>("/api/despesas").await {
                        Ok(lista) => recentes.set(lista.into_iter().take(10).collect()),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar despesas: {}", erro))
                        }
                    }
                    carregando.set(false);
                });
                || ()
            },
            (),
        );
    }

    html! {
        { page_shell(
            "Painel",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                        <StatCard title="Receitas do Mês" valor={formatar_moeda(resumo.total_receitas, &simbolo)} icon={StatIcon::UpRight} />
                        <StatCard title="Despesas do Mês" valor={formatar_moeda(resumo.total_despesas, &simbolo)} icon={StatIcon::DownRight} />
                        <StatCard title="Saldo" valor={formatar_moeda(resumo.saldo, &simbolo)} icon={StatIcon::Wallet} />
                        <StatCard title="Contas Pendentes" valor={resumo.despesas_pendentes.to_string()} icon={StatIcon::Alert} />
                    </div>

                    <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
                        <div class="p-6 flex justify-between items-center border-b border-gray-200">
                            <h3 class="font-bold text-gray-900 text-lg">{"Despesas Recentes"}</h3>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-gray-50 text-gray-400 text-[10px] uppercase tracking-widest">
                                        <th class="px-6 py-3 font-bold">{"Data"}</th>
                                        <th class="px-6 py-3 font-bold">{"Categoria"}</th>
                                        <th class="px-6 py-3 font-bold text-right">{"Valor"}</th>
                                        <th class="px-6 py-3 font-bold text-center">{"Situação"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-100">
                                    { if *carregando {
                                        html! { <tr><td colspan="4" class="px-6 py-6 text-center text-gray-400">{"Carregando..."}</td></tr> }
                                    } else if recentes.is_empty() {
                                        html! { <tr><td colspan="4" class="px-6 py-6 text-center text-gray-400">{"Nenhuma despesa lançada ainda."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for recentes.iter().map(|despesa| html! {
                                                    <tr key={despesa.id} class="text-sm hover:bg-gray-50 transition-colors">
                                                        <td class="px-6 py-3 text-gray-500">{ data_br(&despesa.data_inicio) }</td>
                                                        <td class="px-6 py-3 text-gray-900">{ despesa.categoria_nome.clone() }</td>
                                                        <td class="px-6 py-3 text-right font-semibold text-gray-900">{ formatar_moeda(despesa.valor, &simbolo) }</td>
                                                        <td class="px-6 py-3 text-center">
                                                            { if despesa.pago {
                                                                html! { <span class="bg-green-100 text-green-700 px-3 py-1 rounded-full text-[10px] font-bold">{"Pago"}</span> }
                                                            } else {
                                                                html! { <span class="bg-yellow-100 text-yellow-700 px-3 py-1 rounded-full text-[10px] font-bold">{"Pendente"}</span> }
                                                            }}
                                                        </td>
                                                    </tr>
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(ReceitasPage)]
fn receitas_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let simbolo = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "R$".to_string());

    let receitas = use_state(Vec::<Receita>::new);
    let categorias = use_state(Vec::<Categoria>::new);
    let carregando = use_state(|| true);

    let form_descricao = use_state(String::new);
    let form_categoria = use_state(String::new);
    let form_data = use_state(hoje_iso);
    let form_valor = use_state(String::new);
    let form_erro = use_state(|| None::<String>);
    let salvando = use_state(|| false);

    {
        let receitas = receitas.clone();
        let categorias = categorias.clone();
        let carregando = carregando.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::buscar::<Vec<Receita>>("/api/receitas").await {
                        Ok(lista) => receitas.set(lista),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar receitas: {}", erro))
                        }
                    }
                    match api::buscar::<Vec<Categoria>>("/api/categorias/receitas").await {
                        Ok(lista) => categorias.set(lista),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar categorias: {}", erro))
                        }
                    }
                    carregando.set(false);
                });
                || ()
            },
            (),
        );
    }

    let total: i64 = receitas.iter().map(|r| r.valor).sum();

    let on_adicionar = {
        let receitas = receitas.clone();
        let form_descricao = form_descricao.clone();
        let form_categoria = form_categoria.clone();
        let form_data = form_data.clone();
        let form_valor = form_valor.clone();
        let form_erro = form_erro.clone();
        let salvando = salvando.clone();
        Callback::from(move |_| {
            let Ok(categoria_id) = form_categoria.trim().parse::<i64>() else {
                form_erro.set(Some("Selecione uma categoria.".to_string()));
                return;
            };
            if form_data.trim().is_empty() {
                form_erro.set(Some("Informe a data.".to_string()));
                return;
            }
            let valor = match parse_centavos(&form_valor) {
                Ok(valor) => valor,
                Err(erro) => {
                    form_erro.set(Some(erro.to_string()));
                    return;
                }
            };

            form_erro.set(None);
            salvando.set(true);

            let corpo = serde_json::json!({
                "descricao": form_descricao.trim(),
                "categoria_id": categoria_id,
                "data_inicio": form_data.trim(),
                "valor": valor,
            });
            let receitas = receitas.clone();
            let form_descricao = form_descricao.clone();
            let form_valor = form_valor.clone();
            let form_erro = form_erro.clone();
            let salvando = salvando.clone();
            spawn_local(async move {
                match api::enviar_e_ler::<_, Receita>("/api/receitas", &corpo).await {
                    Ok(criada) => {
                        let mut proxima = (*receitas).clone();
                        proxima.insert(0, criada);
                        receitas.set(proxima);
                        form_descricao.set(String::new());
                        form_valor.set(String::new());
                    }
                    Err(erro) => {
                        form_erro.set(Some(format!("Erro ao salvar receita: {}", erro)))
                    }
                }
                salvando.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Receitas",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 lg:grid-cols-12 gap-4 items-stretch">
                        <div class="lg:col-span-4 bg-white p-5 rounded-xl shadow-sm border border-gray-200 flex flex-col justify-center">
                            <div class="flex items-center gap-2 mb-1">
                                <div class="p-1.5 bg-primary-50 rounded-lg">{ icon_wallet() }</div>
                                <span class="text-gray-400 text-[10px] font-bold tracking-widest uppercase">{"Total de Receitas"}</span>
                            </div>
                            <h3 class="text-2xl font-bold text-primary-900 tracking-tight">{ formatar_moeda(total, &simbolo) }</h3>
                        </div>

                        <div class="lg:col-span-8 bg-white p-5 rounded-xl shadow-sm border border-gray-200">
                            <h4 class="text-primary-900 font-bold text-[15px] mb-3">{"Nova Receita"}</h4>
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-4">
                                <div class="space-y-1">
                                    <label class="text-[12px] font-bold text-gray-400">{"Data"}</label>
                                    <input type="date" value={(*form_data).clone()} oninput={{
                                        let form_data = form_data.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            form_data.set(input.value());
                                        })
                                    }} class="w-full bg-gray-50 rounded-lg px-3 py-2 text-sm border border-gray-200" />
                                </div>
                                <div class="space-y-1">
                                    <label class="text-[12px] font-bold text-gray-400">{"Valor"}</label>
                                    <input type="text" inputmode="decimal" placeholder="0,00" value={(*form_valor).clone()} oninput={{
                                        let form_valor = form_valor.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            form_valor.set(input.value());
                                        })
                                    }} class="w-full bg-gray-50 rounded-lg px-3 py-2 text-sm border border-gray-200" />
                                </div>
                                <div class="space-y-1">
                                    <label class="text-[12px] font-bold text-gray-400">{"Descrição"}</label>
                                    <input type="text" placeholder="Origem da receita" value={(*form_descricao).clone()} oninput={{
                                        let form_descricao = form_descricao.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            form_descricao.set(input.value());
                                        })
                                    }} class="w-full bg-gray-50 rounded-lg px-3 py-2 text-sm border border-gray-200" />
                                </div>
                                <div class="space-y-1">
                                    <label class="text-[12px] font-bold text-gray-400">{"Categoria"}</label>
                                    <select value={(*form_categoria).clone()} onchange={{
                                        let form_categoria = form_categoria.clone();
                                        Callback::from(move |e: Event| {
                                            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                            form_categoria.set(select.value());
                                        })
                                    }} class="w-full bg-gray-50 rounded-lg px-3 py-2 text-sm border border-gray-200">
                                        <option value="">{"Selecione"}</option>
                                        { for categorias.iter().map(|c| html! {
                                            <option value={c.id.to_string()}>{ c.nome.clone() }</option>
                                        }) }
                                    </select>
                                </div>
                            </div>
                            <button onclick={on_adicionar} disabled={*salvando} class="bg-primary-600 hover:bg-primary-700 text-white px-5 py-2 rounded-lg text-sm font-bold">
                                { if *salvando { "Salvando..." } else { "Adicionar Receita" } }
                            </button>
                            if let Some(mensagem) = &*form_erro {
                                <p class="text-sm text-red-500 mt-3">{ mensagem.clone() }</p>
                            }
                        </div>
                    </div>

                    <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
                        <div class="p-5 border-b border-gray-200">
                            <h3 class="font-bold text-lg text-gray-900">{"Histórico de Receitas"}</h3>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-gray-50 text-gray-400 text-[10px] uppercase tracking-widest">
                                        <th class="px-6 py-3 font-bold">{"Data"}</th>
                                        <th class="px-6 py-3 font-bold">{"Descrição"}</th>
                                        <th class="px-6 py-3 font-bold">{"Categoria"}</th>
                                        <th class="px-6 py-3 font-bold text-right">{"Valor"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-100">
                                    { if *carregando {
                                        html! { <tr><td colspan="4" class="px-6 py-6 text-center text-gray-400">{"Carregando..."}</td></tr> }
                                    } else if receitas.is_empty() {
                                        html! { <tr><td colspan="4" class="px-6 py-6 text-center text-gray-400">{"Nenhuma receita lançada ainda."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for receitas.iter().map(|receita| html! {
                                                    <tr key={receita.id} class="text-sm hover:bg-gray-50 transition-colors">
                                                        <td class="px-6 py-3 text-gray-500">{ data_br(&receita.data_inicio) }</td>
                                                        <td class="px-6 py-3 text-gray-900">{ receita.descricao.clone().unwrap_or_default() }</td>
                                                        <td class="px-6 py-3">
                                                            <span class="bg-gray-100 text-gray-600 px-3 py-1 rounded-full text-[10px] font-bold">{ receita.categoria_nome.clone() }</span>
                                                        </td>
                                                        <td class="px-6 py-3 text-right font-semibold text-green-700">{ format!("+ {}", formatar_moeda(receita.valor, &simbolo)) }</td>
                                                    </tr>
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct CartaoCampos {
    pub instituicao_id: String,
    pub nome_cartao: String,
    pub ultimos_digitos: String,
    pub limite: String,
    pub dia_vencimento: String,
    pub dia_fechamento: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartaoPayload {
    pub instituicao_id: i64,
    pub nome_cartao: String,
    pub ultimos_digitos: String,
    pub limite_total: i64,
    pub dia_vencimento: u8,
    pub dia_fechamento: u8,
}

fn dia_valido(texto: &str) -> Option<u8> {
    match texto.trim().parse::<u8>() {
        Ok(dia) if (1..=31).contains(&dia) => Some(dia),
        _ => None,
    }
}

pub fn montar_cartao(campos: &CartaoCampos) -> Result<CartaoPayload, String> {
    if campos.instituicao_id.trim().is_empty()
        || campos.nome_cartao.trim().is_empty()
        || campos.ultimos_digitos.trim().is_empty()
        || campos.dia_vencimento.trim().is_empty()
        || campos.dia_fechamento.trim().is_empty()
    {
        return Err("Todos os campos são obrigatórios.".to_string());
    }

    let instituicao_id = campos
        .instituicao_id
        .trim()
        .parse()
        .map_err(|_| "Selecione uma instituição.".to_string())?;

    let digitos = campos.ultimos_digitos.trim();
    if digitos.len() != 4 || !digitos.chars().all(|c| c.is_ascii_digit()) {
        return Err("Os últimos dígitos devem conter exatamente 4 números.".to_string());
    }

    let (Some(dia_vencimento), Some(dia_fechamento)) = (
        dia_valido(&campos.dia_vencimento),
        dia_valido(&campos.dia_fechamento),
    ) else {
        return Err("Dias de vencimento e fechamento devem estar entre 1 e 31.".to_string());
    };

    let limite_total = if campos.limite.trim().is_empty() {
        0
    } else {
        parse_centavos(&campos.limite).map_err(|e| e.to_string())?
    };

    Ok(CartaoPayload {
        instituicao_id,
        nome_cartao: campos.nome_cartao.trim().to_string(),
        ultimos_digitos: digitos.to_string(),
        limite_total,
        dia_vencimento,
        dia_fechamento,
    })
}

#[function_component(CartoesPage)]
fn cartoes_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let simbolo = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "R$".to_string());

    let cartoes = use_state(Vec::<Cartao>::new);
    let instituicoes = use_state(Vec::<Instituicao>::new);
    let carregando = use_state(|| true);
    let recarregar = use_state(|| 0u32);

    let campos = use_state(CartaoCampos::default);
    let form_erro = use_state(|| None::<String>);
    let salvando = use_state(|| false);

    {
        let instituicoes = instituicoes.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::buscar::<Vec<Instituicao>>("/api/instituicoes").await {
                        Ok(lista) => instituicoes.set(lista),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar instituições: {}", erro))
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let cartoes = cartoes.clone();
        let carregando = carregando.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::buscar::<Vec<Cartao>>("/api/cartoes").await {
                        Ok(lista) => cartoes.set(lista),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar cartões: {}", erro))
                        }
                    }
                    carregando.set(false);
                });
                || ()
            },
            *recarregar,
        );
    }

    let editar_campo = |aplicar: fn(&mut CartaoCampos, String)| {
        let campos = campos.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut novos = (*campos).clone();
            aplicar(&mut novos, input.value());
            campos.set(novos);
        })
    };

    let on_instituicao = {
        let campos = campos.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut novos = (*campos).clone();
            novos.instituicao_id = select.value();
            campos.set(novos);
        })
    };

    let on_adicionar = {
        let campos = campos.clone();
        let form_erro = form_erro.clone();
        let salvando = salvando.clone();
        let recarregar = recarregar.clone();
        Callback::from(move |_| {
            let payload = match montar_cartao(&campos) {
                Ok(payload) => payload,
                Err(mensagem) => {
                    form_erro.set(Some(mensagem));
                    return;
                }
            };

            form_erro.set(None);
            salvando.set(true);

            let campos = campos.clone();
            let form_erro = form_erro.clone();
            let salvando = salvando.clone();
            let recarregar = recarregar.clone();
            spawn_local(async move {
                match api::enviar("/api/cartoes", &payload).await {
                    Ok(()) => {
                        campos.set(CartaoCampos::default());
                        recarregar.set(*recarregar + 1);
                    }
                    Err(erro) => form_erro.set(Some(format!("Erro ao salvar cartão: {}", erro))),
                }
                salvando.set(false);
            });
        })
    };

    let classe_input = "w-full bg-gray-50 rounded-lg px-3 py-2 text-sm border border-gray-200";
    let classe_label = "text-[12px] font-bold text-gray-400";

    html! {
        { page_shell(
            "Cartões de Crédito",
            html! {},
            html! {
                <>
                    <div class="bg-white p-5 rounded-xl shadow-sm border border-gray-200">
                        <h4 class="text-primary-900 font-bold text-[15px] mb-3">{"Novo Cartão"}</h4>
                        <div class="grid grid-cols-2 md:grid-cols-6 gap-3 mb-4">
                            <div class="space-y-1 md:col-span-2">
                                <label class={classe_label}>{"Instituição"}</label>
                                <select class={classe_input} value={campos.instituicao_id.clone()} onchange={on_instituicao}>
                                    <option value="">{"Selecione"}</option>
                                    { for instituicoes.iter().map(|i| html! {
                                        <option value={i.id.to_string()}>{ i.nome.clone() }</option>
                                    }) }
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class={classe_label}>{"Nome do Cartão"}</label>
                                <input type="text" class={classe_input} value={campos.nome_cartao.clone()}
                                    oninput={editar_campo(|c, v| c.nome_cartao = v)} />
                            </div>
                            <div class="space-y-1">
                                <label class={classe_label}>{"Últimos 4 Dígitos"}</label>
                                <input type="text" maxlength="4" class={classe_input} value={campos.ultimos_digitos.clone()}
                                    oninput={editar_campo(|c, v| c.ultimos_digitos = v)} />
                            </div>
                            <div class="space-y-1">
                                <label class={classe_label}>{"Limite"}</label>
                                <input type="text" inputmode="decimal" placeholder="0,00" class={classe_input} value={campos.limite.clone()}
                                    oninput={editar_campo(|c, v| c.limite = v)} />
                            </div>
                            <div class="space-y-1">
                                <label class={classe_label}>{"Venc. / Fech."}</label>
                                <div class="flex gap-2">
                                    <input type="number" min="1" max="31" placeholder="Venc." class={classe_input} value={campos.dia_vencimento.clone()}
                                        oninput={editar_campo(|c, v| c.dia_vencimento = v)} />
                                    <input type="number" min="1" max="31" placeholder="Fech." class={classe_input} value={campos.dia_fechamento.clone()}
                                        oninput={editar_campo(|c, v| c.dia_fechamento = v)} />
                                </div>
                            </div>
                        </div>
                        <button onclick={on_adicionar} disabled={*salvando} class="bg-primary-600 hover:bg-primary-700 text-white px-5 py-2 rounded-lg text-sm font-bold">
                            { if *salvando { "Salvando..." } else { "Adicionar Cartão" } }
                        </button>
                        if let Some(mensagem) = &*form_erro {
                            <p class="text-sm text-red-500 mt-3">{ mensagem.clone() }</p>
                        }
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        { if *carregando {
                            html! { <p class="text-sm text-gray-400">{"Carregando..."}</p> }
                        } else if cartoes.is_empty() {
                            html! { <p class="text-sm text-gray-400">{"Nenhum cartão cadastrado."}</p> }
                        } else {
                            html! {
                                <>
                                    { for cartoes.iter().map(|cartao| html! {
                                        <div key={cartao.id} class="bg-primary-900 text-white rounded-2xl p-5 shadow-md">
                                            <div class="flex justify-between items-start mb-6">
                                                <span class="text-sm font-bold">{ cartao.instituicao_nome.clone().unwrap_or_default() }</span>
                                                { icon_credit_card() }
                                            </div>
                                            <p class="text-lg font-bold tracking-widest">{ format!("•••• {}", cartao.ultimos_digitos) }</p>
                                            <p class="text-xs text-white/70 mt-1">{ cartao.nome_cartao.clone() }</p>
                                            <div class="flex justify-between mt-4 text-[11px] text-white/70">
                                                <span>{ format!("Limite {}", formatar_moeda(cartao.limite_total, &simbolo)) }</span>
                                                <span>{ format!("Venc. dia {} · Fech. dia {}", cartao.dia_vencimento, cartao.dia_fechamento) }</span>
                                            </div>
                                        </div>
                                    }) }
                                </>
                            }
                        }}
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(CategoriasPage)]
fn categorias_page() -> Html {
    let categorias = use_state(Vec::<Categoria>::new);
    let subcategorias = use_state(Vec::<api::Subcategoria>::new);
    let selecionada = use_state(|| None::<i64>);
    let recarregar = use_state(|| 0u32);

    let nova_categoria = use_state(String::new);
    let nova_descricao = use_state(String::new);
    let nova_subcategoria = use_state(String::new);
    let form_erro = use_state(|| None::<String>);

    {
        let categorias = categorias.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::buscar::<Vec<Categoria>>("/api/categorias/despesas").await {
                        Ok(lista) => categorias.set(lista),
                        Err(erro) => {
                            gloo_console::error!(format!("Erro ao buscar categorias: {}", erro))
                        }
                    }
                });
                || ()
            },
            *recarregar,
        );
    }

    let selecionar = {
        let selecionada = selecionada.clone();
        let subcategorias = subcategorias.clone();
        Callback::from(move |id: i64| {
            selecionada.set(Some(id));
            subcategorias.set(Vec::new());
            let subcategorias = subcategorias.clone();
            spawn_local(async move {
                match api::buscar_subcategorias(id).await {
                    Ok(lista) => subcategorias.set(lista),
                    Err(erro) => {
                        gloo_console::error!(format!("Erro ao buscar subcategorias: {}", erro))
                    }
                }
            });
        })
    };

    let on_criar_categoria = {
        let nova_categoria = nova_categoria.clone();
        let nova_descricao = nova_descricao.clone();
        let form_erro = form_erro.clone();
        let recarregar = recarregar.clone();
        Callback::from(move |_| {
            let nome = nova_categoria.trim().to_string();
            if nome.is_empty() {
                form_erro.set(Some("O nome da categoria é obrigatório.".to_string()));
                return;
            }
            form_erro.set(None);

            let corpo = serde_json::json!({
                "nome": nome,
                "descricao": nova_descricao.trim(),
            });
            let nova_categoria = nova_categoria.clone();
            let nova_descricao = nova_descricao.clone();
            let form_erro = form_erro.clone();
            let recarregar = recarregar.clone();
            spawn_local(async move {
                match api::enviar("/api/categorias/despesas", &corpo).await {
                    Ok(()) => {
                        nova_categoria.set(String::new());
                        nova_descricao.set(String::new());
                        recarregar.set(*recarregar + 1);
                    }
                    Err(erro) => {
                        form_erro.set(Some(format!("Erro ao criar categoria: {}", erro)))
                    }
                }
            });
        })
    };

    let on_criar_subcategoria = {
        let nova_subcategoria = nova_subcategoria.clone();
        let selecionada = selecionada.clone();
        let selecionar = selecionar.clone();
        let form_erro = form_erro.clone();
        Callback::from(move |_| {
            let Some(categoria_id) = *selecionada else {
                return;
            };
            let nome = nova_subcategoria.trim().to_string();
            if nome.is_empty() {
                form_erro.set(Some("O nome da subcategoria é obrigatório.".to_string()));
                return;
            }
            form_erro.set(None);

            let corpo = serde_json::json!({ "nome": nome });
            let nova_subcategoria = nova_subcategoria.clone();
            let selecionar = selecionar.clone();
            let form_erro = form_erro.clone();
            spawn_local(async move {
                let caminho = format!("/api/categorias/despesas/{}/subcategorias", categoria_id);
                match api::enviar(&caminho, &corpo).await {
                    Ok(()) => {
                        nova_subcategoria.set(String::new());
                        selecionar.emit(categoria_id);
                    }
                    Err(erro) => {
                        form_erro.set(Some(format!("Erro ao criar subcategoria: {}", erro)))
                    }
                }
            });
        })
    };

    let classe_input = "w-full bg-gray-50 rounded-lg px-3 py-2 text-sm border border-gray-200";

    html! {
        { page_shell(
            "Categorias de Despesas",
            html! {},
            html! {
                <>
                    if let Some(mensagem) = &*form_erro {
                        <div class="bg-red-50 border border-red-200 text-red-700 text-sm rounded-lg px-4 py-3">
                            { mensagem.clone() }
                        </div>
                    }

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                            <h3 class="font-bold text-gray-900 text-lg mb-4">{"Categorias"}</h3>
                            <div class="flex gap-2 mb-4">
                                <input type="text" placeholder="Nome" class={classe_input} value={(*nova_categoria).clone()} oninput={{
                                    let nova_categoria = nova_categoria.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        nova_categoria.set(input.value());
                                    })
                                }} />
                                <input type="text" placeholder="Descrição (opcional)" class={classe_input} value={(*nova_descricao).clone()} oninput={{
                                    let nova_descricao = nova_descricao.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        nova_descricao.set(input.value());
                                    })
                                }} />
                                <button onclick={on_criar_categoria} class="bg-primary-600 hover:bg-primary-700 text-white px-4 rounded-lg text-sm font-bold shrink-0">
                                    {"Criar"}
                                </button>
                            </div>
                            <ul class="divide-y divide-gray-100">
                                { for categorias.iter().map(|categoria| {
                                    let ativa = *selecionada == Some(categoria.id);
                                    let selecionar = selecionar.clone();
                                    let id = categoria.id;
                                    let classe = if ativa {
                                        "w-full flex items-center justify-between px-3 py-2 rounded-lg bg-primary-50 text-primary-700 text-sm font-medium"
                                    } else {
                                        "w-full flex items-center justify-between px-3 py-2 rounded-lg hover:bg-gray-50 text-gray-700 text-sm"
                                    };
                                    html! {
                                        <li key={categoria.id} class="py-1">
                                            <button class={classe} onclick={Callback::from(move |_| selecionar.emit(id))}>
                                                <span>{ categoria.nome.clone() }</span>
                                                if let Some(descricao) = &categoria.descricao {
                                                    <span class="text-xs text-gray-400 truncate ml-3">{ descricao.clone() }</span>
                                                }
                                            </button>
                                        </li>
                                    }
                                }) }
                            </ul>
                        </div>

                        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                            <h3 class="font-bold text-gray-900 text-lg mb-4">{"Subcategorias"}</h3>
                            { if selecionada.is_none() {
                                html! { <p class="text-sm text-gray-400">{"Selecione uma categoria para ver as subcategorias."}</p> }
                            } else {
                                html! {
                                    <>
                                        <div class="flex gap-2 mb-4">
                                            <input type="text" placeholder="Nome da subcategoria" class={classe_input} value={(*nova_subcategoria).clone()} oninput={{
                                                let nova_subcategoria = nova_subcategoria.clone();
                                                Callback::from(move |e: InputEvent| {
                                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                    nova_subcategoria.set(input.value());
                                                })
                                            }} />
                                            <button onclick={on_criar_subcategoria} class="bg-primary-600 hover:bg-primary-700 text-white px-4 rounded-lg text-sm font-bold shrink-0">
                                                {"Criar"}
                                            </button>
                                        </div>
                                        <ul class="divide-y divide-gray-100">
                                            { if subcategorias.is_empty() {
                                                html! { <li class="py-2 text-sm text-gray-400">{"Nenhuma subcategoria ainda."}</li> }
                                            } else {
                                                html! {
                                                    <>
                                                        { for subcategorias.iter().map(|sub| html! {
                                                            <li key={sub.id} class="py-2 text-sm text-gray-700">{ sub.nome.clone() }</li>
                                                        }) }
                                                    </>
                                                }
                                            }}
                                        </ul>
                                    </>
                                }
                            }}
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(AjustesPage)]
fn ajustes_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();

    let moeda_atual = settings
        .as_ref()
        .map(|s| s.currency_code.clone())
        .unwrap_or_else(|| "BRL".to_string());

    let on_moeda = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                let codigo = select.value();
                let simbolo = simbolo_para(&codigo).to_string();
                let proximo = AppSettings {
                    currency_code: codigo,
                    currency_symbol: simbolo,
                };
                save_settings(&proximo);
                settings.set(proximo);
            }
        })
    };

    html! {
        { page_shell(
            "Ajustes",
            html! {},
            html! {
                <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 max-w-lg">
                    <h2 class="text-xl font-bold text-gray-900 mb-6">{"Preferências"}</h2>
                    <label class="block text-sm font-medium text-gray-700 mb-2">{"Moeda"}</label>
                    <select value={moeda_atual} onchange={on_moeda} class="w-full px-4 py-2 bg-gray-50 border border-gray-200 rounded-lg text-gray-900 focus:outline-none focus:ring-2 focus:ring-primary-500">
                        <option value="BRL">{"BRL (R$)"}</option>
                        <option value="USD">{"USD ($)"}</option>
                        <option value="EUR">{"EUR (€)"}</option>
                    </select>
                    <p class="text-xs text-gray-400 mt-2">{"A moeda escolhida vale para todos os painéis e relatórios."}</p>
                </div>
            }
        ) }
    }
}

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::Dashboard);
    let auth_status = use_state(|| AuthStatus::Checking);
    let settings = use_state(load_settings);
    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    {
        let auth_status = auth_status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let resposta = api::post("/api/auth/refresh").send().await;

                    match resposta {
                        Ok(resp) if resp.ok() => {
                            if let Ok(json) = resp.json::<serde_json::Value>().await {
                                if let Some(token) =
                                    json.get("access_token").and_then(|v| v.as_str())
                                {
                                    guardar_token(token);
                                }
                            }
                            auth_status.set(AuthStatus::Authenticated);
                        }
                        _ => {
                            // Um token já guardado mantém a sessão após recarregar a página.
                            if token_existente() {
                                auth_status.set(AuthStatus::Authenticated);
                            } else {
                                auth_status.set(AuthStatus::Unauthenticated);
                            }
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Despesas => html! { <DespesasPage /> },
        Page::Receitas => html! { <ReceitasPage /> },
        Page::Cartoes => html! { <CartoesPage /> },
        Page::Categorias => html! { <CategoriasPage /> },
        Page::Ajustes => html! { <AjustesPage /> },
    };

    if *auth_status == AuthStatus::Checking {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-100 text-gray-400">
                {"Verificando sessão..."}
            </div>
        };
    }

    if *auth_status == AuthStatus::Unauthenticated {
        return html! { <AuthScreen on_authenticated={Callback::from(move |_| auth_status.set(AuthStatus::Authenticated))} /> };
    }

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <Layout active_page={*active_page} on_select={on_select}>
                { content }
            </Layout>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}

#[derive(Properties, PartialEq)]
struct AuthScreenProps {
    on_authenticated: Callback<()>,
}

#[function_component(AuthScreen)]
fn auth_screen(props: &AuthScreenProps) -> Html {
    let is_login = use_state(|| true);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let is_login = is_login.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        let confirm_password = confirm_password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let confirm_val = (*confirm_password).clone();
            let on_authenticated = on_authenticated.clone();

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Informe e-mail e senha.".to_string()));
                return;
            }

            if password_val.len() < 8 {
                error.set(Some("A senha deve ter pelo menos 8 caracteres.".to_string()));
                return;
            }

            if !*is_login && password_val != confirm_val {
                error.set(Some("As senhas não conferem.".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let endpoint = if *is_login {
                "/api/auth/login"
            } else {
                "/api/auth/register"
            };
            let error_async = error.clone();
            let loading_async = loading.clone();
            spawn_local(async move {
                let corpo = serde_json::json!({
                    "email": email_val,
                    "password": password_val,
                });

                let requisicao = match api::post(endpoint).json(&corpo) {
                    Ok(requisicao) => requisicao,
                    Err(_) => {
                        error_async.set(Some("Não foi possível montar a requisição.".to_string()));
                        loading_async.set(false);
                        return;
                    }
                };

                match requisicao.send().await {
                    Ok(resp) if resp.ok() => {
                        if let Ok(json) = resp.json::<serde_json::Value>().await {
                            if let Some(token) = json.get("access_token").and_then(|v| v.as_str()) {
                                guardar_token(token);
                            }
                        }
                        on_authenticated.emit(());
                    }
                    Ok(resp) => {
                        let msg = resp
                            .text()
                            .await
                            .unwrap_or_else(|_| "Falha no login.".to_string());
                        error_async.set(Some(msg));
                    }
                    Err(_) => {
                        error_async.set(Some("Erro de rede.".to_string()));
                    }
                }
                loading_async.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        Callback::from(move |_| is_login.set(!*is_login))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 font-sans">
            <div class="w-full max-w-md bg-white border border-gray-200 rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-gray-900">{ if *is_login { "Bem-vindo de volta" } else { "Criar conta" } }</h1>
                    <p class="text-sm text-gray-400 mt-2">
                        { if *is_login { "Entre para continuar." } else { "Comece a organizar suas finanças." } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-gray-700">{"E-mail"}</label>
                        <input
                            type="email"
                            class="w-full px-4 py-2 bg-gray-50 border border-gray-200 rounded-lg text-gray-900 focus:outline-none focus:ring-2 focus:ring-primary-500"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-gray-700">{"Senha"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 bg-gray-50 border border-gray-200 rounded-lg text-gray-900 focus:outline-none focus:ring-2 focus:ring-primary-500"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if !*is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-gray-700">{"Confirmar Senha"}</label>
                            <input
                                type="password"
                                class="w-full px-4 py-2 bg-gray-50 border border-gray-200 rounded-lg text-gray-900 focus:outline-none focus:ring-2 focus:ring-primary-500"
                                value={(*confirm_password).clone()}
                                oninput={{
                                    let confirm_password = confirm_password.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        confirm_password.set(input.value());
                                    })
                                }}
                            />
                        </div>
                    }

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 text-white py-2 rounded-lg font-semibold transition-colors"
                        disabled={*loading}
                    >
                        { if *loading { "Aguarde..." } else if *is_login { "Entrar" } else { "Cadastrar" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-gray-400">
                    { if *is_login { "Não tem conta?" } else { "Já tem uma conta?" } }
                    <button class="ml-2 text-primary-600 font-semibold" onclick={toggle_mode}>
                        { if *is_login { "Cadastre-se" } else { "Entrar" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
fn icon_arrow_down_right() -> Html {
    icon_base("M7 7l10 10M17 7v10H7")
}
fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
fn icon_tag() -> Html {
    icon_base("M20.59 13.41l-7.17 7.17a2 2 0 01-2.83 0L2 12V2h10l8.59 8.59a2 2 0 010 2.82zM7 7h.01")
}
fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
fn icon_pencil() -> Html {
    icon_base("M17 3a2.828 2.828 0 114 4L7.5 20.5 2 22l1.5-5.5L17 3z")
}
fn icon_trash() -> Html {
    icon_base("M3 6h18M8 6V4a2 2 0 012-2h4a2 2 0 012 2v2M19 6v14a2 2 0 01-2 2H7a2 2 0 01-2-2V6M10 11v6M14 11v6")
}
fn icon_alert() -> Html {
    icon_base("M12 9v4M12 17h.01M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0z")
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campos_completos() -> CartaoCampos {
        CartaoCampos {
            instituicao_id: "1".to_string(),
            nome_cartao: "Platinum".to_string(),
            ultimos_digitos: "4421".to_string(),
            limite: "5.000,00".to_string(),
            dia_vencimento: "10".to_string(),
            dia_fechamento: "3".to_string(),
        }
    }

    #[test]
    fn cartao_completo_vira_payload() {
        let payload = montar_cartao(&campos_completos()).unwrap();
        assert_eq!(payload.instituicao_id, 1);
        assert_eq!(payload.ultimos_digitos, "4421");
        assert_eq!(payload.limite_total, 500_000);
        assert_eq!(payload.dia_vencimento, 10);
        assert_eq!(payload.dia_fechamento, 3);
    }

    #[test]
    fn cartao_sem_campos_obrigatorios_e_erro() {
        let mut campos = campos_completos();
        campos.nome_cartao = String::new();
        assert_eq!(
            montar_cartao(&campos),
            Err("Todos os campos são obrigatórios.".to_string())
        );
    }

    #[test]
    fn ultimos_digitos_exigem_quatro_numeros() {
        let mut campos = campos_completos();
        campos.ultimos_digitos = "44a1".to_string();
        assert_eq!(
            montar_cartao(&campos),
            Err("Os últimos dígitos devem conter exatamente 4 números.".to_string())
        );

        campos.ultimos_digitos = "442".to_string();
        assert!(montar_cartao(&campos).is_err());
    }

    #[test]
    fn dias_fora_da_faixa_sao_rejeitados() {
        let mut campos = campos_completos();
        campos.dia_vencimento = "32".to_string();
        assert_eq!(
            montar_cartao(&campos),
            Err("Dias de vencimento e fechamento devem estar entre 1 e 31.".to_string())
        );
    }

    #[test]
    fn limite_vazio_vale_zero() {
        let mut campos = campos_completos();
        campos.limite = String::new();
        assert_eq!(montar_cartao(&campos).unwrap().limite_total, 0);
    }

    #[test]
    fn simbolo_acompanha_a_moeda() {
        assert_eq!(simbolo_para("BRL"), "R$");
        assert_eq!(simbolo_para("USD"), "$");
        assert_eq!(simbolo_para("EUR"), "€");
        assert_eq!(simbolo_para("JPY"), "R$");
    }
}
