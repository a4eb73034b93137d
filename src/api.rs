use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::RequestCredentials;

pub const API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("falha de rede: {0}")]
    Rede(#[from] gloo_net::Error),
    #[error("resposta inesperada do servidor (HTTP {0})")]
    Status(u16),
}

fn token_salvo() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item("access_token").ok()?
}

fn com_credenciais(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match token_salvo() {
        Some(token) if !token.is_empty() => {
            builder.header("Authorization", &format!("Bearer {}", token))
        }
        _ => builder,
    }
}

pub fn get(caminho: &str) -> RequestBuilder {
    com_credenciais(Request::get(&format!("{}{}", API_BASE_URL, caminho)))
}

pub fn post(caminho: &str) -> RequestBuilder {
    com_credenciais(Request::post(&format!("{}{}", API_BASE_URL, caminho)))
}

pub async fn buscar<T: DeserializeOwned>(caminho: &str) -> Result<T, ApiError> {
    let resp = get(caminho).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<T>().await?)
}

pub async fn enviar<B: Serialize>(caminho: &str, corpo: &B) -> Result<(), ApiError> {
    let resp = post(caminho).json(corpo)?.send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

pub async fn enviar_e_ler<B: Serialize, T: DeserializeOwned>(
    caminho: &str,
    corpo: &B,
) -> Result<T, ApiError> {
    let resp = post(caminho).json(corpo)?.send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<T>().await?)
}

pub async fn buscar_subcategorias(categoria_id: i64) -> Result<Vec<Subcategoria>, ApiError> {
    buscar(&format!("/api/despesas/subcategorias/{}", categoria_id)).await
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Categoria {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Subcategoria {
    pub id: i64,
    pub nome: String,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Instituicao {
    pub id: i64,
    pub nome: String,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Cartao {
    pub id: i64,
    pub nome_cartao: String,
    pub ultimos_digitos: String,
    #[serde(default)]
    pub instituicao_nome: Option<String>,
    #[serde(default)]
    pub limite_total: i64,
    pub dia_vencimento: u8,
    pub dia_fechamento: u8,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Despesa {
    pub id: i64,
    pub categoria_id: i64,
    pub categoria_nome: String,
    #[serde(default)]
    pub subcategoria_id: Option<i64>,
    #[serde(default)]
    pub subcategoria_nome: Option<String>,
    #[serde(default)]
    pub cartao_id: Option<i64>,
    pub data_inicio: String,
    #[serde(default)]
    pub data_fim: Option<String>,
    pub tipo_recorrencia: String,
    // "numero_parcelas" carrega "x" quando a série não tem fim.
    #[serde(default)]
    pub numero_parcelas: Option<String>,
    #[serde(default)]
    pub parcela_atual: Option<u32>,
    #[serde(default)]
    pub dia_comum_pagamento: Option<u8>,
    pub valor: i64,
    #[serde(default)]
    pub fixo: bool,
    #[serde(default)]
    pub pago: bool,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Receita {
    pub id: i64,
    #[serde(default)]
    pub descricao: Option<String>,
    pub categoria_nome: String,
    pub data_inicio: String,
    pub valor: i64,
}

#[derive(Clone, PartialEq, Deserialize, Default)]
pub struct Resumo {
    #[serde(default)]
    pub total_receitas: i64,
    #[serde(default)]
    pub total_despesas: i64,
    #[serde(default)]
    pub saldo: i64,
    #[serde(default)]
    pub despesas_pendentes: u32,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct ToggleResposta {
    pub success: bool,
    #[serde(default)]
    pub pago: bool,
    #[serde(default)]
    pub message: String,
}
