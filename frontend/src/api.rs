//! REST client. Every call returns `Result<T, FetchError>`; nothing is
//! swallowed here, the views decide how to surface a failure.

use gloo_net::http::{Request, Response};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use saber_common::requests::{
    decode_response, expect_success, recent_documents_path, CheckoutRequest, CheckoutSession,
    CreateDocumentRequest, DocumentList, DocumentSummary, FetchError, RegisterRequest, UserProfile,
    AUTH_REGISTER_PATH, DOCUMENTS_PATH, PAYMENTS_CHECKOUT_PATH, RECENT_DOCUMENTS_LIMIT,
    USERS_ME_PATH,
};

/// Prefix for every API path, set at build time with `SABER_API_BASE`.
fn api_url(path: &str) -> String {
    let base = option_env!("SABER_API_BASE").unwrap_or("");
    format!("{}{}", base.trim_end_matches('/'), path)
}

async fn read(response: Response) -> Result<(u16, String), FetchError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    Ok((status, body))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let url = api_url(path);
    debug!("GET {}", url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let (status, body) = read(response).await?;
    decode_response(status, &body)
}

async fn post_raw<B: Serialize>(path: &str, body: &B) -> Result<(u16, String), FetchError> {
    let url = api_url(path);
    debug!("POST {}", url);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| FetchError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    read(response).await
}

pub async fn current_user() -> Result<UserProfile, FetchError> {
    get_json(USERS_ME_PATH).await
}

pub async fn recent_documents() -> Result<Vec<DocumentSummary>, FetchError> {
    let list: DocumentList = get_json(&recent_documents_path(RECENT_DOCUMENTS_LIMIT)).await?;
    Ok(list.into_documents())
}

pub async fn create_document(request: &CreateDocumentRequest) -> Result<DocumentSummary, FetchError> {
    let (status, body) = post_raw(DOCUMENTS_PATH, request).await?;
    decode_response(status, &body)
}

pub async fn register(request: &RegisterRequest) -> Result<(), FetchError> {
    let (status, body) = post_raw(AUTH_REGISTER_PATH, request).await?;
    expect_success(status, &body)
}

pub async fn checkout(request: &CheckoutRequest) -> Result<CheckoutSession, FetchError> {
    let (status, body) = post_raw(PAYMENTS_CHECKOUT_PATH, request).await?;
    decode_response(status, &body)
}
