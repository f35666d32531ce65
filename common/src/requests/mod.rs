//! Wire contracts of the REST endpoints the front end talks to.
//!
//! None of these endpoints live in this repository. The types here pin down
//! the shapes the paired backend must honour, and [`decode_response`] turns a
//! raw status + body into a typed result so the views never swallow failures.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entitlement::Entitlement;

/// Prefix shared by every backend call.
pub const API_PREFIX: &str = "/api";
pub const USERS_ME_PATH: &str = "/api/users/me/";
pub const DOCUMENTS_PATH: &str = "/api/documents/";
pub const AUTH_REGISTER_PATH: &str = "/api/auth/register/";
pub const PAYMENTS_CHECKOUT_PATH: &str = "/api/payments/checkout/";

/// Number of documents on the dashboard's "recent" list.
pub const RECENT_DOCUMENTS_LIMIT: usize = 5;

/// `GET /api/documents/?limit=N&order_by=-updated_at`
pub fn recent_documents_path(limit: usize) -> String {
    format!("{}?limit={}&order_by=-updated_at", DOCUMENTS_PATH, limit)
}

/// Response of `GET /api/users/me/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub plan: String,
    pub documents_count: u32,
}

impl UserProfile {
    pub fn entitlement(&self) -> Entitlement {
        Entitlement::from_plan(&self.plan)
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// One document of the dashboard list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub document_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl DocumentSummary {
    pub fn studio_href(&self) -> String {
        format!("/studio?doc={}", urlencoding::encode(&self.id))
    }
}

/// The document list comes back either paginated or as a bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DocumentList {
    Page { results: Vec<DocumentSummary> },
    Plain(Vec<DocumentSummary>),
}

impl DocumentList {
    pub fn into_documents(self) -> Vec<DocumentSummary> {
        match self {
            DocumentList::Page { results } => results,
            DocumentList::Plain(documents) => documents,
        }
    }
}

/// Body of `POST /api/documents/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl CreateDocumentRequest {
    pub fn untitled(template_id: Option<String>) -> Self {
        Self {
            title: "Novo Documento".to_string(),
            template_id,
        }
    }
}

/// Body of `POST /api/auth/register/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Client-side checks before posting. Returns the first problem found.
    pub fn check(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome é obrigatório".to_string());
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => {}
            _ => return Err("E-mail inválido".to_string()),
        }
        if self.password.chars().count() < 8 {
            return Err("A palavra-passe deve ter pelo menos 8 caracteres".to_string());
        }
        Ok(())
    }
}

/// Body of `POST /api/payments/checkout/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub plan: String,
}

/// Response of `POST /api/payments/checkout/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("falha de rede: {0}")]
    Network(String),
    #[error("o servidor respondeu {status}")]
    Status { status: u16, body: String },
    #[error("resposta inválida: {0}")]
    Decode(String),
    #[error("pedido inválido: {0}")]
    Encode(String),
}

impl FetchError {
    /// Whether a retry button makes sense for this error.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            FetchError::Decode(_) | FetchError::Encode(_) => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

/// Interprets a finished HTTP exchange.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            status,
            body: body.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Like [`decode_response`] for endpoints whose body is not used.
pub fn expect_success(status: u16, body: &str) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status {
            status,
            body: body.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"id":"9","title":"TFC","type":"tfc","created_at":"2024-01-01","updated_at":"2024-01-02"}"#;

    #[test]
    fn test_recent_documents_path() {
        assert_eq!(
            recent_documents_path(RECENT_DOCUMENTS_LIMIT),
            "/api/documents/?limit=5&order_by=-updated_at"
        );
    }

    #[test]
    fn test_paged_and_plain_lists_decode_alike() {
        let paged: DocumentList =
            decode_response(200, &format!(r#"{{"count":1,"results":[{}]}}"#, DOC)).unwrap();
        let plain: DocumentList = decode_response(200, &format!("[{}]", DOC)).unwrap();
        assert_eq!(paged.into_documents(), plain.clone().into_documents());
        let docs = plain.into_documents();
        assert_eq!(docs[0].document_type, "tfc");
        assert_eq!(docs[0].studio_href(), "/studio?doc=9");
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        let err = decode_response::<UserProfile>(404, r#"{"detail":"Not found."}"#).unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
        let err = decode_response::<UserProfile>(503, "").unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "o servidor respondeu 503");
    }

    #[test]
    fn test_expect_success_ignores_body() {
        assert_eq!(expect_success(201, ""), Ok(()));
        assert!(matches!(
            expect_success(400, "{}"),
            Err(FetchError::Status { status: 400, .. })
        ));
    }

    #[test]
    fn test_html_body_is_a_decode_error() {
        let err = decode_response::<UserProfile>(200, "<!doctype html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_profile_entitlement_and_first_name() {
        let profile: UserProfile = decode_response(
            200,
            r#"{"id":"1","name":"Ana Maria","email":"ana@x.ao","plan":"Premium","documents_count":3}"#,
        )
        .unwrap();
        assert_eq!(profile.entitlement(), Entitlement::Premium);
        assert_eq!(profile.first_name(), "Ana");
    }

    #[test]
    fn test_create_request_omits_missing_template() {
        let body = serde_json::to_string(&CreateDocumentRequest::untitled(None)).unwrap();
        assert_eq!(body, r#"{"title":"Novo Documento"}"#);
        let body =
            serde_json::to_string(&CreateDocumentRequest::untitled(Some("1".to_string()))).unwrap();
        assert_eq!(body, r#"{"title":"Novo Documento","template_id":"1"}"#);
    }

    #[test]
    fn test_register_checks() {
        let mut request = RegisterRequest {
            name: "Ana".to_string(),
            email: "ana@saber.ao".to_string(),
            password: "segredo123".to_string(),
        };
        assert!(request.check().is_ok());
        request.email = "ana".to_string();
        assert_eq!(request.check(), Err("E-mail inválido".to_string()));
        request.email = "ana@saber.ao".to_string();
        request.password = "curta".to_string();
        assert!(request.check().is_err());
    }
}
