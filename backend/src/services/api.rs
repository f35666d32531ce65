use actix_web::web::{route, scope};
use actix_web::{HttpRequest, HttpResponse, Scope};
use log::debug;
use saber_common::requests::API_PREFIX;
use serde_json::json;

/// Configures the `/api` scope.
///
/// *   **`ANY /api/{tail}`**: answers `404 Not Found` with
///     `{"error": "not_found", "path": ...}`.
pub fn configure_routes() -> Scope {
    scope(API_PREFIX)
        .route("", route().to(not_implemented))
        .route("/{tail:.*}", route().to(not_implemented))
}

async fn not_implemented(req: HttpRequest) -> HttpResponse {
    debug!("{} {} has no handler", req.method(), req.path());
    HttpResponse::NotFound().json(json!({
        "error": "not_found",
        "path": req.path(),
    }))
}
