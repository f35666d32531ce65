mod config;
mod services;

use std::thread;
use std::time::Duration;

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use crate::config::HostConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::parse();
    let url = config.url();

    if !config.no_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .service(services::api::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};
    use saber_common::requests::{PAYMENTS_CHECKOUT_PATH, USERS_ME_PATH};

    use crate::services;

    macro_rules! host {
        () => {
            test::init_service(
                App::new()
                    .service(services::api::configure_routes())
                    .default_service(web::route().to(services::assets::serve_embedded)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_root_serves_index() {
        let app = host!();
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn test_client_route_falls_back_to_index() {
        let app = host!();
        let root = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        let studio = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/studio?doc=doc-1").to_request(),
        )
        .await;
        assert_eq!(root, studio);
    }

    #[actix_web::test]
    async fn test_api_answers_json_not_found() {
        let app = host!();
        for (method, uri) in [
            (test::TestRequest::get(), USERS_ME_PATH),
            (test::TestRequest::post(), PAYMENTS_CHECKOUT_PATH),
            (test::TestRequest::get(), "/api"),
        ] {
            let res = test::call_service(&app, method.uri(uri).to_request()).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{}", uri);
            let body: serde_json::Value = test::read_body_json(res).await;
            assert_eq!(body["error"], "not_found");
            assert_eq!(body["path"], uri);
        }
    }
}
