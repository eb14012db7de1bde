use std::sync::Arc;
use axum::http::{HeaderName, Method, header};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::BotConfig;
use crate::handlers::{health_check, invoice_handler};
use crate::telegram::TelegramClient;

mod auth;
mod bot;
mod config;
mod error;
mod handlers;
mod logging;
mod telegram;

#[derive(Clone)]
pub struct AppState {
    config: Arc<BotConfig>,
    telegram: Arc<TelegramClient>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-telegram-init-data"),
        ]);

    Router::new()
        .route("/api/health_check", get(health_check))
        .route("/api/invoice", get(invoice_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::setup();
    dotenvy::from_path(".env").ok();

    let config = Arc::new(BotConfig::from_env()?);
    let telegram = Arc::new(TelegramClient::new(&config.telegram_api_url, &config.bot_token)?);
    let state = AppState {
        config: config.clone(),
        telegram: telegram.clone(),
    };

    let addr = config.api_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("API listening on {}", addr);
    info!("Mini app URL: {}", config.mini_app_url);

    let app = create_router(state);
    let server = async move { axum::serve(listener, app).await };
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("API server stopped: {}", e);
                return Err(e.into());
            }
        }
        _ = bot::run_polling(telegram, config) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::tests::{signed_init_data, TOKEN};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let config = BotConfig::from_lookup(|key| match key {
            "BOT_TOKEN" => Some(TOKEN.to_string()),
            "WEB_APP_URL" => Some("https://gifts.example".to_string()),
            // Nothing listens here; tests never reach the Bot API.
            "TELEGRAM_API_URL" => Some("http://127.0.0.1:9".to_string()),
            _ => None,
        })
        .unwrap();
        let telegram = TelegramClient::new(&config.telegram_api_url, &config.bot_token).unwrap();
        AppState {
            config: Arc::new(config),
            telegram: Arc::new(telegram),
        }
    }

    async fn error_code(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["error"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = create_router(test_state())
            .oneshot(Request::get("/api/health_check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invoice_requires_init_data() {
        let response = create_router(test_state())
            .oneshot(Request::get("/api/invoice?amount=25").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(response).await, "invalid_init_data");
    }

    #[tokio::test]
    async fn test_invoice_rejects_bad_amounts() {
        let init_data = signed_init_data(r#"{"id":7,"first_name":"Ann"}"#);

        for (query, code) in [("amount=30", "unsupported_amount"), ("amount=ten", "invalid_amount"), ("", "unsupported_amount")] {
            let response = create_router(test_state())
                .oneshot(
                    Request::get(format!("/api/invoice?{}", query))
                        .header("X-Telegram-Init-Data", &init_data)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(error_code(response).await, code);
        }
    }

    #[tokio::test]
    async fn test_preflight_allows_init_data_header() {
        let response = create_router(test_state())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/invoice")
                    .header("Origin", "https://gifts.example")
                    .header("Access-Control-Request-Method", "GET")
                    .header("Access-Control-Request-Headers", "x-telegram-init-data")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}
