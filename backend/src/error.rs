use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;

use crate::telegram::TelegramError;

#[derive(Debug)]
pub enum Error {
    InvalidInitData,
    InvalidAmount,
    UnsupportedAmount,
    Telegram(TelegramError),
}

impl From<TelegramError> for Error {
    fn from(err: TelegramError) -> Self {
        Error::Telegram(err)
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidInitData => StatusCode::UNAUTHORIZED,
            Error::InvalidAmount | Error::UnsupportedAmount => StatusCode::BAD_REQUEST,
            Error::Telegram(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInitData => "invalid_init_data",
            Error::InvalidAmount => "invalid_amount",
            Error::UnsupportedAmount => "unsupported_amount",
            Error::Telegram(_) => "telegram",
        }
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::Telegram(e) = &self {
            tracing::error!("Telegram API call failed: {}", e);
        }

        let body = json!({ "error": self.code() }).to_string();
        Response::builder()
            .status(self.status())
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap_or_else(|_| Response::new(Body::empty()))
    }
}
