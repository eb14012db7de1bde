use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use shared::constants::INIT_DATA_HEADER;
use shared::init_data::WebAppUser;

use super::verify_init_data;
use crate::error::Error;
use crate::AppState;

/// The web-view user, proven by a valid `X-Telegram-Init-Data` header.
#[derive(Debug, Clone)]
pub struct VerifiedInitData {
    pub user: Option<WebAppUser>,
}

#[async_trait]
impl FromRequestParts<AppState> for VerifiedInitData {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(INIT_DATA_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let data = verify_init_data(raw, &state.config.bot_token).map_err(|e| {
            tracing::warn!("Rejected init data: {}", e);
            Error::InvalidInitData
        })?;

        // A signed but unreadable user still proves the request came from the web view.
        let user = data.user().unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            None
        });

        Ok(VerifiedInitData { user })
    }
}
