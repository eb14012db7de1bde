use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::time::Duration;

pub const POLL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug)]
pub enum TelegramError {
    Http(reqwest::Error),
    Api { description: String },
}

impl fmt::Display for TelegramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {}", e),
            Self::Api { description } => write!(f, "Bot API error: {}", description),
        }
    }
}

impl std::error::Error for TelegramError {}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub pre_checkout_query: Option<PreCheckoutQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
    pub successful_payment: Option<SuccessfulPayment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreCheckoutQuery {
    pub id: String,
    pub from: User,
    pub currency: String,
    pub total_amount: u32,
    pub invoice_payload: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: u32,
    pub invoice_payload: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabeledPrice {
    pub label: String,
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    pub payload: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
}

/// Minimal Bot API client covering what the mini-app needs.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(api_url: &str, bot_token: &str) -> Result<Self, TelegramError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .build()?;
        Ok(Self {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), bot_token),
        })
    }

    async fn call<P: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<R, TelegramError> {
        let response: ApiResponse<R> = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(params)
            .send()
            .await?
            .json()
            .await?;

        match (response.ok, response.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(TelegramError::Api {
                description: response
                    .description
                    .unwrap_or_else(|| format!("{} returned no result", method)),
            }),
        }
    }

    pub async fn create_invoice_link(&self, invoice: &Invoice) -> Result<String, TelegramError> {
        // Stars invoices carry an empty provider token.
        let mut params = serde_json::to_value(invoice).unwrap_or_else(|_| json!({}));
        params["provider_token"] = json!("");
        self.call("createInvoiceLink", &params).await
    }

    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            &json!({
                "offset": offset,
                "timeout": POLL_TIMEOUT_SECS,
                "allowed_updates": ["message", "pre_checkout_query"],
            }),
        )
        .await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<serde_json::Value>,
    ) -> Result<Message, TelegramError> {
        let mut params = json!({ "chat_id": chat_id, "text": text });
        if let Some(markup) = reply_markup {
            params["reply_markup"] = markup;
        }
        self.call("sendMessage", &params).await
    }

    pub async fn answer_pre_checkout_query(&self, query_id: &str, ok: bool) -> Result<bool, TelegramError> {
        self.call(
            "answerPreCheckoutQuery",
            &json!({ "pre_checkout_query_id": query_id, "ok": ok }),
        )
        .await
    }
}

/// Single-button keyboard that opens the mini-app.
pub fn web_app_keyboard(button_text: &str, url: &str) -> serde_json::Value {
    json!({
        "inline_keyboard": [[
            { "text": button_text, "web_app": { "url": url } }
        ]]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_parsing() {
        let raw = json!([
            {
                "update_id": 10,
                "message": { "message_id": 1, "chat": { "id": 5 }, "text": "/start" }
            },
            {
                "update_id": 11,
                "pre_checkout_query": {
                    "id": "q1",
                    "from": { "id": 5, "first_name": "Ann" },
                    "currency": "XTR",
                    "total_amount": 25,
                    "invoice_payload": "gift:25:5"
                }
            }
        ]);
        let updates: Vec<Update> = serde_json::from_value(raw).unwrap();
        assert_eq!(updates[0].message.as_ref().unwrap().text.as_deref(), Some("/start"));
        assert_eq!(updates[1].pre_checkout_query.as_ref().unwrap().total_amount, 25);
    }

    #[test]
    fn test_error_envelope() {
        let raw = json!({ "ok": false, "description": "Unauthorized" });
        let response: ApiResponse<String> = serde_json::from_value(raw).unwrap();
        assert!(!response.ok);
        assert_eq!(response.description.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_keyboard_shape() {
        let markup = web_app_keyboard("Open", "https://gifts.example");
        assert_eq!(markup["inline_keyboard"][0][0]["web_app"]["url"], "https://gifts.example");
    }
}
