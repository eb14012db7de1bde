use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::BotConfig;
use crate::telegram::{web_app_keyboard, Message, PreCheckoutQuery, TelegramClient, TelegramError, Update};

const RETRY_DELAY: Duration = Duration::from_secs(3);

const START_TEXT: &str = "Hi! 🎁\nTap the button below to open the mini app and grab your gifts.";
const PAYMENT_TEXT: &str = "Payment received! 🎉";

/// Long-polls the Bot API forever, answering commands and payment updates.
pub async fn run_polling(telegram: Arc<TelegramClient>, config: Arc<BotConfig>) {
    let mut offset = 0;
    info!("Bot polling started");

    loop {
        let updates = match telegram.get_updates(offset).await {
            Ok(updates) => updates,
            Err(e) => {
                warn!("getUpdates failed: {}", e);
                tokio::time::sleep(RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = next_offset(offset, &update);
            if let Err(e) = handle_update(&telegram, &config, update).await {
                error!("Failed to handle update: {}", e);
            }
        }
    }
}

fn next_offset(current: i64, update: &Update) -> i64 {
    current.max(update.update_id + 1)
}

async fn handle_update(
    telegram: &TelegramClient,
    config: &BotConfig,
    update: Update,
) -> Result<(), TelegramError> {
    if let Some(query) = update.pre_checkout_query {
        return handle_pre_checkout(telegram, &query).await;
    }
    if let Some(message) = update.message {
        return handle_message(telegram, config, &message).await;
    }
    Ok(())
}

async fn handle_pre_checkout(telegram: &TelegramClient, query: &PreCheckoutQuery) -> Result<(), TelegramError> {
    info!(
        "Pre-checkout from user {}: {} {} ({})",
        query.from.id, query.total_amount, query.currency, query.invoice_payload
    );
    telegram.answer_pre_checkout_query(&query.id, true).await?;
    Ok(())
}

async fn handle_message(telegram: &TelegramClient, config: &BotConfig, message: &Message) -> Result<(), TelegramError> {
    if let Some(payment) = &message.successful_payment {
        info!(
            "Payment in chat {}: {} {} ({})",
            message.chat.id, payment.total_amount, payment.currency, payment.invoice_payload
        );
        telegram.send_message(message.chat.id, PAYMENT_TEXT, None).await?;
        return Ok(());
    }

    if is_start_command(message.text.as_deref()) {
        let keyboard = web_app_keyboard(&config.mini_app_button, &config.mini_app_url);
        let sent = telegram
            .send_message(message.chat.id, START_TEXT, Some(keyboard))
            .await?;
        info!("Sent start keyboard to chat {} (message {})", message.chat.id, sent.message_id);
    }
    Ok(())
}

fn is_start_command(text: Option<&str>) -> bool {
    text.and_then(|t| t.split_whitespace().next())
        .map(|command| command == "/start" || command.starts_with("/start@"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_command_detection() {
        assert!(is_start_command(Some("/start")));
        assert!(is_start_command(Some("/start ref_123")));
        assert!(is_start_command(Some("/start@StarGiftsBot")));
        assert!(!is_start_command(Some("/starts")));
        assert!(!is_start_command(Some("hello")));
        assert!(!is_start_command(None));
    }

    #[test]
    fn test_offset_only_moves_forward() {
        let update: Update = serde_json::from_value(serde_json::json!({ "update_id": 41 })).unwrap();
        assert_eq!(next_offset(0, &update), 42);
        assert_eq!(next_offset(50, &update), 50);
    }
}
