use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::constants::SPIN_PRICES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceQuery {
    #[serde(default = "missing_amount")]
    pub amount: String,
}

fn missing_amount() -> String {
    "0".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub invoice_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Outcome reported by the host after the payment sheet closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Cancelled,
    Failed,
    Pending,
}

impl InvoiceStatus {
    pub fn from_host(status: &str) -> Self {
        match status {
            "paid" => InvoiceStatus::Paid,
            "cancelled" => InvoiceStatus::Cancelled,
            "pending" => InvoiceStatus::Pending,
            _ => InvoiceStatus::Failed,
        }
    }
}

pub fn parse_invoice_amount(raw: &str) -> Result<u32, ValidationError> {
    let amount = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::new("invalid_amount"))?;
    validate_invoice_amount(amount)?;
    Ok(amount)
}

pub fn validate_invoice_amount(amount: u32) -> Result<(), ValidationError> {
    if !SPIN_PRICES.contains(&amount) {
        return Err(ValidationError::new("unsupported_amount"));
    }
    Ok(())
}

pub fn invoice_payload(amount: u32, user_id: Option<i64>) -> String {
    match user_id {
        Some(id) => format!("gift:{}:{}", amount, id),
        None => format!("gift:{}:", amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_validation() {
        assert_eq!(parse_invoice_amount("50"), Ok(50));
        assert_eq!(
            parse_invoice_amount("abc").unwrap_err().code,
            "invalid_amount"
        );
        assert_eq!(
            parse_invoice_amount("30").unwrap_err().code,
            "unsupported_amount"
        );
        assert!(validate_invoice_amount(100).is_ok());
    }

    #[test]
    fn test_status_from_host() {
        assert_eq!(InvoiceStatus::from_host("paid"), InvoiceStatus::Paid);
        assert_eq!(InvoiceStatus::from_host("cancelled"), InvoiceStatus::Cancelled);
        assert_eq!(InvoiceStatus::from_host("weird"), InvoiceStatus::Failed);
    }

    #[test]
    fn test_payload() {
        assert_eq!(invoice_payload(25, Some(7)), "gift:25:7");
        assert_eq!(invoice_payload(100, None), "gift:100:");
    }
}
