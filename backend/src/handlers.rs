use axum::{
    extract::{Query, State},
    response::Json,
};
use shared::constants::INVOICE_CURRENCY;
use shared::invoice::{invoice_payload, parse_invoice_amount, InvoiceQuery, InvoiceResponse};
use tracing::info;

use crate::auth::middleware::VerifiedInitData;
use crate::error::Error;
use crate::telegram::{Invoice, LabeledPrice};
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

/// Issues a Stars invoice link for one paid spin.
pub async fn invoice_handler(
    State(state): State<AppState>,
    init_data: VerifiedInitData,
    Query(query): Query<InvoiceQuery>,
) -> Result<Json<InvoiceResponse>, Error> {
    let amount = parse_invoice_amount(&query.amount).map_err(|e| match &*e.code {
        "unsupported_amount" => Error::UnsupportedAmount,
        _ => Error::InvalidAmount,
    })?;

    let user_id = init_data.user.as_ref().map(|u| u.id);
    let invoice = Invoice {
        title: "Random Gift".to_string(),
        description: format!("Buy a random gift for {} stars.", amount),
        payload: invoice_payload(amount, user_id),
        currency: INVOICE_CURRENCY.to_string(),
        prices: vec![LabeledPrice {
            label: format!("{} Stars", amount),
            amount,
        }],
    };

    let invoice_link = state.telegram.create_invoice_link(&invoice).await?;
    info!("Created invoice for {} stars (user {:?})", amount, user_id);

    Ok(Json(InvoiceResponse { invoice_link }))
}
