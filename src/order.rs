use serde::{Deserialize, Serialize};

/// Body of the create order call.
///
/// Optional fields are omitted from the serialized body entirely when unset,
/// the provider rejects explicit nulls.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest<'a> {
    pub amount: OrderAmount<'a>,
    pub description: &'a str,
    pub external_id: &'a str,
    /// Payment waiting time in seconds.
    pub timeout_seconds: u64,
    pub customer_telegram_user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_return_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAmount<'a> {
    pub currency_code: &'a str,
    pub amount: f64,
}

/// Monetary amount as the provider returns it. The amount itself comes back
/// as a decimal string, e.g. `"10.00"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyAmount {
    pub currency_code: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Active,
    Expired,
    Paid,
    Cancelled,
}

/// Snapshot of a single order, built from the envelope's `data` field.
///
/// Only `id` is required; everything else mirrors whatever the provider sent.
/// Timestamps are kept as the ISO 8601 strings from the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPreview {
    pub id: String,
    pub status: Option<OrderStatus>,
    pub number: Option<String>,
    pub amount: Option<MoneyAmount>,
    pub auto_conversion_currency: Option<String>,
    pub created_date_time: Option<String>,
    pub expiration_date_time: Option<String>,
    pub completed_date_time: Option<String>,
    pub pay_link: Option<String>,
    pub direct_pay_link: Option<String>,
}

/// One row of the reconciliation order listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReconciliationItem {
    pub id: String,
    pub status: Option<OrderStatus>,
    pub amount: Option<MoneyAmount>,
    pub external_id: Option<String>,
    pub customer_telegram_user_id: Option<String>,
    pub created_date_time: Option<String>,
    pub expiration_date_time: Option<String>,
    pub payment_date_time: Option<String>,
    /// Payment option details are not modeled, kept as raw JSON.
    pub selected_payment_option: Option<serde_json::Value>,
}
