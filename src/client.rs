use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE},
    Method, StatusCode,
};
use serde_json::Value;

use crate::{
    error::{ApiFailure, WalletPayError},
    order::{CreateOrderRequest, OrderPreview, OrderReconciliationItem},
    Result,
};

/// Client for the Wallet Pay store API.
///
/// Holds the store API key for its whole lifetime; cloning is cheap and clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WalletPayClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

fn authenticated_headers(api_key: &str) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    map.insert(
        HeaderName::from_static("wpay-store-api-key"),
        HeaderValue::from_str(api_key)
            .map_err(|e| WalletPayError::Transport(format!("API request failed: {e}")))?,
    );
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    map.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(map)
}

fn is_success(envelope: &Value) -> bool {
    envelope.get("status").and_then(Value::as_str) == Some("SUCCESS")
}

/// `totalAmount` coercion: numbers truncate toward zero, numeric strings parse
/// as integers. The provider has been seen returning both.
fn coerce_total_amount(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

impl WalletPayClient {
    pub const BASE_URL: &str = "https://pay.wallet.tg/wpay/store-api/v1/";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, Self::BASE_URL)
    }

    /// Build a client against a non-default base URL. Used by the integration
    /// tests; the production endpoint is [`Self::BASE_URL`].
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Performs one API call and returns the parsed response envelope.
    ///
    /// The envelope's `status` field is not interpreted here, only the HTTP
    /// status: non-200 responses become [`WalletPayError::Transport`] carrying
    /// the envelope's `message` field when present.
    async fn execute(&self, method: Method, endpoint: &str, body: Option<&Value>) -> Result<Value> {
        if method != Method::POST && method != Method::GET {
            return Err(WalletPayError::Transport("Invalid HTTP method".to_string()));
        }
        let headers = authenticated_headers(&self.api_key)?;
        let url = format!("{}{endpoint}", self.base_url);
        tracing::debug!(%url, %method, "Wallet Pay API request");
        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let envelope = response.json::<Value>().await?;
        tracing::debug!(%status, response = %envelope, "Wallet Pay API response");
        if status != StatusCode::OK {
            let message = envelope
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(WalletPayError::Transport(message.to_string()));
        }
        Ok(envelope)
    }

    fn data(envelope: &Value) -> Value {
        envelope.get("data").cloned().unwrap_or(Value::Null)
    }

    /// Create a new order. Returns the preview of the created order, with its
    /// pay links.
    pub async fn create_order(&self, request: CreateOrderRequest<'_>) -> Result<OrderPreview> {
        let body = serde_json::to_value(&request)?;
        let envelope = self.execute(Method::POST, "order", Some(&body)).await?;
        if is_success(&envelope) {
            return Ok(serde_json::from_value(Self::data(&envelope))?);
        }
        Err(WalletPayError::CreateOrder(ApiFailure::new(
            envelope,
            "Failed to create order",
        )))
    }

    /// Retrieve the current state of a single order.
    pub async fn get_order_preview(&self, order_id: &str) -> Result<OrderPreview> {
        let envelope = self
            .execute(Method::GET, &format!("order/preview?id={order_id}"), None)
            .await?;
        if is_success(&envelope) {
            return Ok(serde_json::from_value(Self::data(&envelope))?);
        }
        Err(WalletPayError::GetOrderPreview(ApiFailure::new(
            envelope,
            "Failed to retrieve order preview",
        )))
    }

    /// Retrieve one page of the reconciliation order listing, in server order.
    pub async fn get_order_list(
        &self,
        offset: u64,
        count: u64,
    ) -> Result<Vec<OrderReconciliationItem>> {
        let envelope = self
            .execute(
                Method::GET,
                &format!("reconciliation/order-list?offset={offset}&count={count}"),
                None,
            )
            .await?;
        if is_success(&envelope) {
            let items = envelope
                .get("data")
                .and_then(|data| data.get("items"))
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new()));
            return Ok(serde_json::from_value(items)?);
        }
        Err(WalletPayError::GetOrderList(ApiFailure::new(
            envelope,
            "Failed to retrieve order list",
        )))
    }

    /// Retrieve the total amount of all orders of the store.
    pub async fn get_order_amount(&self) -> Result<i64> {
        let envelope = self
            .execute(Method::GET, "reconciliation/order-amount", None)
            .await?;
        if is_success(&envelope) {
            let total = Self::data(&envelope)
                .get("totalAmount")
                .and_then(coerce_total_amount);
            return total.ok_or_else(|| {
                WalletPayError::Transport("API request failed: invalid totalAmount".to_string())
            });
        }
        Err(WalletPayError::GetOrderAmount(ApiFailure::new(
            envelope,
            "Failed to retrieve order amount",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn invalid_method_fails_before_any_network_call() {
        // Nothing listens on this address, the check has to happen first.
        let client = WalletPayClient::with_base_url("key", "http://127.0.0.1:9/");
        let err = client
            .execute(Method::DELETE, "order", None)
            .await
            .unwrap_err();
        match err {
            WalletPayError::Transport(message) => assert_eq!(message, "Invalid HTTP method"),
            other => panic!("expected transport failure, got {other:?}"),
        }
    }

    #[test]
    fn success_envelope_detection() {
        assert!(is_success(&json!({"status": "SUCCESS", "data": {}})));
        assert!(!is_success(&json!({"status": "ALREADY"})));
        assert!(!is_success(&json!({})));
    }

    #[test]
    fn total_amount_coercion() {
        assert_eq!(coerce_total_amount(&json!(42)), Some(42));
        assert_eq!(coerce_total_amount(&json!("42")), Some(42));
        // Fractional amounts truncate toward zero, as the provider's own
        // integer contract implies.
        assert_eq!(coerce_total_amount(&json!(42.9)), Some(42));
        assert_eq!(coerce_total_amount(&json!("not a number")), None);
        assert_eq!(coerce_total_amount(&json!(null)), None);
    }
}
