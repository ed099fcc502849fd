use std::fmt::Display;

/// A `200 OK` response whose envelope status was not `"SUCCESS"`.
///
/// The provider reports most business-level rejections this way, with the
/// details buried in envelope fields that are not part of the typed models.
/// The complete raw envelope is kept so callers can inspect them.
#[derive(Debug)]
pub struct ApiFailure {
    pub payload: serde_json::Value,
    pub message: &'static str,
}

impl ApiFailure {
    pub(crate) fn new(payload: serde_json::Value, message: &'static str) -> Self {
        Self { payload, message }
    }
}

#[derive(Debug)]
pub enum WalletPayError {
    /// HTTP-level or connection-level failure, or an invalid request method.
    Transport(String),
    CreateOrder(ApiFailure),
    GetOrderPreview(ApiFailure),
    GetOrderList(ApiFailure),
    GetOrderAmount(ApiFailure),
}

impl From<reqwest::Error> for WalletPayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(format!("API request failed: {value}"))
    }
}

impl From<serde_json::Error> for WalletPayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Transport(format!("API request failed: {value}"))
    }
}

impl std::error::Error for WalletPayError {}

impl Display for WalletPayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletPayError::Transport(message) => f.write_str(message),
            WalletPayError::CreateOrder(failure)
            | WalletPayError::GetOrderPreview(failure)
            | WalletPayError::GetOrderList(failure)
            | WalletPayError::GetOrderAmount(failure) => f.write_str(failure.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_failure_displays_fixed_message() {
        let envelope = serde_json::json!({"status": "ALREADY", "message": "dup"});
        let err = WalletPayError::CreateOrder(ApiFailure::new(envelope, "Failed to create order"));
        assert_eq!(err.to_string(), "Failed to create order");
    }

    #[test]
    fn transport_failure_displays_derived_message() {
        let err = WalletPayError::Transport("Unknown error".to_string());
        assert_eq!(err.to_string(), "Unknown error");
    }
}
