//! Client library for the Telegram Wallet Pay store API.
//!
//! [`WalletPayClient`] wraps the `https://pay.wallet.tg/wpay/store-api/v1/`
//! endpoints: creating an order, fetching a single order preview, and the two
//! reconciliation calls (order list and total order amount). Every operation is
//! a single stateless request/response round trip; successful envelopes map
//! onto typed models, unsuccessful ones surface as [`WalletPayError`] variants
//! that keep the raw response payload for provider-specific diagnostics.
//!
//! ```no_run
//! use wallet_pay::{CreateOrderRequest, OrderAmount, WalletPayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wallet_pay::WalletPayError> {
//!     let client = WalletPayClient::new("your-store-api-key");
//!     let order = client
//!         .create_order(CreateOrderRequest {
//!             amount: OrderAmount {
//!                 currency_code: "USD",
//!                 amount: 10.0,
//!             },
//!             description: "VPN subscription",
//!             external_id: "order-1",
//!             timeout_seconds: 600,
//!             customer_telegram_user_id: "12345",
//!             return_url: None,
//!             fail_return_url: None,
//!             custom_data: None,
//!         })
//!         .await?;
//!     println!("pay link: {:?}", order.pay_link);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
/// Wire types of the store API
mod order;

pub use client::WalletPayClient;
pub use error::{ApiFailure, WalletPayError};
pub use order::{
    CreateOrderRequest, MoneyAmount, OrderAmount, OrderPreview, OrderReconciliationItem,
    OrderStatus,
};

pub type Result<T> = std::result::Result<T, WalletPayError>;
