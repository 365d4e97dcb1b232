use serde::Serialize;

/// Quantity preloaded into a fresh [`OrderState`].
pub const DEFAULT_QUANTITY: i64 = 250;

/// Substituted when a 4xx body carries no usable `error` message.
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Error occurred";

/// Wire payload for `POST /orders`. The quantity is forwarded exactly as the
/// user entered it; bounds checking is the server's job.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CreateOrderRequest {
    pub quantity: i64,
}

/// Raw transport result handed from the dispatcher to the classifier.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Classified result of one `/orders` exchange.
///
/// The row schema is owned by the server, so `rows` stays an uninterpreted
/// `serde_json::Value` of whatever shape came back. Transport failures and
/// unparseable bodies are not outcomes; they surface as `QuoteError`.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Success { rows: Option<serde_json::Value> },
    ValidationError { message: String },
    ServerError { message: String },
}
