use thiserror::Error;

#[derive(Debug, Error)]
pub enum StripeApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid REST response: {0}")]
    RestResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Checkout amount must be a positive number of cents, got {0}")]
    InvalidAmount(i64),
    #[error("Could not parse the Stripe-Signature header: {0}")]
    MalformedSignature(String),
    #[error("Webhook signature verification failed: {0}")]
    InvalidSignature(String),
}
