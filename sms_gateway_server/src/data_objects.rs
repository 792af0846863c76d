use serde::{Deserialize, Serialize};

/// The request body of the SMS dispatch route. Both fields are required; they are optional here so that the
/// handler (rather than the JSON deserializer) can reject incomplete requests with the documented message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendSmsParams {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResult {
    pub success: bool,
    pub message_sid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutParams {
    pub amount_cents: i64,
    #[serde(default)]
    pub email: Option<String>,
}
