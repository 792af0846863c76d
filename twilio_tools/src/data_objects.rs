use serde::{Deserialize, Serialize};

/// The subset of Twilio's message resource that the gateway cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsMessage {
    pub sid: String,
    pub to: String,
    #[serde(default)]
    pub status: Option<String>,
}
