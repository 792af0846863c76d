use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A newly created Stripe Checkout session: the hosted payment page URL and the session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// A validated Stripe webhook event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub livemode: bool,
    pub data: EventData,
}

/// The payload of a webhook event. The shape of `object` depends on the event type, so it is kept as raw JSON
/// for the caller to interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub object: Value,
}
