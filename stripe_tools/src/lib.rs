mod api;
mod config;
mod data_objects;
mod error;
mod webhook;

pub use api::StripeApi;
pub use config::StripeConfig;
pub use data_objects::{CheckoutSession, Event, EventData};
pub use error::StripeApiError;
pub use webhook::{parse_event, sign_payload, validate_event};
