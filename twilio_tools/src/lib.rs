mod api;
mod config;
mod data_objects;
mod error;

pub use api::{SmsDispatcher, TwilioApi, TwilioDispatcher};
pub use config::TwilioConfig;
pub use data_objects::SmsMessage;
pub use error::TwilioApiError;
