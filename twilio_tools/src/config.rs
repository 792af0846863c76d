use smg_common::Secret;

use crate::TwilioApiError;

/// Twilio account credentials and the sending phone number.
///
/// By design there is no `from_env_or_default` here: missing credentials are a hard error discovered at dispatch
/// time, and the config is constructed fresh inside the dispatch path rather than held at process scope.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: Secret<String>,
    pub from_number: String,
}

impl TwilioConfig {
    pub fn try_from_env() -> Result<Self, TwilioApiError> {
        let account_sid = require_env("TWILIO_ACCOUNT_SID")?;
        let auth_token = Secret::new(require_env("TWILIO_AUTH_TOKEN")?);
        let from_number = require_env("TWILIO_PHONE_NUMBER")?;
        Ok(Self { account_sid, auth_token, from_number })
    }
}

fn require_env(name: &str) -> Result<String, TwilioApiError> {
    std::env::var(name).map_err(|_| TwilioApiError::Configuration(format!("{name} is not set")))
}
