use std::sync::Arc;

use log::{debug, trace};
use reqwest::Client;

use crate::{config::TwilioConfig, data_objects::SmsMessage, TwilioApiError};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// A minimal client for the Twilio Messages REST API.
#[derive(Clone)]
pub struct TwilioApi {
    config: TwilioConfig,
    client: Arc<Client>,
}

impl TwilioApi {
    pub fn new(config: TwilioConfig) -> Result<Self, TwilioApiError> {
        let client = Client::builder().build().map_err(|e| TwilioApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn url(&self) -> String {
        format!("{TWILIO_API_BASE}/Accounts/{}/Messages.json", self.config.account_sid)
    }

    /// Sends a single SMS and returns the message resource Twilio created for it.
    ///
    /// Failures carry Twilio's own error message; they are reported to the caller and never retried here.
    pub async fn send_message(&self, to: &str, body: &str) -> Result<SmsMessage, TwilioApiError> {
        let url = self.url();
        trace!("📨️ Sending message to {to} via {url}");
        let params = [("To", to), ("From", self.config.from_number.as_str()), ("Body", body)];
        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.account_sid, Some(self.config.auth_token.reveal()))
            .form(&params)
            .send()
            .await
            .map_err(|e| TwilioApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            let message =
                response.json::<SmsMessage>().await.map_err(|e| TwilioApiError::JsonError(e.to_string()))?;
            debug!("📨️ Twilio accepted message {} for {to}", message.sid);
            Ok(message)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| TwilioApiError::RestResponseError(e.to_string()))?;
            Err(TwilioApiError::QueryError { status, message })
        }
    }
}

/// The seam between the request handler and the SMS transport.
#[allow(async_fn_in_trait)]
pub trait SmsDispatcher {
    /// Dispatches a single message and returns the provider's record of it.
    async fn send_sms(&self, to: &str, body: &str) -> Result<SmsMessage, TwilioApiError>;
}

/// The production dispatcher.
///
/// Credentials are resolved from the environment on every call, so no secret-bearing state outlives the request
/// that needed it. Missing credentials surface as [`TwilioApiError::Configuration`] at dispatch time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwilioDispatcher;

impl SmsDispatcher for TwilioDispatcher {
    async fn send_sms(&self, to: &str, body: &str) -> Result<SmsMessage, TwilioApiError> {
        let config = TwilioConfig::try_from_env()?;
        let api = TwilioApi::new(config)?;
        api.send_message(to, body).await
    }
}
