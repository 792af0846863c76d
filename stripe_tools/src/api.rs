use std::sync::Arc;

use log::{debug, trace};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use crate::{
    config::StripeConfig,
    data_objects::{CheckoutSession, Event},
    webhook,
    StripeApiError,
};

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// A minimal client for the two Stripe operations the gateway needs: creating checkout sessions and validating
/// webhook deliveries.
#[derive(Clone)]
pub struct StripeApi {
    config: StripeConfig,
    client: Arc<Client>,
}

impl StripeApi {
    pub fn new(config: StripeConfig) -> Result<Self, StripeApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.secret_key.reveal()))
            .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn webhook_checks_enabled(&self) -> bool {
        self.config.webhook_checks
    }

    /// Creates a payment-mode checkout session for a single ad-hoc line item and returns its hosted page URL
    /// and session id. The optional email pre-fills the customer field on the checkout page.
    pub async fn create_checkout_session(
        &self,
        amount_cents: i64,
        customer_email: Option<&str>,
    ) -> Result<CheckoutSession, StripeApiError> {
        if amount_cents <= 0 {
            return Err(StripeApiError::InvalidAmount(amount_cents));
        }
        let amount = amount_cents.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("mode", "payment"),
            ("allow_promotion_codes", "true"),
            ("success_url", self.config.success_url.as_str()),
            ("cancel_url", self.config.cancel_url.as_str()),
            ("line_items[0][quantity]", "1"),
            ("line_items[0][price_data][currency]", self.config.currency.as_str()),
            ("line_items[0][price_data][unit_amount]", amount.as_str()),
            ("line_items[0][price_data][product_data][name]", self.config.product_name.as_str()),
        ];
        if let Some(email) = customer_email {
            params.push(("customer_email", email));
        }
        trace!("💳️ Creating checkout session for {amount_cents} cents");
        let url = format!("{STRIPE_API_BASE}/checkout/sessions");
        let response = self
            .client
            .post(url)
            .form(&params)
            .send()
            .await
            .map_err(|e| StripeApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            let session =
                response.json::<CheckoutSession>().await.map_err(|e| StripeApiError::JsonError(e.to_string()))?;
            debug!("💳️ Created checkout session {}", session.id);
            Ok(session)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| StripeApiError::RestResponseError(e.to_string()))?;
            Err(StripeApiError::QueryError { status, message })
        }
    }

    /// Validates that a webhook delivery actually comes from Stripe and returns the decoded event.
    pub fn validate_event(&self, payload: &[u8], signature_header: &str) -> Result<Event, StripeApiError> {
        webhook::validate_event(payload, signature_header, &self.config.webhook_secret)
    }
}
