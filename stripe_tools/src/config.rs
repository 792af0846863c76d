use log::*;
use smg_common::{parse_boolean_flag, Secret};

#[derive(Debug, Clone, Default)]
pub struct StripeConfig {
    pub secret_key: Secret<String>,
    pub webhook_secret: Secret<String>,
    pub success_url: String,
    pub cancel_url: String,
    pub currency: String,
    pub product_name: String,
    /// If false, webhook signature checks are skipped entirely. Only ever disable this on a local dev box.
    pub webhook_checks: bool,
}

impl StripeConfig {
    pub fn from_env_or_default() -> Self {
        let secret_key = Secret::new(std::env::var("STRIPE_SECRET_KEY").unwrap_or_else(|_| {
            warn!("STRIPE_SECRET_KEY not set, using a useless default. Checkout sessions will not work.");
            "sk_test_00000000".to_string()
        }));
        let webhook_secret = Secret::new(std::env::var("STRIPE_WEBHOOK_SECRET").unwrap_or_else(|_| {
            warn!("STRIPE_WEBHOOK_SECRET not set, using a useless default. Webhook validation will reject everything.");
            "whsec_00000000".to_string()
        }));
        let success_url = std::env::var("STRIPE_SUCCESS_URL").unwrap_or_default();
        let cancel_url = std::env::var("STRIPE_CANCEL_URL").unwrap_or_default();
        let currency = std::env::var("STRIPE_CURRENCY").unwrap_or_else(|_| "usd".to_string());
        let product_name = std::env::var("STRIPE_PRODUCT_NAME").unwrap_or_else(|_| "Donation".to_string());
        let webhook_checks = parse_boolean_flag(std::env::var("STRIPE_WEBHOOK_CHECKS").ok(), true);
        if !webhook_checks {
            warn!("🚨️ Stripe webhook signature checks are DISABLED. Do not run like this in production.");
        }
        Self { secret_key, webhook_secret, success_url, cancel_url, currency, product_name, webhook_checks }
    }
}
