use std::env;

use log::*;

const DEFAULT_SMG_HOST: &str = "127.0.0.1";
const DEFAULT_SMG_PORT: u16 = 8380;

/// Server-level configuration, read once at startup.
///
/// Deliberately absent here: Twilio credentials (resolved lazily inside the dispatch path on every call, see
/// [`twilio_tools::TwilioConfig`]) and Stripe configuration (owned by [`stripe_tools::StripeConfig`]).
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_SMG_HOST.to_string(), port: DEFAULT_SMG_PORT, database_url: String::default() }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SMG_HOST").ok().unwrap_or_else(|| DEFAULT_SMG_HOST.into());
        let port = env::var("SMG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SMG_PORT. {e} Using the default, {DEFAULT_SMG_PORT}, instead."
                    );
                    DEFAULT_SMG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SMG_PORT);
        let database_url = env::var("SMG_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ SMG_DATABASE_URL is not set. Please set it to the URL for the gateway database.");
            String::default()
        });
        Self { host, port, database_url }
    }
}
