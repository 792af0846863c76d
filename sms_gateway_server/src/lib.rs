//! # SMS Gateway server
//! This module hosts the HTTP surface of the gateway. It is responsible for:
//! * Accepting authenticated SMS dispatch requests, running the access-policy check and handing validated
//!   messages to the Twilio transport.
//! * Receiving Stripe webhook deliveries and validating their signatures.
//! * Creating Stripe checkout sessions.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/send-sms`: Role-guarded SMS dispatch.
//! * `/payments/checkout`: Checkout session creation.
//! * `/payments/webhook`: Stripe webhook receiver.
pub mod auth;
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod payment_routes;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
