//! Payment route handlers.
//!
//! These sit under the `/payments` scope and front the Stripe REST API: one route creates a hosted checkout
//! session, the other receives Stripe's webhook callbacks. The webhook route verifies the `Stripe-Signature`
//! header before trusting anything in the payload (unless signature checks have been explicitly disabled for
//! local development).
use actix_web::{post, web, HttpRequest, HttpResponse};
use log::*;
use stripe_tools::StripeApi;

use crate::{data_objects::CheckoutParams, errors::ServerError};

pub const STRIPE_SIGNATURE_HEADER: &str = "stripe-signature";

#[post("/checkout")]
pub async fn checkout(
    params: web::Json<CheckoutParams>,
    api: web::Data<StripeApi>,
) -> Result<HttpResponse, ServerError> {
    let params = params.into_inner();
    trace!("💳️ Received checkout session request for {} cents", params.amount_cents);
    let session = api.create_checkout_session(params.amount_cents, params.email.as_deref()).await?;
    info!("💳️ Created checkout session {}", session.id);
    Ok(HttpResponse::Ok().json(session))
}

#[post("/webhook")]
pub async fn stripe_webhook(
    req: HttpRequest,
    body: web::Bytes,
    api: web::Data<StripeApi>,
) -> Result<HttpResponse, ServerError> {
    let event = if api.webhook_checks_enabled() {
        let signature = req
            .headers()
            .get(STRIPE_SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ServerError::InvalidWebhookSignature("Missing Stripe-Signature header".into()))?;
        api.validate_event(&body, signature)?
    } else {
        warn!("💳️ Webhook signature checks are disabled. Accepting the event without verification.");
        stripe_tools::parse_event(&body)?
    };
    info!("💳️ Received Stripe event {} ({})", event.id, event.event_type);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "received": true })))
}
