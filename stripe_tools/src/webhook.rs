//! Stripe webhook signature validation.
//!
//! Stripe signs each webhook delivery with an HMAC over `"{timestamp}.{raw body}"`, using the endpoint's webhook
//! secret as the key. The signature arrives in the `Stripe-Signature` header as a comma-separated list of
//! `t=<unix timestamp>` and one or more `v1=<hex hmac>` elements (older `v0` schemes are ignored). Validation
//! recomputes the HMAC and additionally rejects deliveries whose timestamp is outside a small tolerance window,
//! which bounds replay of a captured payload.
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use smg_common::Secret;

use crate::{data_objects::Event, StripeApiError};

type HmacSha256 = Hmac<Sha256>;

/// How far a delivery's `t=` timestamp may deviate from the server clock.
const SIGNATURE_TOLERANCE_SECS: i64 = 300;

/// Validates that `payload` was signed by Stripe and deserializes it into an [`Event`].
pub fn validate_event(
    payload: &[u8],
    signature_header: &str,
    secret: &Secret<String>,
) -> Result<Event, StripeApiError> {
    validate_signature(payload, signature_header, secret, Utc::now().timestamp())?;
    parse_event(payload)
}

/// Deserializes a webhook payload without checking its signature. Only for use when signature checks have been
/// explicitly disabled in configuration.
pub fn parse_event(payload: &[u8]) -> Result<Event, StripeApiError> {
    serde_json::from_slice(payload).map_err(|e| StripeApiError::JsonError(e.to_string()))
}

fn validate_signature(
    payload: &[u8],
    signature_header: &str,
    secret: &Secret<String>,
    now: i64,
) -> Result<(), StripeApiError> {
    let (timestamp, candidates) = parse_signature_header(signature_header)?;
    if (now - timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(StripeApiError::InvalidSignature(format!(
            "timestamp {timestamp} is outside the tolerance window"
        )));
    }
    let expected = sign_payload(secret, timestamp, payload)?;
    if candidates.iter().any(|sig| sig.eq_ignore_ascii_case(&expected)) {
        Ok(())
    } else {
        Err(StripeApiError::InvalidSignature("no v1 signature matches the payload".to_string()))
    }
}

fn parse_signature_header(header: &str) -> Result<(i64, Vec<String>), StripeApiError> {
    let mut timestamp = None;
    let mut candidates = Vec::new();
    for element in header.split(',') {
        let Some((key, value)) = element.trim().split_once('=') else {
            return Err(StripeApiError::MalformedSignature(format!("element '{element}' is not a key=value pair")));
        };
        match key {
            "t" => {
                let t = value
                    .parse::<i64>()
                    .map_err(|_| StripeApiError::MalformedSignature(format!("'{value}' is not a timestamp")))?;
                timestamp = Some(t);
            },
            "v1" => candidates.push(value.to_string()),
            // Unknown schemes are ignored so that Stripe can roll new ones out
            _ => {},
        }
    }
    let timestamp =
        timestamp.ok_or_else(|| StripeApiError::MalformedSignature("no timestamp element".to_string()))?;
    if candidates.is_empty() {
        return Err(StripeApiError::MalformedSignature("no v1 signature element".to_string()));
    }
    Ok((timestamp, candidates))
}

/// Computes the hex HMAC Stripe would place in a `v1=` element for the given timestamp and payload. Exposed so
/// that integration tests and local tools can construct correctly signed deliveries.
pub fn sign_payload(secret: &Secret<String>, timestamp: i64, payload: &[u8]) -> Result<String, StripeApiError> {
    let mut mac = HmacSha256::new_from_slice(secret.reveal().as_bytes())
        .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    let digest = mac.finalize().into_bytes();
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}
