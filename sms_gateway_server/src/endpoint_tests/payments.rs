use actix_web::http::StatusCode;
use chrono::Utc;
use smg_common::Secret;
use stripe_tools::{sign_payload, StripeApi, StripeConfig};

use super::helpers::webhook_request;

const WEBHOOK_SECRET: &str = "whsec_endpoint_test";
const PAYLOAD: &[u8] =
    br#"{"id":"evt_00000001","type":"checkout.session.completed","data":{"object":{"id":"cs_test_123"}}}"#;

fn stripe_api(webhook_checks: bool) -> StripeApi {
    let config = StripeConfig {
        secret_key: Secret::new("sk_test_123".to_string()),
        webhook_secret: Secret::new(WEBHOOK_SECRET.to_string()),
        success_url: "https://example.com/success".to_string(),
        cancel_url: "https://example.com/cancel".to_string(),
        currency: "usd".to_string(),
        product_name: "Donation".to_string(),
        webhook_checks,
    };
    StripeApi::new(config).unwrap()
}

fn signature_header(payload: &[u8]) -> String {
    let secret = Secret::new(WEBHOOK_SECRET.to_string());
    let timestamp = Utc::now().timestamp();
    let sig = sign_payload(&secret, timestamp, payload).unwrap();
    format!("t={timestamp},v1={sig}")
}

#[actix_web::test]
async fn a_correctly_signed_delivery_is_accepted() {
    let _ = env_logger::try_init().ok();
    let header = signature_header(PAYLOAD);
    let (status, body) = webhook_request(stripe_api(true), Some(&header), PAYLOAD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"received":true}"#);
}

#[actix_web::test]
async fn deliveries_without_a_signature_header_are_rejected() {
    let _ = env_logger::try_init().ok();
    let (status, body) = webhook_request(stripe_api(true), None, PAYLOAD).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid webhook signature. Missing Stripe-Signature header"}"#);
}

#[actix_web::test]
async fn deliveries_signed_with_the_wrong_secret_are_rejected() {
    let _ = env_logger::try_init().ok();
    let secret = Secret::new("whsec_someone_else".to_string());
    let timestamp = Utc::now().timestamp();
    let sig = sign_payload(&secret, timestamp, PAYLOAD).unwrap();
    let header = format!("t={timestamp},v1={sig}");
    let (status, body) = webhook_request(stripe_api(true), Some(&header), PAYLOAD).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"Invalid webhook signature."#), "unexpected body: {body}");
}

#[actix_web::test]
async fn tampered_payloads_are_rejected() {
    let _ = env_logger::try_init().ok();
    let header = signature_header(PAYLOAD);
    let tampered = br#"{"id":"evt_evil","type":"checkout.session.completed","data":{"object":{}}}"#;
    let (status, _) = webhook_request(stripe_api(true), Some(&header), tampered).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn signature_checks_can_be_disabled_for_local_development() {
    let _ = env_logger::try_init().ok();
    let (status, body) = webhook_request(stripe_api(false), None, PAYLOAD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"received":true}"#);
}

#[actix_web::test]
async fn a_zero_amount_checkout_is_rejected_without_calling_stripe() {
    let _ = env_logger::try_init().ok();
    use actix_web::{test, test::TestRequest, web, App};

    use crate::payment_routes::{checkout, stripe_webhook};
    let app = App::new()
        .app_data(web::Data::new(stripe_api(true)))
        .service(web::scope("/payments").service(checkout).service(stripe_webhook));
    let service = test::init_service(app).await;
    let req = TestRequest::post()
        .uri("/payments/checkout")
        .set_json(serde_json::json!({"amount_cents": 0}))
        .to_request();
    let res = test::call_service(&service, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8_lossy(&test::read_body(res).await).into_owned();
    assert_eq!(body, r#"{"error":"Could not read request body: Checkout amount must be a positive number of cents, got 0"}"#);
}
