use actix_web::{http::StatusCode, test, test::TestRequest, web, App};
use sms_gateway_engine::{AuditApi, AuthApi};
use stripe_tools::StripeApi;

use super::mocks::{MockDispatcher, MockSmsBackend};
use crate::{
    auth::USER_ID_HEADER,
    payment_routes::{checkout, stripe_webhook, STRIPE_SIGNATURE_HEADER},
    routes::SendSmsRoute,
};

/// Posts a dispatch request against a service wired up with the given mocks and returns the response status and
/// body. Pass `None` for `user_id` to simulate a request that arrives without an authenticated identity.
pub async fn send_sms_request(
    user_id: Option<&str>,
    body: serde_json::Value,
    auth_backend: MockSmsBackend,
    audit_backend: MockSmsBackend,
    dispatcher: MockDispatcher,
) -> (StatusCode, String) {
    let app = App::new()
        .app_data(web::Data::new(AuthApi::new(auth_backend)))
        .app_data(web::Data::new(AuditApi::new(audit_backend)))
        .app_data(web::Data::new(dispatcher))
        .service(SendSmsRoute::<MockSmsBackend, MockDispatcher>::new());
    let service = test::init_service(app).await;
    let mut req = TestRequest::post().uri("/send-sms").set_json(&body);
    if let Some(id) = user_id {
        req = req.insert_header((USER_ID_HEADER, id));
    }
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&test::read_body(res).await).into_owned();
    (status, body)
}

pub async fn webhook_request(
    api: StripeApi,
    signature_header: Option<&str>,
    payload: &[u8],
) -> (StatusCode, String) {
    let app = App::new()
        .app_data(web::Data::new(api))
        .service(web::scope("/payments").service(checkout).service(stripe_webhook));
    let service = test::init_service(app).await;
    let mut req = TestRequest::post().uri("/payments/webhook").set_payload(payload.to_vec());
    if let Some(sig) = signature_header {
        req = req.insert_header((STRIPE_SIGNATURE_HEADER, sig));
    }
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&test::read_body(res).await).into_owned();
    (status, body)
}
