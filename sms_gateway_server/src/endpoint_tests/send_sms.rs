use actix_web::http::StatusCode;
use serde_json::json;
use sms_gateway_engine::{
    db_types::Role,
    traits::AuthApiError,
};
use twilio_tools::{SmsMessage, TwilioApiError};

use super::{
    helpers::send_sms_request,
    mocks::{MockDispatcher, MockSmsBackend},
};

fn no_mocks() -> (MockSmsBackend, MockSmsBackend, MockDispatcher) {
    // Mocks without expectations panic if anything calls them
    (MockSmsBackend::new(), MockSmsBackend::new(), MockDispatcher::new())
}

#[actix_web::test]
async fn requests_without_an_identity_are_rejected() {
    let _ = env_logger::try_init().ok();
    let (auth, audit, dispatcher) = no_mocks();
    let body = json!({"to": "+15551234567", "body": "hello"});
    let (status, body) = send_sms_request(None, body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, r#"{"error":"Usuário não autenticado"}"#);
}

#[actix_web::test]
async fn guests_may_not_send_sms() {
    let _ = env_logger::try_init().ok();
    let (mut auth, audit, dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user()
        .withf(|id| id.as_str() == "carlos")
        .returning(|_| Ok(Some(Role::Guest)));
    // A refused attempt must leave no trace in the access log
    auth.expect_log_api_access().never();
    let body = json!({"to": "+15551234567", "body": "hello"});
    let (status, body) = send_sms_request(Some("carlos"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Acesso negado. Você não tem permissão para enviar SMS."}"#);
}

#[actix_web::test]
async fn users_without_a_role_record_are_refused() {
    let _ = env_logger::try_init().ok();
    let (mut auth, audit, dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user().returning(|_| Ok(None));
    auth.expect_log_api_access().never();
    let body = json!({"to": "+15551234567", "body": "hello"});
    let (status, body) = send_sms_request(Some("nobody"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Acesso negado. Você não tem permissão para enviar SMS."}"#);
}

#[actix_web::test]
async fn a_failed_role_lookup_is_not_a_denial() {
    let _ = env_logger::try_init().ok();
    let (mut auth, audit, dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user()
        .returning(|_| Err(AuthApiError::DatabaseError("connection reset".to_string())));
    let body = json!({"to": "+15551234567", "body": "hello"});
    let (status, body) = send_sms_request(Some("alice"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Falha na verificação de autorização"}"#);
}

#[actix_web::test]
async fn incomplete_requests_are_rejected_after_the_access_check() {
    let _ = env_logger::try_init().ok();
    let (mut auth, audit, dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user().returning(|_| Ok(Some(Role::Admin)));
    // Authorization happens before validation, so the access log entry is still written
    auth.expect_log_api_access().times(1).returning(|_| Ok(()));
    let body = json!({"to": "+15551234567"});
    let (status, body) = send_sms_request(Some("alice"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Destinatário e corpo da mensagem são obrigatórios"}"#);
}

#[actix_web::test]
async fn blank_fields_count_as_missing() {
    let _ = env_logger::try_init().ok();
    let (mut auth, audit, dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user().returning(|_| Ok(Some(Role::SmsSender)));
    auth.expect_log_api_access().times(1).returning(|_| Ok(()));
    let body = json!({"to": "  ", "body": "hello"});
    let (status, body) = send_sms_request(Some("alice"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Destinatário e corpo da mensagem são obrigatórios"}"#);
}

#[actix_web::test]
async fn a_complete_authorized_request_is_dispatched_and_recorded() {
    let _ = env_logger::try_init().ok();
    let (mut auth, mut audit, mut dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user()
        .withf(|id| id.as_str() == "alice")
        .returning(|_| Ok(Some(Role::NotificationManager)));
    auth.expect_log_api_access()
        .times(1)
        .withf(|entry| entry.user_id.as_str() == "alice" && entry.service == "sms" && entry.action == "send_sms")
        .returning(|_| Ok(()));
    dispatcher
        .expect_send_sms()
        .times(1)
        .withf(|to, body| to == "+15551234567" && body == "hello there")
        .returning(|to, _| {
            Ok(SmsMessage {
                sid: "SM87105da94bff44b999e4e6eb90d8eb6a".to_string(),
                to: to.to_string(),
                status: Some("queued".to_string()),
            })
        });
    audit
        .expect_log_sms_send()
        .times(1)
        .withf(|entry| {
            entry.user_id.as_str() == "alice"
                && entry.to_number == "+15551234567"
                && entry.message_sid == "SM87105da94bff44b999e4e6eb90d8eb6a"
        })
        .returning(|_| Ok(()));
    let body = json!({"to": "+15551234567", "body": "hello there"});
    let (status, body) = send_sms_request(Some("alice"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"messageSid":"SM87105da94bff44b999e4e6eb90d8eb6a"}"#);
}

#[actix_web::test]
async fn a_dispatch_failure_is_reported_as_a_server_error() {
    let _ = env_logger::try_init().ok();
    let (mut auth, audit, mut dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user().returning(|_| Ok(Some(Role::Admin)));
    auth.expect_log_api_access().times(1).returning(|_| Ok(()));
    dispatcher.expect_send_sms().returning(|_, _| {
        Err(TwilioApiError::QueryError { status: 400, message: "Invalid 'To' number".to_string() })
    });
    let body = json!({"to": "not-a-number", "body": "hello"});
    let (status, body) = send_sms_request(Some("alice"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Falha ao enviar mensagem"}"#);
}

#[actix_web::test]
async fn missing_twilio_credentials_surface_as_a_dispatch_failure() {
    let _ = env_logger::try_init().ok();
    let (mut auth, audit, mut dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user().returning(|_| Ok(Some(Role::SmsSender)));
    auth.expect_log_api_access().times(1).returning(|_| Ok(()));
    dispatcher
        .expect_send_sms()
        .returning(|_, _| Err(TwilioApiError::Configuration("TWILIO_ACCOUNT_SID is not set".to_string())));
    let body = json!({"to": "+15551234567", "body": "hello"});
    let (status, body) = send_sms_request(Some("alice"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Falha ao enviar mensagem"}"#);
}

#[actix_web::test]
async fn an_unrecorded_dispatch_is_reported_as_a_failure() {
    let _ = env_logger::try_init().ok();
    let (mut auth, mut audit, mut dispatcher) = no_mocks();
    auth.expect_fetch_role_for_user().returning(|_| Ok(Some(Role::Admin)));
    auth.expect_log_api_access().times(1).returning(|_| Ok(()));
    dispatcher.expect_send_sms().returning(|to, _| {
        Ok(SmsMessage { sid: "SM000".to_string(), to: to.to_string(), status: None })
    });
    audit
        .expect_log_sms_send()
        .returning(|_| Err(sms_gateway_engine::traits::AuditApiError::DatabaseError("disk full".to_string())));
    let body = json!({"to": "+15551234567", "body": "hello"});
    let (status, body) = send_sms_request(Some("alice"), body, auth, audit, dispatcher).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Falha ao enviar mensagem"}"#);
}
