use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use sms_gateway_engine::{AuditApi, AuthApi, SqliteDatabase};
use stripe_tools::{StripeApi, StripeConfig};
use twilio_tools::TwilioDispatcher;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    payment_routes::{checkout, stripe_webhook},
    routes::{health, SendSmsRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    // Stripe configuration is read once; Twilio credentials, in contrast, are resolved inside the dispatcher on
    // every send, so rotating them does not need a restart.
    let stripe_api = StripeApi::new(StripeConfig::from_env_or_default())
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = HttpServer::new(move || {
        let auth_api = AuthApi::new(db.clone());
        let audit_api = AuditApi::new(db.clone());
        let app = App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("smg::access_log"))
            .app_data(web::Data::new(auth_api))
            .app_data(web::Data::new(audit_api))
            .app_data(web::Data::new(TwilioDispatcher::default()))
            .app_data(web::Data::new(stripe_api.clone()));
        let payments_scope = web::scope("/payments").service(checkout).service(stripe_webhook);
        app.service(health).service(SendSmsRoute::<SqliteDatabase, TwilioDispatcher>::new()).service(payments_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
