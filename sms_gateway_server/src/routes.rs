//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Since each worker thread processes its requests sequentially, any long, non-cpu-bound operation (I/O, database
//! calls, the Twilio round trip) must be expressed as a future so that the worker can interleave other requests
//! while it waits.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use sms_gateway_engine::{
    db_types::NewSmsLogEntry,
    traits::SmsGatewayDatabase,
    AuditApi,
    AuthApi,
};
use twilio_tools::SmsDispatcher;

use crate::{
    auth::RequestIdentity,
    data_objects::{SendSmsParams, SendSmsResult},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------  Send SMS  ----------------------------------------------------
route!(send_sms => Post "/send-sms" impl SmsGatewayDatabase, SmsDispatcher);
/// Route handler for the SMS dispatch endpoint.
///
/// The flow is strictly linear, with an early exit at every gate:
/// 1. The identity extractor has already rejected unauthenticated requests with 401.
/// 2. The access-policy check resolves the caller's role and records the decision (403 on insufficient role,
///    500 if the check itself cannot be completed).
/// 3. Both message fields must be present and non-empty (400). Validation runs after authorization, so the
///    access log entry exists even for requests that turn out to be incomplete.
/// 4. The dispatcher resolves Twilio credentials and sends the message (500 on any failure, nothing retried).
/// 5. The dispatched message is recorded, and its provider sid returned to the caller.
pub async fn send_sms<B, D>(
    identity: RequestIdentity,
    params: web::Json<SendSmsParams>,
    auth_api: web::Data<AuthApi<B>>,
    audit_api: web::Data<AuditApi<B>>,
    dispatcher: web::Data<D>,
) -> Result<HttpResponse, ServerError>
where
    B: SmsGatewayDatabase + 'static,
    D: SmsDispatcher + 'static,
{
    trace!("📨️ Received SMS dispatch request from user {}", identity.user_id);
    let authorized = auth_api.authorize_sms_send(&identity.user_id).await?;
    let SendSmsParams { to, body } = params.into_inner();
    let (to, body) = match (non_empty(to), non_empty(body)) {
        (Some(to), Some(body)) => (to, body),
        _ => {
            debug!("📨️ User {} submitted an incomplete dispatch request", authorized.id);
            return Err(ServerError::MissingMessageFields);
        },
    };
    let message = dispatcher.send_sms(&to, &body).await.map_err(|e| {
        warn!("📨️ Could not dispatch SMS for user {}. {e}", authorized.id);
        ServerError::from(e)
    })?;
    audit_api
        .record_sms_send(NewSmsLogEntry {
            user_id: authorized.id.clone(),
            to_number: to,
            message_sid: message.sid.clone(),
        })
        .await
        .map_err(|e| {
            // The message is already on its way; all we can do is report the gap in the audit trail
            error!("📨️ SMS {} was dispatched but could not be recorded. {e}", message.sid);
            ServerError::SmsSendFailed(e.to_string())
        })?;
    info!("📨️ SMS {} dispatched on behalf of user {}", message.sid, authorized.id);
    Ok(HttpResponse::Ok().json(SendSmsResult { success: true, message_sid: message.sid }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
