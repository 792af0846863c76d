use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use log::{error, warn};
use sms_gateway_engine::traits::AuthApiError;
use stripe_tools::StripeApiError;
use thiserror::Error;
use twilio_tools::TwilioApiError;

/// The server's error taxonomy.
///
/// Client-facing messages are fixed per variant (the SMS route speaks Portuguese to its callers, matching the
/// product it fronts); any detail the variant carries is for the server log only and never reaches the wire.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
    #[error("Usuário não autenticado")]
    Unauthenticated,
    #[error("Acesso negado. Você não tem permissão para enviar SMS.")]
    InsufficientPermissions(String),
    #[error("Falha na verificação de autorização")]
    AuthorizationCheckFailed(String),
    #[error("Destinatário e corpo da mensagem são obrigatórios")]
    MissingMessageFields,
    #[error("Falha ao enviar mensagem")]
    SmsSendFailed(String),
    #[error("Invalid webhook signature. {0}")]
    InvalidWebhookSignature(String),
    #[error("Payment provider request failed")]
    PaymentError(String),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::InsufficientPermissions(_) => StatusCode::FORBIDDEN,
            Self::AuthorizationCheckFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingMessageFields => StatusCode::BAD_REQUEST,
            Self::SmsSendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidWebhookSignature(_) => StatusCode::BAD_REQUEST,
            Self::PaymentError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The Debug rendering includes the detail fields that Display deliberately omits
        if self.status_code().is_server_error() {
            error!("💥️ {self:?}");
        } else {
            warn!("💥️ {self:?}");
        }
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<AuthApiError> for ServerError {
    fn from(e: AuthApiError) -> Self {
        match e {
            AuthApiError::DatabaseError(detail) => Self::AuthorizationCheckFailed(detail),
            other => Self::InsufficientPermissions(other.to_string()),
        }
    }
}

impl From<TwilioApiError> for ServerError {
    fn from(e: TwilioApiError) -> Self {
        Self::SmsSendFailed(e.to_string())
    }
}

impl From<StripeApiError> for ServerError {
    fn from(e: StripeApiError) -> Self {
        match e {
            StripeApiError::InvalidAmount(_) => Self::InvalidRequestBody(e.to_string()),
            StripeApiError::MalformedSignature(_) | StripeApiError::InvalidSignature(_) => {
                Self::InvalidWebhookSignature(e.to_string())
            },
            other => Self::PaymentError(other.to_string()),
        }
    }
}
