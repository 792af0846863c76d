use thiserror::Error;

use crate::db_types::{AccessLogEntry, NewAccessLogEntry, NewSmsLogEntry, SmsLogEntry, UserId};

#[derive(Debug, Clone, Error)]
pub enum AuditApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for AuditApiError {
    fn from(e: sqlx::Error) -> Self {
        AuditApiError::DatabaseError(e.to_string())
    }
}

/// The `AuditManagement` trait defines the append-only audit trail.
///
/// Records are written once, at the moment the corresponding event happens, and are never updated or deleted.
/// The two insert methods assign the record timestamp inside the storage layer so that callers cannot back-date
/// entries.
#[allow(async_fn_in_trait)]
pub trait AuditManagement {
    /// Appends a record of an authorization decision to the access log.
    async fn log_api_access(&self, entry: &NewAccessLogEntry) -> Result<(), AuditApiError>;

    /// Appends a record of a successfully dispatched message to the SMS log.
    async fn log_sms_send(&self, entry: &NewSmsLogEntry) -> Result<(), AuditApiError>;

    /// Fetches the access log for a user, oldest first.
    async fn fetch_access_log_for_user(&self, user_id: &UserId) -> Result<Vec<AccessLogEntry>, AuditApiError>;

    /// Fetches the SMS log for a user, oldest first.
    async fn fetch_sms_log_for_user(&self, user_id: &UserId) -> Result<Vec<SmsLogEntry>, AuditApiError>;
}
