use std::fmt::Debug;

use log::debug;

use crate::{
    db_types::{AccessLogEntry, NewSmsLogEntry, SmsLogEntry, UserId},
    traits::{AuditApiError, AuditManagement},
};

/// The message audit trail.
pub struct AuditApi<B> {
    db: B,
}

impl<B: Debug> Debug for AuditApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuditApi ({:?})", self.db)
    }
}

impl<B> AuditApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> AuditApi<B>
where B: AuditManagement
{
    /// Records a successfully dispatched message. Called exactly once per dispatch, after the provider has
    /// accepted the message.
    pub async fn record_sms_send(&self, entry: NewSmsLogEntry) -> Result<(), AuditApiError> {
        debug!("🗃️ Recording SMS {} sent on behalf of user {}", entry.message_sid, entry.user_id);
        self.db.log_sms_send(&entry).await
    }

    pub async fn access_log_for_user(&self, user_id: &UserId) -> Result<Vec<AccessLogEntry>, AuditApiError> {
        self.db.fetch_access_log_for_user(user_id).await
    }

    pub async fn sms_log_for_user(&self, user_id: &UserId) -> Result<Vec<SmsLogEntry>, AuditApiError> {
        self.db.fetch_sms_log_for_user(user_id).await
    }
}
