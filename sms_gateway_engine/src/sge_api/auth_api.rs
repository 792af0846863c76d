use std::fmt::Debug;

use log::{debug, trace};

use crate::{
    db_types::{Identity, NewAccessLogEntry, UserId},
    traits::{AuditManagement, AuthApiError, AuthManagement},
};

/// The access-policy check for SMS dispatch.
///
/// Given the identifier of an authenticated caller, `AuthApi` resolves the caller's role from storage, checks it
/// against the set of roles permitted to send SMS, and records the decision in the access log. The audit record
/// is only written once the role check has passed; rejected attempts leave no trace in the access log.
pub struct AuthApi<B> {
    db: B,
}

impl<B: Debug> Debug for AuthApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthApi ({:?})", self.db)
    }
}

impl<B> AuthApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> AuthApi<B>
where B: AuthManagement + AuditManagement
{
    /// Runs the full access-policy check for the given user.
    ///
    /// * The user's role is looked up in storage. A lookup failure is a [`AuthApiError::DatabaseError`], which is
    ///   distinct from a missing or insufficient role.
    /// * A missing role record, an unrecognised role string, or a role outside the allowed set all fail the check.
    /// * On success, an access log entry (`service="sms"`, `action="send_sms"`) is appended and the authorized
    ///   [`Identity`] is returned.
    pub async fn authorize_sms_send(&self, user_id: &UserId) -> Result<Identity, AuthApiError> {
        trace!("🔐️ Checking SMS access for user {user_id}");
        let role = self
            .db
            .fetch_role_for_user(user_id)
            .await?
            .ok_or_else(|| AuthApiError::UserNotFound(user_id.clone()))?;
        if !role.may_send_sms() {
            debug!("🔐️ User {user_id} holds role '{role}', which may not send SMS");
            return Err(AuthApiError::RoleNotAllowed(role));
        }
        self.db
            .log_api_access(&NewAccessLogEntry::sms_send(user_id.clone()))
            .await
            .map_err(|e| AuthApiError::DatabaseError(e.to_string()))?;
        debug!("🔐️ User {user_id} is authorized for SMS dispatch as '{role}'");
        Ok(Identity { id: user_id.clone(), role })
    }
}
