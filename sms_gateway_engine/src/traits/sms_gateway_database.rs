use crate::traits::{AuditManagement, AuthManagement};

/// The complete set of behaviour a storage backend must expose to act as the backend for the SMS gateway server.
pub trait SmsGatewayDatabase: AuthManagement + AuditManagement {
    /// The URL of the underlying database, for logging and diagnostics.
    fn url(&self) -> &str;
}
