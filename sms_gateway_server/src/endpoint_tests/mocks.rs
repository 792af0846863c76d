use mockall::mock;
use sms_gateway_engine::{
    db_types::{AccessLogEntry, NewAccessLogEntry, NewSmsLogEntry, Role, SmsLogEntry, UserId},
    traits::{AuditApiError, AuditManagement, AuthApiError, AuthManagement, SmsGatewayDatabase},
};
use twilio_tools::{SmsDispatcher, SmsMessage, TwilioApiError};

mock! {
    pub SmsBackend {}
    impl AuthManagement for SmsBackend {
        async fn fetch_role_for_user(&self, user_id: &UserId) -> Result<Option<Role>, AuthApiError>;
        async fn upsert_role(&self, user_id: &UserId, role: Role) -> Result<(), AuthApiError>;
    }
    impl AuditManagement for SmsBackend {
        async fn log_api_access(&self, entry: &NewAccessLogEntry) -> Result<(), AuditApiError>;
        async fn log_sms_send(&self, entry: &NewSmsLogEntry) -> Result<(), AuditApiError>;
        async fn fetch_access_log_for_user(&self, user_id: &UserId) -> Result<Vec<AccessLogEntry>, AuditApiError>;
        async fn fetch_sms_log_for_user(&self, user_id: &UserId) -> Result<Vec<SmsLogEntry>, AuditApiError>;
    }
}

impl SmsGatewayDatabase for MockSmsBackend {
    fn url(&self) -> &str {
        "mock://sms-backend"
    }
}

mock! {
    pub Dispatcher {}
    impl SmsDispatcher for Dispatcher {
        async fn send_sms(&self, to: &str, body: &str) -> Result<SmsMessage, TwilioApiError>;
    }
}
