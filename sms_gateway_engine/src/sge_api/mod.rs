//! The public API of the SMS gateway engine.
//!
//! [`auth_api::AuthApi`] carries the access-policy check, and [`audit_api::AuditApi`] the message audit trail.
//! Both are thin façades over a storage backend implementing the [`crate::traits`] contracts.
pub mod audit_api;
pub mod auth_api;
