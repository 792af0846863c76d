//! # Storage backend contracts.
//!
//! This module defines the traits a database backend must implement to act as a backend for the SMS gateway.
//!
//! * [`AuthManagement`] covers role lookups for the access-policy check.
//! * [`AuditManagement`] covers the append-only audit trail: access decisions and dispatched messages.
//! * [`SmsGatewayDatabase`] ties the two together and is what the server is generic over.
mod audit_management;
mod auth_management;
mod sms_gateway_database;

pub use audit_management::{AuditApiError, AuditManagement};
pub use auth_management::{AuthApiError, AuthManagement};
pub use sms_gateway_database::SmsGatewayDatabase;
