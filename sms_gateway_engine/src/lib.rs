//! SMS Gateway Engine
//!
//! This library contains the storage-facing logic for the SMS gateway. It is transport-agnostic: the HTTP server
//! and the Twilio client live in their own crates and talk to the engine through the public APIs defined here.
//!
//! The library is divided into two main sections:
//! 1. Backend traits ([`mod@traits`]). These define the contract a storage backend must fulfil: role lookups
//!    ([`traits::AuthManagement`]) and append-only audit records ([`traits::AuditManagement`]). SQLite is the
//!    supported backend; callers should never need to touch the database directly.
//! 2. The engine public API ([`AuthApi`] and [`AuditApi`]). [`AuthApi`] carries the access-policy check for SMS
//!    dispatch: resolve the caller's role, check it against the allowed set, and record the access decision.
//!    [`AuditApi`] records dispatched messages and exposes the audit trails.
mod sge_api;
pub mod db_types;
pub mod traits;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use sge_api::{audit_api::AuditApi, auth_api::AuthApi};
