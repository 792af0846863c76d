//! `SqliteDatabase` is a concrete implementation of an SMS gateway storage backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use sqlx::SqlitePool;

use super::db::{access_log, create_schema, new_pool, sms_log, users};
use crate::{
    db_types::{AccessLogEntry, NewAccessLogEntry, NewSmsLogEntry, Role, SmsLogEntry, UserId},
    traits::{AuditApiError, AuditManagement, AuthApiError, AuthManagement, SmsGatewayDatabase},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Connects to the database at `url`, creating the file and schema if necessary.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        create_schema(&pool).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl AuthManagement for SqliteDatabase {
    async fn fetch_role_for_user(&self, user_id: &UserId) -> Result<Option<Role>, AuthApiError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_role(user_id, &mut conn).await
    }

    async fn upsert_role(&self, user_id: &UserId, role: Role) -> Result<(), AuthApiError> {
        let mut conn = self.pool.acquire().await?;
        users::upsert_role(user_id, role, &mut conn).await
    }
}

impl AuditManagement for SqliteDatabase {
    async fn log_api_access(&self, entry: &NewAccessLogEntry) -> Result<(), AuditApiError> {
        let mut conn = self.pool.acquire().await?;
        access_log::insert_access_log(entry, &mut conn).await
    }

    async fn log_sms_send(&self, entry: &NewSmsLogEntry) -> Result<(), AuditApiError> {
        let mut conn = self.pool.acquire().await?;
        sms_log::insert_sms_log(entry, &mut conn).await
    }

    async fn fetch_access_log_for_user(&self, user_id: &UserId) -> Result<Vec<AccessLogEntry>, AuditApiError> {
        let mut conn = self.pool.acquire().await?;
        access_log::access_log_for_user(user_id, &mut conn).await
    }

    async fn fetch_sms_log_for_user(&self, user_id: &UserId) -> Result<Vec<SmsLogEntry>, AuditApiError> {
        let mut conn = self.pool.acquire().await?;
        sms_log::sms_log_for_user(user_id, &mut conn).await
    }
}

impl SmsGatewayDatabase for SqliteDatabase {
    fn url(&self) -> &str {
        self.url.as_str()
    }
}
