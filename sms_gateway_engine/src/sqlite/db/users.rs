//! SQLite operations on the `users` table.
//!
//! Generally clients should never call these methods directly, and prefer the [`crate::traits::AuthManagement`]
//! trait methods implemented on [`crate::SqliteDatabase`] instead.
use log::debug;
use sqlx::{Row, SqliteConnection};

use crate::{
    db_types::{Role, UserId},
    traits::AuthApiError,
};

pub async fn fetch_role(user_id: &UserId, conn: &mut SqliteConnection) -> Result<Option<Role>, AuthApiError> {
    let row = sqlx::query(r#"SELECT role FROM users WHERE id = ?"#)
        .bind(user_id.as_str())
        .fetch_optional(conn)
        .await?;
    let Some(row) = row else {
        debug!("🗃️ No role record exists for user {user_id}");
        return Ok(None);
    };
    let role = row.try_get::<String, _>("role")?;
    let role = role.parse::<Role>().map_err(|e| AuthApiError::UnknownRole(e.0))?;
    Ok(Some(role))
}

pub async fn upsert_role(user_id: &UserId, role: Role, conn: &mut SqliteConnection) -> Result<(), AuthApiError> {
    let res = sqlx::query(
        r#"INSERT INTO users (id, role) VALUES (?, ?) ON CONFLICT(id) DO UPDATE SET role = excluded.role"#,
    )
    .bind(user_id.as_str())
    .bind(role.to_string())
    .execute(conn)
    .await?;
    debug!("🗃️ Assigned role '{role}' to user {user_id} ({} row(s) affected)", res.rows_affected());
    Ok(())
}
