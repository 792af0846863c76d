//! SQLite operations on the `api_access_logs` table.
use chrono::{DateTime, Utc};
use sqlx::{Row, SqliteConnection};

use crate::{
    db_types::{AccessLogEntry, NewAccessLogEntry, UserId},
    traits::AuditApiError,
};

pub async fn insert_access_log(entry: &NewAccessLogEntry, conn: &mut SqliteConnection) -> Result<(), AuditApiError> {
    let now = Utc::now();
    sqlx::query(r#"INSERT INTO api_access_logs (user_id, service, action, timestamp) VALUES (?, ?, ?, ?)"#)
        .bind(entry.user_id.as_str())
        .bind(entry.service.as_str())
        .bind(entry.action.as_str())
        .bind(now)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn access_log_for_user(
    user_id: &UserId,
    conn: &mut SqliteConnection,
) -> Result<Vec<AccessLogEntry>, AuditApiError> {
    let rows = sqlx::query(
        r#"SELECT id, user_id, service, action, timestamp FROM api_access_logs WHERE user_id = ? ORDER BY id"#,
    )
    .bind(user_id.as_str())
    .fetch_all(conn)
    .await?;
    let entries = rows
        .into_iter()
        .map(|row| {
            Ok(AccessLogEntry {
                id: row.try_get("id")?,
                user_id: UserId::from(row.try_get::<String, _>("user_id")?),
                service: row.try_get("service")?,
                action: row.try_get("action")?,
                timestamp: row.try_get::<DateTime<Utc>, _>("timestamp")?,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()?;
    Ok(entries)
}
