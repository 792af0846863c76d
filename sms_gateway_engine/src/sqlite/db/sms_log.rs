//! SQLite operations on the `sms_logs` table.
use chrono::{DateTime, Utc};
use sqlx::{Row, SqliteConnection};

use crate::{
    db_types::{NewSmsLogEntry, SmsLogEntry, UserId},
    traits::AuditApiError,
};

pub async fn insert_sms_log(entry: &NewSmsLogEntry, conn: &mut SqliteConnection) -> Result<(), AuditApiError> {
    let now = Utc::now();
    sqlx::query(r#"INSERT INTO sms_logs (user_id, to_number, message_sid, sent_at) VALUES (?, ?, ?, ?)"#)
        .bind(entry.user_id.as_str())
        .bind(entry.to_number.as_str())
        .bind(entry.message_sid.as_str())
        .bind(now)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn sms_log_for_user(
    user_id: &UserId,
    conn: &mut SqliteConnection,
) -> Result<Vec<SmsLogEntry>, AuditApiError> {
    let rows = sqlx::query(
        r#"SELECT id, user_id, to_number, message_sid, sent_at FROM sms_logs WHERE user_id = ? ORDER BY id"#,
    )
    .bind(user_id.as_str())
    .fetch_all(conn)
    .await?;
    let entries = rows
        .into_iter()
        .map(|row| {
            Ok(SmsLogEntry {
                id: row.try_get("id")?,
                user_id: UserId::from(row.try_get::<String, _>("user_id")?),
                to_number: row.try_get("to_number")?,
                message_sid: row.try_get("message_sid")?,
                sent_at: row.try_get::<DateTime<Utc>, _>("sent_at")?,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()?;
    Ok(entries)
}
