use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//--------------------------------------      UserId       -----------------------------------------------------------
/// A lightweight wrapper around the identifier the upstream authentication collaborator assigns to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for UserId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

//--------------------------------------       Role        -----------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    NotificationManager,
    SmsSender,
    /// A standard account with no messaging privileges.
    Guest,
}

/// The set of roles that are permitted to trigger SMS dispatch. Checked by membership only.
pub const SMS_SEND_ROLES: [Role; 3] = [Role::Admin, Role::NotificationManager, Role::SmsSender];

impl Role {
    pub fn may_send_sms(&self) -> bool {
        SMS_SEND_ROLES.contains(self)
    }
}

#[derive(Debug, Clone, Error)]
#[error("{0} is not a valid role")]
pub struct UnknownRoleError(pub String);

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "notification_manager" => Ok(Self::NotificationManager),
            "sms_sender" => Ok(Self::SmsSender),
            "guest" => Ok(Self::Guest),
            s => Err(UnknownRoleError(s.to_string())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Admin => "admin",
            Self::NotificationManager => "notification_manager",
            Self::SmsSender => "sms_sender",
            Self::Guest => "guest",
        };
        write!(f, "{s}")
    }
}

//--------------------------------------     Identity      -----------------------------------------------------------
/// An authenticated caller whose role has been resolved from storage. Instances are only produced by a successful
/// access-policy check; holding one is proof that the check passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub role: Role,
}

//--------------------------------------  AccessLogEntry   -----------------------------------------------------------
/// An audit record for a single authorization decision. Created once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub id: i64,
    pub user_id: UserId,
    pub service: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// The insertable counterpart of [`AccessLogEntry`]. The timestamp is assigned by the storage layer.
#[derive(Debug, Clone)]
pub struct NewAccessLogEntry {
    pub user_id: UserId,
    pub service: String,
    pub action: String,
}

impl NewAccessLogEntry {
    pub fn sms_send(user_id: UserId) -> Self {
        Self { user_id, service: "sms".to_string(), action: "send_sms".to_string() }
    }
}

//--------------------------------------    SmsLogEntry    -----------------------------------------------------------
/// An audit record for a single dispatched message. Created once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsLogEntry {
    pub id: i64,
    pub user_id: UserId,
    pub to_number: String,
    pub message_sid: String,
    pub sent_at: DateTime<Utc>,
}

/// The insertable counterpart of [`SmsLogEntry`]. `sent_at` is assigned by the storage layer.
#[derive(Debug, Clone)]
pub struct NewSmsLogEntry {
    pub user_id: UserId,
    pub to_number: String,
    pub message_sid: String,
}
