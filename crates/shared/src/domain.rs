use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time-based unique salon identifier: `salon-` followed by the creation
/// time as unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalonId(pub String);

impl SalonId {
    pub fn generate_at(created_at: DateTime<Utc>) -> Self {
        Self(format!("salon-{}", created_at.timestamp_millis()))
    }
}

/// Salon business profile created by the registration flow. Persisted as
/// camelCase JSON by the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salon {
    pub id: SalonId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub open_hours: String,
    pub close_hours: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Employee,
    Customer,
}

/// User record as kept by the external store; read back only for
/// diagnostic display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

/// One-shot flash message shown by a page; at most one is visible at a
/// time and it is cleared on the next submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FlashMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }
}
