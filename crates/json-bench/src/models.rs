use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A user account as stored in the `small`, `medium` and `large` fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub profile: Profile,
    pub roles: Vec<String>,
}

impl User {
    /// Username derived from the user id.
    pub fn username_for(id: u64) -> String {
        format!("user{id}")
    }

    /// Email derived from the user id.
    pub fn email_for(id: u64) -> String {
        format!("user{id}@example.com")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub bio: String,
    pub avatar: String,
    pub location: String,
    pub website: String,
    /// Always holds `theme`, `language` and `timezone`.
    pub metadata: BTreeMap<String, String>,
}

impl Profile {
    pub fn avatar_for(id: u64) -> String {
        format!("https://avatar.example.com/{id}")
    }

    pub fn website_for(id: u64) -> String {
        format!("https://user{id}.example.com")
    }
}

/// One structured log line in `logs.jsonl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub level: String,
    pub service: String,
    pub message: String,
    pub context: BTreeMap<String, ContextValue>,
    pub trace_id: String,
}

/// Heterogeneous value in a log entry's `context` map.
///
/// Serialized untagged, so the wire form is a plain JSON string or number.
/// Integers are tried before floats so `42` decodes as `Integer(42)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    String(String),
    Integer(i64),
    Float(f64),
}

impl ContextValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ContextValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ContextValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ContextValue::Integer(n) => Some(*n as f64),
            ContextValue::Float(f) => Some(*f),
            ContextValue::String(_) => None,
        }
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::String(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::String(value.to_string())
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Integer(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Float(value)
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::String(s) => f.write_str(s),
            ContextValue::Integer(n) => write!(f, "{n}"),
            ContextValue::Float(x) => write!(f, "{x}"),
        }
    }
}
