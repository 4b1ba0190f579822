//! Records as served by the `/records` endpoint.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Colors counted as primary. Matching is exact and case-sensitive.
pub const PRIMARY_COLORS: [&str; 3] = ["red", "blue", "yellow"];

/// Returns `true` if `color` is one of [`PRIMARY_COLORS`].
pub fn is_primary(color: &str) -> bool {
    PRIMARY_COLORS.contains(&color)
}

/// Opaque record identifier. The server may use numbers or strings; any
/// other JSON value (floats, `null`, out-of-range integers) is kept as is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
    Other(Value),
}

/// A record sent without an `id`.
impl Default for RecordId {
    fn default() -> Self {
        RecordId::Other(Value::Null)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
            RecordId::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// Record status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Open,
    Closed,
    /// Any other value sent by the server. Never matches a filter.
    #[serde(other)]
    Unknown,
}

/// A single record.
///
/// Only `id`, `disposition` and `color` are interpreted; every other field
/// is kept in `extra` and passed through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: RecordId,

    /// `None` when the server omits the field or sends `null`.
    #[serde(
        default,
        deserialize_with = "lenient_disposition",
        skip_serializing_if = "Option::is_none"
    )]
    pub disposition: Option<Disposition>,

    /// `None` unless the server sends a string.
    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_disposition<'de, D>(deserializer: D) -> Result<Option<Disposition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(match s.as_str() {
            "open" => Disposition::Open,
            "closed" => Disposition::Closed,
            _ => Disposition::Unknown,
        }),
        _ => Some(Disposition::Unknown),
    })
}

fn lenient_color<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl Record {
    pub fn new(id: impl Into<RecordId>, disposition: Disposition, color: &str) -> Self {
        Self {
            id: id.into(),
            disposition: Some(disposition),
            color: Some(color.to_string()),
            extra: Map::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.disposition == Some(Disposition::Open)
    }

    pub fn is_closed(&self) -> bool {
        self.disposition == Some(Disposition::Closed)
    }

    /// A missing color is never primary.
    pub fn is_primary(&self) -> bool {
        self.color.as_deref().is_some_and(is_primary)
    }
}
