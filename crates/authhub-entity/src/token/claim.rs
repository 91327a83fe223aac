//! Claims extracted from a verified token.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single claim value.
///
/// Serialized untagged, so `Text("x")` renders as `"x"` and `Integer(3)` as `3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    /// A string claim such as `sub` or `jti`.
    Text(String),
    /// An integral claim such as `iat` or `exp`.
    Integer(i64),
    /// A non-integral numeric claim.
    Float(f64),
    /// A boolean claim.
    Bool(bool),
    /// Any other JSON value (arrays, objects, null).
    Json(Value),
}

impl ClaimValue {
    /// Returns the string payload, if this is a text claim.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integral claim.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<Value> for ClaimValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Integer(i),
                (None, Some(f)) => Self::Float(f),
                (None, None) => Self::Json(Value::Number(n)),
            },
            other => Self::Json(other),
        }
    }
}

/// A named claim, serialized as `{"key": .., "value": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim name.
    pub key: String,
    /// Claim value.
    pub value: ClaimValue,
}

impl Claim {
    /// Creates a claim.
    pub fn new(key: impl Into<String>, value: impl Into<ClaimValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Finds the claim with the given key.
    pub fn find<'a>(claims: &'a [Claim], key: &str) -> Option<&'a Claim> {
        claims.iter().find(|c| c.key == key)
    }
}
