use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque user identifier.
///
/// Callers send either strings or numbers as `_id`. The value is kept in the
/// form it arrived in and serialized back the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Str(String),
    Num(serde_json::Number),
}

impl Default for UserId {
    fn default() -> Self {
        Self::Str(String::new())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<u64> for UserId {
    fn from(n: u64) -> Self {
        Self::Num(n.into())
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        Self::Num(n.into())
    }
}

// Only string ids compare equal to text
impl PartialEq<str> for UserId {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Self::Str(s) if s == other)
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
