use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::user::UserRecord;

/// Accepted shapes: a bare user array, or an object with a `users` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<UserRecord>),
    Wrapped { users: Vec<UserRecord> },
}

/// Parse a user batch from JSON text
pub fn parse_users(json: &str) -> Result<Vec<UserRecord>> {
    let payload: Payload = serde_json::from_str(json)
        .context("Payload is neither a user array nor {\"users\": [...]}")?;

    Ok(match payload {
        Payload::Bare(users) | Payload::Wrapped { users } => users,
    })
}

/// Read a user batch from a file, or from stdin when `path` is `-`
pub fn load_users(path: &Path) -> Result<Vec<UserRecord>> {
    let mut json = String::new();

    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read payload from stdin")?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut json))
            .with_context(|| format!("Failed to read payload from {}", path.display()))?;
    }

    parse_users(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let users = parse_users(r#"[{"_id": "a"}, {"_id": "b", "interests": ["go"]}]"#).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].interest_text().as_deref(), Some("go"));
    }

    #[test]
    fn test_parse_wrapped_object() {
        let users = parse_users(r#"{"users": [{"_id": "a"}], "max_distance": 2.0}"#).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id, "a");
    }

    #[test]
    fn test_parse_numeric_ids() {
        let users = parse_users(
            r#"[{"_id": 1, "interests": ["go"]}, {"_id": 2, "interests": ["go"]}]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].user_id.to_string(), "2");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_users("{\"people\": []}").is_err());
        assert!(parse_users("not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_users(Path::new("/nonexistent/users.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/users.json"));
    }
}
