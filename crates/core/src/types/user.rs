//! User keys identifying cart owners.
//!
//! There is no real identity system in scope. A user key is an opaque string
//! supplied by the client; the demo key is used when a request omits one.

use serde::{Deserialize, Serialize};

/// Fallback key used when a request does not name a user.
const DEMO_KEY: &str = "demo";

/// Opaque identifier for a cart owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserKey(String);

impl UserKey {
    /// Create a user key from any string-like value.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The fixed key used when running without authentication.
    #[must_use]
    pub fn demo() -> Self {
        Self(DEMO_KEY.to_owned())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for UserKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_demo() {
        assert_eq!(UserKey::demo().as_str(), "demo");
    }

    #[test]
    fn test_user_key_serde_transparent() {
        let json = serde_json::to_string(&UserKey::new("u1")).expect("serialize");
        assert_eq!(json, "\"u1\"");
    }
}
