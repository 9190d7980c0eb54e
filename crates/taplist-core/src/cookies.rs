//! Cookie jar backing the one durable value in the system (the postal code).
//!
//! Mirrors browser cookie-jar semantics: values carry an optional expiry
//! instant, expired values are absent on read, and clearing a value yields
//! absence rather than an empty string. The jar serializes to a JSON file so
//! state survives across runs.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CookieStoreError {
    #[error("failed to access cookie jar at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cookie jar: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Cookie {
    value: String,
    /// `None` for a session-scoped cookie (set with `days == 0`).
    expires_at: Option<DateTime<Utc>>,
    path: String,
}

/// Process-local cookie jar with optional file persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookieJar {
    cookies: HashMap<String, Cookie>,
}

impl CookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cookie value, or `None` when absent or expired.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.get_at(name, Utc::now())
    }

    fn get_at(&self, name: &str, now: DateTime<Utc>) -> Option<String> {
        let cookie = self.cookies.get(name)?;
        if let Some(expires_at) = cookie.expires_at {
            if expires_at <= now {
                return None;
            }
        }
        Some(cookie.value.clone())
    }

    /// Stores a value expiring `days` from now. `days == 0` stores a
    /// session-scoped cookie with no expiry instant.
    pub fn set(&mut self, name: &str, value: &str, days: i64) {
        self.set_at(name, value, days, Utc::now());
    }

    fn set_at(&mut self, name: &str, value: &str, days: i64, now: DateTime<Utc>) {
        let expires_at = (days > 0).then(|| now + Duration::days(days));
        self.cookies.insert(
            name.to_owned(),
            Cookie {
                value: value.to_owned(),
                expires_at,
                path: "/".to_owned(),
            },
        );
    }

    /// Removes a cookie. Removing an absent cookie is a no-op.
    pub fn unset(&mut self, name: &str) {
        self.cookies.remove(name);
    }

    /// Loads a jar from `path`. A missing file yields an empty jar.
    ///
    /// # Errors
    ///
    /// Returns [`CookieStoreError::Io`] if the file exists but cannot be
    /// read, or [`CookieStoreError::Parse`] if its contents are not a valid
    /// serialized jar.
    pub fn load(path: &Path) -> Result<Self, CookieStoreError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path).map_err(|e| CookieStoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the jar to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`CookieStoreError::Io`] on any filesystem failure.
    pub fn save(&self, path: &Path) -> Result<(), CookieStoreError> {
        let io_err = |e: std::io::Error| CookieStoreError::Io {
            path: path.display().to_string(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut jar = CookieJar::new();
        jar.set("postalCode", "M4W 3N5", 30);
        assert_eq!(jar.get("postalCode").as_deref(), Some("M4W 3N5"));
    }

    #[test]
    fn absent_cookie_is_none() {
        let jar = CookieJar::new();
        assert!(jar.get("postalCode").is_none());
    }

    #[test]
    fn unset_yields_absence_not_empty_string() {
        let mut jar = CookieJar::new();
        jar.set("postalCode", "M4W 3N5", 30);
        jar.unset("postalCode");
        assert_eq!(jar.get("postalCode"), None);
    }

    #[test]
    fn unset_missing_cookie_is_noop() {
        let mut jar = CookieJar::new();
        jar.unset("postalCode");
        assert!(jar.get("postalCode").is_none());
    }

    #[test]
    fn cookie_expires_after_configured_days() {
        let now = Utc::now();
        let mut jar = CookieJar::new();
        jar.set_at("postalCode", "M4W 3N5", 30, now);
        assert!(jar
            .get_at("postalCode", now + Duration::days(29))
            .is_some());
        assert!(jar
            .get_at("postalCode", now + Duration::days(31))
            .is_none());
    }

    #[test]
    fn session_cookie_has_no_expiry() {
        let now = Utc::now();
        let mut jar = CookieJar::new();
        jar.set_at("postalCode", "M4W 3N5", 0, now);
        assert!(jar
            .get_at("postalCode", now + Duration::days(10_000))
            .is_some());
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("jar").join("cookies.json");

        let mut jar = CookieJar::new();
        jar.set("postalCode", "K0B 1R0", 30);
        jar.save(&path).unwrap();

        let reloaded = CookieJar::load(&path).unwrap();
        assert_eq!(reloaded.get("postalCode").as_deref(), Some("K0B 1R0"));
    }

    #[test]
    fn load_missing_file_yields_empty_jar() {
        let dir = tempfile::TempDir::new().unwrap();
        let jar = CookieJar::load(&dir.path().join("nope.json")).unwrap();
        assert!(jar.get("postalCode").is_none());
    }
}
