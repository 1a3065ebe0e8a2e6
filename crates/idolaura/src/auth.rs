//! Admin session management
//!
//! Administrative writes are authorized by the remote backend's session
//! mechanism. This module exchanges credentials for a token at the
//! backend's auth endpoint and persists the session beside the local
//! snapshot; it makes no authorization decisions itself. In local mode
//! there is no session at all.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::config::storage::SESSION_FILE;
use crate::data::remote::RemoteConfig;
use crate::data::storage;
use crate::error::{Result, SiteError};
use crate::network::HttpClient;

// =============================================================================
// Session
// =============================================================================

/// A signed-in admin session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the token's lifetime has passed (unknown lifetime = valid)
    pub fn is_expired(&self) -> bool {
        matches!(self.expires_at, Some(t) if t <= Utc::now())
    }
}

// Token endpoint response (grant_type=password)
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<TokenUser>,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    #[serde(default)]
    email: Option<String>,
}

// =============================================================================
// Sign in / sign out
// =============================================================================

/// Exchange credentials for a session and persist it
pub fn sign_in(config: &RemoteConfig, email: &str, password: &str) -> Result<Session> {
    let client = HttpClient::new()?;
    let body = serde_json::json!({ "email": email, "password": password });
    let resp: TokenResponse = client
        .post_json(
            &config.auth_url("token?grant_type=password"),
            &[("apikey", config.anon_key.as_str())],
            &body,
        )
        .map_err(|e| match e {
            SiteError::Backend { status: 400 | 401, .. } => {
                SiteError::Auth("invalid email or password".to_string())
            }
            other => other,
        })?;

    let session = Session {
        access_token: resp.access_token,
        user_email: resp
            .user
            .and_then(|u| u.email)
            .unwrap_or_else(|| email.to_string()),
        expires_at: resp.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)),
    };
    storage::save(SESSION_FILE, &session)?;
    Ok(session)
}

/// Drop the persisted session, revoking it server-side when possible
pub fn sign_out(config: Option<&RemoteConfig>) -> Result<()> {
    if let (Some(config), Some(session)) = (config, load_session()) {
        // Best-effort revocation; the local session is removed either way
        if let Ok(client) = HttpClient::new() {
            let bearer = format!("Bearer {}", session.access_token);
            let headers = [
                ("apikey", config.anon_key.as_str()),
                ("Authorization", bearer.as_str()),
            ];
            if let Err(e) =
                client.post_unit(&config.auth_url("logout"), &headers, &serde_json::json!({}))
            {
                warn!(error = %e, "server-side logout failed");
            }
        }
    }
    storage::delete(SESSION_FILE)
}

/// The persisted session, if present and not expired
pub fn load_session() -> Option<Session> {
    let path = match storage::data_path(SESSION_FILE) {
        Ok(p) => p,
        Err(_) => return None,
    };
    load_session_from(&path)
}

/// Load a session from a specific path (tests, custom locations)
pub fn load_session_from(path: &Path) -> Option<Session> {
    match storage::load_from::<Session>(path) {
        Ok(session) => session.filter(|s| !s.is_expired()),
        Err(e) => {
            warn!(error = %e, "persisted session unreadable, ignoring");
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("idolaura_auth_test_{}.json", id))
    }

    fn sample_session(expires_at: Option<DateTime<Utc>>) -> Session {
        Session {
            access_token: "jwt-abc".to_string(),
            user_email: "admin@example.com".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_session_round_trip() {
        let path = temp_path();
        let session = sample_session(Some(Utc::now() + Duration::hours(1)));

        storage::save_to(&path, &session).unwrap();
        let loaded = load_session_from(&path).unwrap();
        assert_eq!(loaded, session);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_expired_session_is_dropped() {
        let path = temp_path();
        let session = sample_session(Some(Utc::now() - Duration::hours(1)));

        storage::save_to(&path, &session).unwrap();
        assert!(load_session_from(&path).is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_session_without_expiry_is_valid() {
        assert!(!sample_session(None).is_expired());
    }

    #[test]
    fn test_missing_session_file() {
        assert!(load_session_from(&temp_path()).is_none());
    }

    #[test]
    fn test_corrupt_session_file_is_ignored() {
        let path = temp_path();
        fs::write(&path, "{ nope").unwrap();
        assert!(load_session_from(&path).is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{
            "access_token": "jwt-xyz",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-1",
            "user": { "id": "u1", "email": "admin@example.com" }
        }"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "jwt-xyz");
        assert_eq!(resp.expires_in, Some(3600));
        assert_eq!(resp.user.unwrap().email.as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn test_token_response_minimal() {
        let resp: TokenResponse = serde_json::from_str(r#"{"access_token": "t"}"#).unwrap();
        assert_eq!(resp.access_token, "t");
        assert!(resp.expires_in.is_none());
        assert!(resp.user.is_none());
    }
}
