//! # Session Persistence
//!
//! Stores the bearer token and the signed-in user in a JSON file next to the
//! binary, so a restart lands back on the dashboard instead of the login
//! form. The file is removed on logout and whenever the backend rejects the
//! token.

use serde::{Deserialize, Serialize};
use shared::UserInfo;
use std::path::PathBuf;

use crate::core::error::Result;

/// On-disk session record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserInfo,
}

/// Default session file path
pub fn session_path() -> PathBuf {
    PathBuf::from("./salesdesk-session.json")
}

/// Load the persisted session, if any. Missing or unreadable files mean
/// "not signed in", never an error the caller has to handle.
pub fn load_session() -> Option<StoredSession> {
    let path = session_path();
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => return None,
    };
    match serde_json::from_str::<StoredSession>(&contents) {
        Ok(session) => {
            tracing::info!(user = %session.user.email, "Loaded session from {:?}", path);
            Some(session)
        }
        Err(e) => {
            tracing::warn!("Session file {:?} is corrupt: {}. Ignoring it.", path, e);
            None
        }
    }
}

/// Persist the session after a successful login or registration.
pub fn save_session(session: &StoredSession) -> Result<()> {
    let path = session_path();
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(&path, json)?;
    tracing::info!("Saved session to {:?}", path);
    Ok(())
}

/// Delete the session file. Called on logout and on 401; a file that was
/// never written is not an error.
pub fn clear_session() {
    let path = session_path();
    match std::fs::remove_file(&path) {
        Ok(()) => tracing::info!("Cleared session file {:?}", path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to remove session file {:?}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserInfo {
        UserInfo {
            id: 7,
            name: "Alice".to_string(),
            email: "alice@acme.test".to_string(),
            role: "owner".to_string(),
            company_id: 3,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let session = StoredSession {
            token: "jwt-token".to_string(),
            user: sample_user(),
        };
        let json = serde_json::to_string_pretty(&session).unwrap();
        let back: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_corrupt_session_parses_to_none() {
        let parsed = serde_json::from_str::<StoredSession>("{\"token\": 42}");
        assert!(parsed.is_err());
    }
}
