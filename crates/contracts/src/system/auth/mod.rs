use serde::{Deserialize, Serialize};

/// Seconds before expiry at which a stored access token is treated as stale
pub const EXPIRY_SKEW_SECS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// User object returned by the auth API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Token grant response (password and refresh grants)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// Authenticated identity held by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

impl From<AuthUser> for Session {
    fn from(user: AuthUser) -> Self {
        Self {
            user_id: user.id,
            email: user.email.unwrap_or_default(),
        }
    }
}

/// Session plus the tokens needed to talk to the backend; persisted between page loads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<i64>,
    pub session: Session,
}

impl TokenResponse {
    pub fn into_stored(self, now_secs: i64) -> StoredSession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_secs + secs));
        StoredSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            session: self.user.into(),
        }
    }
}

impl StoredSession {
    /// Unknown expiry is trusted until the backend rejects the token
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at
            .map(|at| now_secs >= at - EXPIRY_SKEW_SECS)
            .unwrap_or(false)
    }
}

/// Credential to put on the next backend request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bearer {
    /// No session: the anon key
    Anon,
    /// The stored access token is still valid
    Access(String),
    /// The access token expired; exchange this refresh token first
    Refresh(String),
}

impl Bearer {
    pub fn for_session(stored: Option<&StoredSession>, now_secs: i64) -> Self {
        match stored {
            None => Bearer::Anon,
            Some(stored) if stored.is_expired(now_secs) => {
                Bearer::Refresh(stored.refresh_token.clone())
            }
            Some(stored) => Bearer::Access(stored.access_token.clone()),
        }
    }
}

/// Session as seen by the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Persisted tokens are being checked at start-up
    #[default]
    Restoring,
    SignedOut,
    SignedIn(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session().map(|s| s.user_id.as_str())
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Restoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_response(expires_at: Option<i64>, expires_in: Option<i64>) -> TokenResponse {
        TokenResponse {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            expires_in,
            expires_at,
            user: AuthUser {
                id: "u1".into(),
                email: Some("buyer@example.com".into()),
            },
        }
    }

    #[test]
    fn test_into_stored_prefers_absolute_expiry() {
        let stored = token_response(Some(5_000), Some(3_600)).into_stored(1_000);
        assert_eq!(stored.expires_at, Some(5_000));
        assert_eq!(stored.session.email, "buyer@example.com");
    }

    #[test]
    fn test_into_stored_derives_expiry() {
        let stored = token_response(None, Some(3_600)).into_stored(1_000);
        assert_eq!(stored.expires_at, Some(4_600));
    }

    #[test]
    fn test_expiry_with_skew() {
        let stored = token_response(Some(1_000), None).into_stored(0);
        assert!(!stored.is_expired(900));
        assert!(stored.is_expired(980));
        let unknown = token_response(None, None).into_stored(0);
        assert!(!unknown.is_expired(i64::MAX));
    }

    #[test]
    fn test_bearer_refreshes_expired_token_mid_session() {
        let stored = token_response(Some(1_000), None).into_stored(0);
        assert_eq!(Bearer::for_session(None, 500), Bearer::Anon);
        assert_eq!(
            Bearer::for_session(Some(&stored), 500),
            Bearer::Access("at".to_string())
        );
        assert_eq!(
            Bearer::for_session(Some(&stored), 990),
            Bearer::Refresh("rt".to_string())
        );
    }

    #[test]
    fn test_token_response_parses_auth_payload() {
        let json = r#"{"access_token":"a","token_type":"bearer","expires_in":3600,"expires_at":1700000000,"refresh_token":"r","user":{"id":"9d1","email":"x@y.z","aud":"authenticated"}}"#;
        let parsed: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.id, "9d1");
        assert_eq!(parsed.expires_at, Some(1_700_000_000));
    }

    #[test]
    fn test_session_state_accessors() {
        let state = SessionState::SignedIn(Session {
            user_id: "u1".into(),
            email: "e".into(),
        });
        assert_eq!(state.user_id(), Some("u1"));
        assert!(state.is_resolved());
        assert!(!SessionState::Restoring.is_resolved());
        assert_eq!(SessionState::SignedOut.session(), None);
    }
}
