use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;

use crate::models::user::{AuthResponse, RefreshTokenResponse};

/// Signed-in user state, with an explicit lifecycle: populated by the login
/// call, updated on token refresh, cleared at logout or when a refresh fails.
/// Replaces ad hoc reads of scattered per-key storage.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub permissions: Vec<String>,
}

/// Session handle shared between the API client and UI callers
pub type SharedSession = Arc<RwLock<Session>>;

pub fn shared_session() -> SharedSession {
    Arc::new(RwLock::new(Session::default()))
}

impl Session {
    /// Populate the session from a successful login
    pub fn authenticate(&mut self, auth: &AuthResponse) {
        self.access_token = Some(auth.access_token.clone());
        self.refresh_token = auth.refresh_token.clone();
        self.user_id = auth.id;
        self.name = auth.name.clone();
        self.role = auth.user_role.clone();
        self.permissions = auth.permissions.clone().unwrap_or_default();
    }

    /// Apply a refresh-token response, keeping fields the server omitted
    pub fn apply_refresh(&mut self, refresh: &RefreshTokenResponse) {
        self.access_token = Some(refresh.access_token.clone());
        if refresh.id.is_some() {
            self.user_id = refresh.id;
        }
        if refresh.name.is_some() {
            self.name = refresh.name.clone();
        }
        if refresh.user_role.is_some() {
            self.role = refresh.user_role.clone();
        }
        if let Some(permissions) = &refresh.permissions {
            self.permissions = permissions.clone();
        }
    }

    pub fn clear(&mut self) {
        *self = Session::default();
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Expiry claim of the access token. The client cannot verify the
    /// signature, so this only decodes the payload for scheduling purposes.
    pub fn token_expiry(&self) -> Option<DateTime<Utc>> {
        let token = self.access_token.as_deref()?;
        let payload = token.split('.').nth(1)?;
        let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
        let exp = claims.get("exp")?.as_i64()?;
        Utc.timestamp_opt(exp, 0).single()
    }

    pub fn is_token_expired(&self, now: DateTime<Utc>) -> bool {
        match self.token_expiry() {
            Some(expiry) => now >= expiry,
            None => false,
        }
    }
}
