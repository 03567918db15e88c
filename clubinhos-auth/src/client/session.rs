use super::token_storage::TokenStore;
use crate::common::TokenPair;
use crate::error::AuthError;
use clubinhos_api::endpoints::auth::User;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unauthenticated,
    Authenticated,
    /// A token refresh call is outstanding
    RefreshInFlight,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    pub current_user: Option<User>,
    pub is_loading_user: bool,
    pub status: SessionStatus,
}

impl Session {
    fn authenticated(tokens: TokenPair) -> Self {
        Self {
            access_token: Some(tokens.access_token),
            refresh_token: Some(tokens.refresh_token),
            is_authenticated: true,
            status: SessionStatus::Authenticated,
            ..Default::default()
        }
    }
}

/// Shared session handle.
///
/// Cloning is cheap and every clone sees the same session. Tokens are written
/// through to durable storage on every change.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<Session>>,
    tokens: TokenStore,
}

impl SessionStore {
    /// Seed the session from durable storage
    pub fn restore(tokens: TokenStore) -> Result<Self, AuthError> {
        let access_token = tokens.access_token()?;
        let refresh_token = tokens.refresh_token()?;

        let session = match (access_token, refresh_token) {
            (Some(access_token), Some(refresh_token)) => {
                Session::authenticated(TokenPair::new(access_token, refresh_token))
            }
            (access_token, refresh_token) => Session {
                is_authenticated: access_token.is_some(),
                status: if access_token.is_some() {
                    SessionStatus::Authenticated
                } else {
                    SessionStatus::Unauthenticated
                },
                access_token,
                refresh_token,
                ..Default::default()
            },
        };

        Ok(Self {
            state: Arc::new(RwLock::new(session)),
            tokens,
        })
    }

    /// Empty session over in-memory storage
    pub fn in_memory() -> Self {
        Self {
            state: Arc::new(RwLock::new(Session::default())),
            tokens: TokenStore::in_memory(),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.read().status
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().access_token.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().current_user.clone()
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// The refresh token as persisted, which is what a refresh must use
    pub fn stored_refresh_token(&self) -> Result<Option<String>, AuthError> {
        self.tokens.refresh_token()
    }

    pub fn login(&self, tokens: TokenPair, user: Option<User>) -> Result<(), AuthError> {
        {
            let mut state = self.write();
            *state = Session::authenticated(tokens.clone());
            state.current_user = user;
        }
        tracing::info!("Session authenticated");
        self.tokens.save_tokens(&tokens)
    }

    /// Replace the token pair after a refresh, keeping the loaded user
    pub fn set_tokens(&self, tokens: TokenPair) -> Result<(), AuthError> {
        {
            let mut state = self.write();
            state.access_token = Some(tokens.access_token.clone());
            state.refresh_token = Some(tokens.refresh_token.clone());
            state.is_authenticated = true;
            state.status = SessionStatus::Authenticated;
        }
        self.tokens.save_tokens(&tokens)
    }

    pub fn begin_refresh(&self) {
        self.write().status = SessionStatus::RefreshInFlight;
    }

    /// Drop tokens and user from memory and durable storage
    pub fn clear(&self) -> Result<(), AuthError> {
        *self.write() = Session::default();
        tracing::info!("Session cleared");
        self.tokens.clear()
    }

    pub fn set_loading_user(&self, loading: bool) {
        self.write().is_loading_user = loading;
    }

    pub fn set_current_user(&self, user: Option<User>) {
        let mut state = self.write();
        state.current_user = user;
        state.is_loading_user = false;
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
