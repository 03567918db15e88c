pub mod auth_client;
mod config;
pub mod gateway;
pub mod navigation;
pub mod session;
pub mod token_storage;

pub use config::Settings;

use crate::error::AuthError;
use session::SessionStore;
use std::sync::Arc;
use token_storage::{FileStorage, TokenStore};

impl Settings {
    /// Open the on-disk token storage and seed a session from whatever it holds
    pub fn open_session(&self) -> Result<SessionStore, AuthError> {
        let storage = match &self.storage_dir {
            Some(dir) => FileStorage::in_dir(dir)?,
            None => FileStorage::new()?,
        };
        let session = SessionStore::restore(TokenStore::new(Arc::new(storage)))?;
        tracing::info!(
            authenticated = session.is_authenticated(),
            "Session restored from durable storage"
        );
        Ok(session)
    }
}
