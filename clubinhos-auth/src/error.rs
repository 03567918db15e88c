use std::io;
use thiserror::Error;

/// Failures of the durable session storage
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No cache directory available for the session")]
    NoCacheDir,

    #[error("Token storage I/O failed ({action}): {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Token storage lock poisoned")]
    StoragePoisoned,

    #[error("Token storage holds invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuthError {
    /// `map_err` adapter tagging an I/O error with what storage was doing
    pub(crate) fn storage(action: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Storage { action, source }
    }
}
