// Types shared by the auth client and the session
pub mod common;

mod client;
mod error;

pub use client::{
    auth_client::{AuthBackend, AuthClient, AuthClientError, Credentials, LoginResponse},
    gateway::ApiGateway,
    navigation::{Navigator, LOGIN_PATH},
    session::{Session, SessionStatus, SessionStore},
    token_storage::{
        FileStorage, KeyValueStorage, MemoryStorage, TokenStore, ACCESS_TOKEN_KEY,
        REFRESH_TOKEN_KEY,
    },
    Settings,
};
pub use common::TokenPair;
pub use error::AuthError;
