mod models;

use crate::common::TokenPair;
pub use models::{AuthClientError, Credentials, LoginResponse};
use models::*;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;

/// Unauthenticated calls that obtain tokens.
///
/// These never go through the gateway, so a failing refresh cannot recurse
/// into another refresh.
pub trait AuthBackend: Send + Sync {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResponse, AuthClientError>> + Send;

    fn refresh(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = Result<TokenPair, AuthClientError>> + Send;
}

pub struct AuthClient {
    http_client: Client,
    api_url: String,
}

impl AuthClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, AuthClientError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl AuthBackend for AuthClient {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResponse, AuthClientError>> + Send {
        async move {
            let url = format!("{}/auth/login", self.api_url);

            let resp = self
                .http_client
                .post(&url)
                .json(&credentials.as_request())
                .send()
                .await?;

            if matches!(resp.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
                return Err(AuthClientError::InvalidCredentials);
            }

            Ok(resp.error_for_status()?.json::<LoginResponse>().await?)
        }
    }

    fn refresh(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = Result<TokenPair, AuthClientError>> + Send {
        async move {
            let url = format!("{}/auth/refresh", self.api_url);
            let req = RefreshRequest { refresh_token };

            let resp = self.http_client.post(&url).json(&req).send().await?;

            if matches!(resp.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
                return Err(AuthClientError::RefreshRejected);
            }
            if resp.status().is_server_error() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(AuthClientError::ServerError(format!("{}: {}", status, body)));
            }

            Ok(resp.error_for_status()?.json::<TokenPair>().await?)
        }
    }
}
