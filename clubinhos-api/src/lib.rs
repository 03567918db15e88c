pub mod endpoints;
mod error;
mod macros;
pub mod repositories;
mod transport;

pub use crate::error::{ClubinhosApiError, ErrorDetail, ErrorMessage};
pub use crate::transport::Transport;
pub use tower_api_client::{EmptyResponse, Request as ApiRequest, StatusCode};

use repositories::*;
use std::time::Duration;
use tower_api_client::Client as ApiClient;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over the Clubinhos REST backend.
///
/// The underlying HTTP client (and its connection pool) is built once and
/// shared by clones. The bearer token is supplied per dispatch so a gateway
/// can swap tokens between attempts.
#[derive(Clone)]
pub struct Client {
    inner: ApiClient,
    base_url: String,
    timeout: Duration,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            inner: ApiClient::new(base_url.as_str()),
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Bound every request, connection included, by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send a request, attaching `bearer` as the authorization header when present
    pub async fn send<R>(&self, request: R, bearer: Option<&str>) -> Result<R::Response, ClubinhosApiError>
    where
        R: ApiRequest,
    {
        send_with_timeout(self.authorized(bearer), self.timeout, request).await
    }

    /// A handle on the shared client carrying `bearer`
    fn authorized(&self, bearer: Option<&str>) -> ApiClient {
        match bearer {
            Some(token) => self.inner.clone().bearer_auth(token),
            None => self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

async fn send_with_timeout<R>(
    client: ApiClient,
    timeout: Duration,
    request: R,
) -> Result<R::Response, ClubinhosApiError>
where
    R: ApiRequest,
{
    match tokio::time::timeout(timeout, client.send(request)).await {
        Ok(result) => result.map_err(From::from),
        Err(_) => Err(ClubinhosApiError::Timeout(timeout)),
    }
}

pub struct Request;

impl Request {
    pub fn auth() -> AuthRepository {
        AuthRepository::new()
    }

    pub fn routes() -> RouteRepository {
        RouteRepository::new()
    }

    pub fn image_pages() -> ImagePageRepository {
        ImagePageRepository::new()
    }

    pub fn video_pages() -> VideoPageRepository {
        VideoPageRepository::new()
    }

    pub fn week_material_pages() -> WeekMaterialPageRepository {
        WeekMaterialPageRepository::new()
    }

    pub fn ideas_pages() -> IdeasPageRepository {
        IdeasPageRepository::new()
    }

    pub fn meditations() -> MeditationRepository {
        MeditationRepository::new()
    }

    pub fn comments() -> CommentRepository {
        CommentRepository::new()
    }

    pub fn site_feedbacks() -> SiteFeedbackRepository {
        SiteFeedbackRepository::new()
    }

    pub fn documents() -> DocumentRepository {
        DocumentRepository::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = Client::new("https://api.clubinhos.org/");
        assert_eq!(client.base_url(), "https://api.clubinhos.org");
    }

    #[test]
    fn default_client_targets_local_backend() {
        let client = Client::default();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    }

    #[tokio::test]
    async fn stalled_backend_times_out() {
        // Connections queue in the backlog but nothing ever answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let client = Client::new(url).with_timeout(Duration::from_millis(100));

        let err = client
            .send(Request::routes().list(), Some("token"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClubinhosApiError::Timeout(t) if t == Duration::from_millis(100)));
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }
}
