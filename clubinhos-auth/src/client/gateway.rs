use super::auth_client::{AuthBackend, AuthClientError, Credentials};
use super::navigation::{Navigator, LOGIN_PATH};
use super::session::SessionStore;
use clubinhos_api::endpoints::auth::User;
use clubinhos_api::{ApiRequest, ClubinhosApiError, Request, Transport};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Sends API requests on behalf of the session.
///
/// Every request carries the current bearer token. A 401 triggers at most one
/// token refresh and one retry of that request; if the refresh itself fails the
/// session is cleared and the user is sent to the login page.
pub struct ApiGateway<T, A> {
    transport: T,
    auth: Arc<A>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    refresh_lock: Arc<Mutex<()>>,
}

impl<T, A> ApiGateway<T, A>
where
    T: Transport,
    A: AuthBackend + 'static,
{
    pub fn new(transport: T, auth: A, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            transport,
            auth: Arc::new(auth),
            session,
            navigator,
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, ClubinhosApiError>
    where
        R: ApiRequest + Clone + Send + Sync,
        R::Response: DeserializeOwned + Send,
    {
        let mut token = self.session.access_token();
        let mut retried = false;

        loop {
            let result = self
                .transport
                .dispatch(request.clone(), token.as_deref())
                .await;

            match result {
                Err(e) if e.is_unauthorized() && !retried => {
                    retried = true;
                    tracing::info!(
                        endpoint = %request.endpoint(),
                        "Access token rejected, attempting refresh"
                    );
                    let renewed = self.renew_access_token(token.as_deref()).await;
                    match renewed {
                        Some(fresh) => token = Some(fresh),
                        None => return Err(e),
                    }
                }
                result => return result,
            }
        }
    }

    /// Returns a usable access token, refreshing unless another request
    /// already replaced the token that was rejected.
    ///
    /// The refresh call runs as its own task holding the refresh lock; it
    /// settles the session even if the caller is cancelled.
    async fn renew_access_token(&self, rejected: Option<&str>) -> Option<String> {
        let guard = self.refresh_lock.clone().lock_owned().await;

        if let Some(current) = self.session.access_token() {
            if rejected != Some(current.as_str()) {
                tracing::debug!("Access token already renewed by a concurrent request");
                return Some(current);
            }
        }

        let refresh_token = match self.session.stored_refresh_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::warn!("No refresh token stored, ending session");
                self.end_session();
                return None;
            }
            Err(e) => {
                tracing::error!("Failed to read refresh token: {}", e);
                self.end_session();
                return None;
            }
        };

        self.session.begin_refresh();
        let refresh = tokio::spawn(complete_refresh(
            self.auth.clone(),
            self.session.clone(),
            self.navigator.clone(),
            refresh_token,
            guard,
        ));

        match refresh.await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("Token refresh task failed: {}", e);
                self.end_session();
                None
            }
        }
    }

    fn end_session(&self) {
        end_session(&self.session, self.navigator.as_ref());
    }

    /// Exchange credentials for tokens and open a session
    pub async fn login(&self, credentials: &Credentials) -> Result<Option<User>, AuthClientError> {
        tracing::info!(email = %credentials.email, "Logging in");
        let response = self.auth.login(credentials).await?;

        if let Err(e) = self.session.login(response.tokens(), response.user.clone()) {
            tracing::warn!("Tokens could not be persisted: {}", e);
        }
        Ok(response.user)
    }

    /// Tell the backend to drop the refresh token, then clear the session
    /// regardless of the outcome.
    pub async fn logout(&self) {
        if self.session.access_token().is_some() {
            if let Err(e) = self.send(Request::auth().logout()).await {
                tracing::warn!("Backend logout failed: {}", e);
            }
        }
        if let Err(e) = self.session.clear() {
            tracing::error!("Failed to clear stored tokens: {}", e);
        }
    }

    /// Fetch the profile behind the current token into the session
    pub async fn load_current_user(&self) -> Result<User, ClubinhosApiError> {
        self.session.set_loading_user(true);
        match self.send(Request::auth().me()).await {
            Ok(user) => {
                self.session.set_current_user(Some(user.clone()));
                Ok(user)
            }
            Err(e) => {
                self.session.set_loading_user(false);
                Err(e)
            }
        }
    }
}

async fn complete_refresh<A: AuthBackend>(
    auth: Arc<A>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    refresh_token: String,
    _guard: OwnedMutexGuard<()>,
) -> Option<String> {
    match auth.refresh(&refresh_token).await {
        Ok(tokens) => {
            let access_token = tokens.access_token.clone();
            if let Err(e) = session.set_tokens(tokens) {
                tracing::warn!("Refreshed tokens could not be persisted: {}", e);
            }
            tracing::info!("Access token refreshed");
            Some(access_token)
        }
        Err(e) => {
            tracing::warn!("Token refresh failed: {}", e);
            end_session(&session, navigator.as_ref());
            None
        }
    }
}

fn end_session(session: &SessionStore, navigator: &dyn Navigator) {
    if let Err(e) = session.clear() {
        tracing::error!("Failed to clear stored tokens: {}", e);
    }
    navigator.navigate(LOGIN_PATH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::auth_client::LoginResponse;
    use crate::client::session::SessionStatus;
    use crate::common::TokenPair;
    use clubinhos_api::endpoints::routes::RouteEntry;
    use clubinhos_api::{ErrorDetail, StatusCode};
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    #[derive(Debug, Clone, PartialEq)]
    struct Call {
        endpoint: String,
        bearer: Option<String>,
    }

    /// Replays scripted responses in order and records what was sent
    #[derive(Default)]
    struct MockTransport {
        responses: StdMutex<VecDeque<Result<Value, StatusCode>>>,
        calls: StdMutex<Vec<Call>>,
    }

    impl MockTransport {
        fn new(responses: Vec<Result<Value, StatusCode>>) -> Self {
            Self {
                responses: StdMutex::new(responses.into()),
                calls: StdMutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        fn dispatch<R>(
            &self,
            request: R,
            bearer: Option<&str>,
        ) -> impl Future<Output = Result<R::Response, ClubinhosApiError>> + Send
        where
            R: ApiRequest + Send + Sync,
            R::Response: DeserializeOwned + Send,
        {
            self.calls.lock().unwrap().push(Call {
                endpoint: request.endpoint().into_owned(),
                bearer: bearer.map(str::to_owned),
            });
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected request");

            async move {
                match next {
                    Ok(value) => Ok(serde_json::from_value(value).expect("scripted response shape")),
                    Err(status) => Err(ClubinhosApiError::Api(
                        status,
                        ErrorDetail::from_text(status, ""),
                    )),
                }
            }
        }
    }

    struct MockAuth {
        refresh_result: Option<TokenPair>,
        refresh_calls: AtomicUsize,
        refresh_tokens_seen: StdMutex<Vec<String>>,
        /// When set, a refresh stays outstanding until notified
        release: Option<Arc<Notify>>,
    }

    impl MockAuth {
        fn refreshing_to(tokens: TokenPair) -> Self {
            Self {
                refresh_result: Some(tokens),
                refresh_calls: AtomicUsize::new(0),
                refresh_tokens_seen: StdMutex::new(Vec::new()),
                release: None,
            }
        }

        fn failing() -> Self {
            Self {
                refresh_result: None,
                ..Self::refreshing_to(TokenPair::new("", ""))
            }
        }

        fn held_until(mut self, release: Arc<Notify>) -> Self {
            self.release = Some(release);
            self
        }

        fn refresh_calls(&self) -> usize {
            self.refresh_calls.load(Ordering::SeqCst)
        }
    }

    impl AuthBackend for MockAuth {
        fn login(
            &self,
            credentials: &Credentials,
        ) -> impl Future<Output = Result<LoginResponse, AuthClientError>> + Send {
            let valid = credentials.email == "ana@clubinhos.org";
            async move {
                if !valid {
                    return Err(AuthClientError::InvalidCredentials);
                }
                Ok(serde_json::from_value(json!({
                    "accessToken": "login-access",
                    "refreshToken": "login-refresh",
                    "user": {"id": "u1", "name": "Ana", "email": "ana@clubinhos.org"}
                }))
                .unwrap())
            }
        }

        fn refresh(
            &self,
            refresh_token: &str,
        ) -> impl Future<Output = Result<TokenPair, AuthClientError>> + Send {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
            self.refresh_tokens_seen
                .lock()
                .unwrap()
                .push(refresh_token.to_string());
            let result = self
                .refresh_result
                .clone()
                .ok_or(AuthClientError::RefreshRejected);
            let release = self.release.clone();
            async move {
                // Give concurrent requests a chance to run into the lock
                tokio::task::yield_now().await;
                if let Some(release) = release {
                    release.notified().await;
                }
                result
            }
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        paths: StdMutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    fn logged_in_session() -> SessionStore {
        let session = SessionStore::in_memory();
        session
            .login(TokenPair::new("old-access", "old-refresh"), None)
            .unwrap();
        session
    }

    fn routes_json() -> Value {
        json!([{
            "id": "r1",
            "path": "galeria",
            "entityType": "ImagesPage",
            "idToFetch": "id123",
            "title": "Galeria"
        }])
    }

    fn gateway(
        transport: MockTransport,
        auth: MockAuth,
        session: SessionStore,
    ) -> (ApiGateway<MockTransport, MockAuth>, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let gateway = ApiGateway::new(transport, auth, session, navigator.clone());
        (gateway, navigator)
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_present() {
        let (gateway, _) = gateway(
            MockTransport::new(vec![Ok(routes_json())]),
            MockAuth::failing(),
            logged_in_session(),
        );

        let routes: Vec<RouteEntry> = gateway.send(Request::routes().list()).await.unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(
            gateway.transport.calls(),
            vec![Call {
                endpoint: "/routes".to_string(),
                bearer: Some("old-access".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn sends_no_header_without_a_token() {
        let (gateway, _) = gateway(
            MockTransport::new(vec![Ok(routes_json())]),
            MockAuth::failing(),
            SessionStore::in_memory(),
        );

        gateway.send(Request::routes().list()).await.unwrap();
        assert_eq!(gateway.transport.calls()[0].bearer, None);
    }

    #[tokio::test]
    async fn refreshes_once_and_retries_with_new_token() {
        let (gateway, navigator) = gateway(
            MockTransport::new(vec![Err(StatusCode::UNAUTHORIZED), Ok(routes_json())]),
            MockAuth::refreshing_to(TokenPair::new("new-access", "new-refresh")),
            logged_in_session(),
        );

        let routes = gateway.send(Request::routes().list()).await.unwrap();
        assert_eq!(routes[0].id_to_fetch, "id123");

        assert_eq!(gateway.auth.refresh_calls(), 1);
        assert_eq!(
            *gateway.auth.refresh_tokens_seen.lock().unwrap(),
            vec!["old-refresh".to_string()]
        );

        let calls = gateway.transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].bearer.as_deref(), Some("old-access"));
        assert_eq!(calls[1].bearer.as_deref(), Some("new-access"));

        let session = gateway.session().snapshot();
        assert_eq!(session.access_token.as_deref(), Some("new-access"));
        assert_eq!(session.status, SessionStatus::Authenticated);
        assert_eq!(
            gateway.session().stored_refresh_token().unwrap().as_deref(),
            Some("new-refresh")
        );
        assert!(navigator.paths.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_unauthorized_is_not_retried_again() {
        let (gateway, _) = gateway(
            MockTransport::new(vec![
                Err(StatusCode::UNAUTHORIZED),
                Err(StatusCode::UNAUTHORIZED),
            ]),
            MockAuth::refreshing_to(TokenPair::new("new-access", "new-refresh")),
            logged_in_session(),
        );

        let err = gateway.send(Request::routes().list()).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(gateway.auth.refresh_calls(), 1);
        assert_eq!(gateway.transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_clears_session_and_redirects_to_login() {
        let (gateway, navigator) = gateway(
            MockTransport::new(vec![Err(StatusCode::UNAUTHORIZED)]),
            MockAuth::failing(),
            logged_in_session(),
        );

        let err = gateway.send(Request::routes().list()).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(gateway.transport.calls().len(), 1);

        let session = gateway.session().snapshot();
        assert!(!session.is_authenticated);
        assert_eq!(session.access_token, None);
        assert_eq!(session.refresh_token, None);
        assert_eq!(gateway.session().stored_refresh_token().unwrap(), None);
        assert_eq!(*navigator.paths.lock().unwrap(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn missing_refresh_token_takes_the_failure_path() {
        let (gateway, navigator) = gateway(
            MockTransport::new(vec![Err(StatusCode::UNAUTHORIZED)]),
            MockAuth::refreshing_to(TokenPair::new("new-access", "new-refresh")),
            SessionStore::in_memory(),
        );

        assert!(gateway.send(Request::routes().list()).await.is_err());
        assert_eq!(gateway.auth.refresh_calls(), 0);
        assert_eq!(*navigator.paths.lock().unwrap(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn other_errors_propagate_without_refresh() {
        let (gateway, navigator) = gateway(
            MockTransport::new(vec![Err(StatusCode::NOT_FOUND)]),
            MockAuth::refreshing_to(TokenPair::new("new-access", "new-refresh")),
            logged_in_session(),
        );

        let err = gateway.send(Request::image_pages().get("nope")).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(gateway.auth.refresh_calls(), 0);
        assert!(gateway.session().is_authenticated());
        assert!(navigator.paths.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn token_renewed_elsewhere_is_reused_without_refreshing() {
        let (gateway, _) = gateway(
            MockTransport::new(vec![Ok(routes_json())]),
            MockAuth::refreshing_to(TokenPair::new("unused", "unused")),
            logged_in_session(),
        );
        gateway
            .session()
            .set_tokens(TokenPair::new("renewed-access", "renewed-refresh"))
            .unwrap();

        let token = gateway.renew_access_token(Some("old-access")).await;
        assert_eq!(token.as_deref(), Some("renewed-access"));
        assert_eq!(gateway.auth.refresh_calls(), 0);
    }

    #[tokio::test]
    async fn concurrent_unauthorized_requests_share_one_refresh() {
        let (gateway, _) = gateway(
            MockTransport::new(vec![
                Err(StatusCode::UNAUTHORIZED),
                Err(StatusCode::UNAUTHORIZED),
                Ok(routes_json()),
                Ok(routes_json()),
            ]),
            MockAuth::refreshing_to(TokenPair::new("new-access", "new-refresh")),
            logged_in_session(),
        );

        let (first, second) = tokio::join!(
            gateway.send(Request::routes().list()),
            gateway.send(Request::routes().list()),
        );
        assert_eq!(first.unwrap().len(), 1);
        assert_eq!(second.unwrap().len(), 1);

        assert_eq!(gateway.auth.refresh_calls(), 1);
        let bearers: Vec<_> = gateway
            .transport
            .calls()
            .into_iter()
            .map(|call| call.bearer)
            .collect();
        assert_eq!(
            bearers,
            vec![
                Some("old-access".to_string()),
                Some("old-access".to_string()),
                Some("new-access".to_string()),
                Some("new-access".to_string()),
            ]
        );
        assert_eq!(gateway.session().status(), SessionStatus::Authenticated);
    }

    #[tokio::test]
    async fn cancelled_request_still_completes_its_refresh() {
        let release = Arc::new(Notify::new());
        let (gateway, navigator) = gateway(
            MockTransport::new(vec![Err(StatusCode::UNAUTHORIZED)]),
            MockAuth::refreshing_to(TokenPair::new("rotated-access", "rotated-refresh"))
                .held_until(release.clone()),
            logged_in_session(),
        );
        let gateway = Arc::new(gateway);

        let task = tokio::spawn({
            let gateway = gateway.clone();
            async move { gateway.send(Request::routes().list()).await }
        });

        tokio::time::timeout(Duration::from_secs(1), async {
            while gateway.auth.refresh_calls() == 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
        assert_eq!(gateway.session().status(), SessionStatus::RefreshInFlight);

        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        release.notify_one();
        tokio::time::timeout(Duration::from_secs(1), async {
            while gateway.session().status() != SessionStatus::Authenticated {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();

        assert_eq!(
            gateway.session().access_token().as_deref(),
            Some("rotated-access")
        );
        assert_eq!(
            gateway.session().stored_refresh_token().unwrap().as_deref(),
            Some("rotated-refresh")
        );
        assert!(navigator.paths.lock().unwrap().is_empty());

        // The lock was released with the refresh task
        let token = gateway.renew_access_token(Some("old-access")).await;
        assert_eq!(token.as_deref(), Some("rotated-access"));
        assert_eq!(gateway.auth.refresh_calls(), 1);
    }

    #[tokio::test]
    async fn login_stores_tokens_and_logout_clears_them() {
        let (gateway, _) = gateway(
            MockTransport::new(vec![Ok(json!({"message": "Logged out"}))]),
            MockAuth::failing(),
            SessionStore::in_memory(),
        );

        let user = gateway
            .login(&Credentials::new("ana@clubinhos.org", "segredo"))
            .await
            .unwrap();
        assert_eq!(user.map(|u| u.name).as_deref(), Some("Ana"));
        assert!(gateway.session().is_authenticated());
        let store = gateway.session().token_store();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("login-access"));
        assert_eq!(store.refresh_token().unwrap().as_deref(), Some("login-refresh"));

        gateway.logout().await;
        assert_eq!(gateway.transport.calls()[0].endpoint, "/auth/logout");
        assert_eq!(
            gateway.transport.calls()[0].bearer.as_deref(),
            Some("login-access")
        );
        assert!(!gateway.session().is_authenticated());
        assert_eq!(store.access_token().unwrap(), None);
        assert_eq!(store.refresh_token().unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_login_leaves_session_untouched() {
        let (gateway, _) = gateway(
            MockTransport::new(vec![]),
            MockAuth::failing(),
            SessionStore::in_memory(),
        );

        let err = gateway
            .login(&Credentials::new("intruso@exemplo.com", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthClientError::InvalidCredentials));
        assert!(!gateway.session().is_authenticated());
    }

    #[tokio::test]
    async fn load_current_user_fills_the_session() {
        let (gateway, _) = gateway(
            MockTransport::new(vec![Ok(json!({
                "id": "u1",
                "name": "Ana",
                "email": "ana@clubinhos.org",
                "role": "admin"
            }))]),
            MockAuth::failing(),
            logged_in_session(),
        );

        let user = gateway.load_current_user().await.unwrap();
        assert!(user.is_admin());
        let session = gateway.session().snapshot();
        assert_eq!(session.current_user, Some(user));
        assert!(!session.is_loading_user);
    }
}
