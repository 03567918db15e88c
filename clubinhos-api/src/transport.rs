use crate::{send_with_timeout, ClubinhosApiError, Client};
use serde::de::DeserializeOwned;
use std::future::Future;
use tower_api_client::Request as ApiRequest;

/// Something that can put a request on the wire with an optional bearer token.
///
/// `Client` is the production implementation; tests script responses instead.
pub trait Transport: Send + Sync {
    fn dispatch<R>(
        &self,
        request: R,
        bearer: Option<&str>,
    ) -> impl Future<Output = Result<R::Response, ClubinhosApiError>> + Send
    where
        R: ApiRequest + Send + Sync,
        R::Response: DeserializeOwned + Send;
}

impl Transport for Client {
    fn dispatch<R>(
        &self,
        request: R,
        bearer: Option<&str>,
    ) -> impl Future<Output = Result<R::Response, ClubinhosApiError>> + Send
    where
        R: ApiRequest + Send + Sync,
        R::Response: DeserializeOwned + Send,
    {
        send_with_timeout(self.authorized(bearer), self.timeout, request)
    }
}
