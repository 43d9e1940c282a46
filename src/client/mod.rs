//! ARM client
//!
//! Shared low-level client every API group executes its operations through.
//! It owns the endpoint, API version, credentials and transport; operation
//! modules only describe requests.
//!
//! # Module Structure
//!
//! - [`http`] - transport seam and the reqwest implementation
//! - [`request`] - request descriptors, execution and status checking
//! - [`pager`] - `nextLink` pagination
//! - [`poller`] - long-running operation polling
//! - [`predicate`] - client-side list filtering
//! - [`odata`] - OData annotations on responses

pub mod http;
pub mod odata;
pub mod pager;
pub mod poller;
pub mod predicate;
pub mod request;

pub use http::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use odata::OData;
pub use pager::{ListCompleteResult, Pager};
pub use poller::{LongRunningResponse, Poller, PollingStatus};
pub use predicate::{MatchAll, Predicate};
pub use request::{NoOptions, OperationOptions, Request, RequestOptions, Response};

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("azrm/", env!("CARGO_PKG_VERSION"));

const CLIENT_REQUEST_ID: &str = "x-ms-client-request-id";

/// Settings shared by every API group client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: String,
    /// Bearer token sent as-is; this crate never acquires one
    pub token: Option<String>,
    pub user_agent: String,
    /// Wait between polls when the service sends no `Retry-After`
    pub poll_interval: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Low-level ARM client
#[derive(Clone)]
pub struct ArmClient {
    transport: Arc<dyn Transport>,
    endpoint: Url,
    api_version: String,
    token: Option<String>,
    user_agent: String,
    poll_interval: Duration,
}

impl ArmClient {
    /// Create a client backed by reqwest
    pub fn new(options: ClientOptions) -> Result<Self> {
        let transport = ReqwestTransport::new(&options.user_agent)?;
        Self::with_transport(Arc::new(transport), options)
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>, options: ClientOptions) -> Result<Self> {
        let endpoint = Url::parse(&options.endpoint)?;
        Ok(Self {
            transport,
            endpoint,
            api_version: String::new(),
            token: options.token,
            user_agent: options.user_agent,
            poll_interval: options.poll_interval,
        })
    }

    /// A copy of this client pinned to `api_version`, sharing the transport
    pub fn with_api_version(&self, api_version: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            ..self.clone()
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Build a request from its descriptor. The `api-version` query
    /// parameter is always present.
    pub fn new_request<'c>(&'c self, options: RequestOptions<'_>) -> Result<Request<'c>> {
        let mut url = self.endpoint.join(&options.path)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api-version", &self.api_version);
            if let Some(extra) = options.options {
                for (key, value) in extra.to_query() {
                    query.append_pair(key, &value);
                }
            }
        }

        let mut headers = self.base_headers(options.content_type)?;
        if let Some(extra) = options.options {
            for (key, value) in extra.to_headers() {
                let name = HeaderName::from_bytes(key.as_bytes())?;
                headers.insert(name, HeaderValue::from_str(&value)?);
            }
        }

        let http = HttpRequest {
            method: options.http_method,
            url,
            headers,
            body: None,
        };
        Ok(Request::new(self, http, options.expected_status_codes, options.pager))
    }

    /// GET request for a polling or paging link
    pub(crate) fn link_request(&self, url: Url) -> Result<HttpRequest> {
        let headers = self.base_headers(request::JSON_CONTENT_TYPE)?;
        Ok(HttpRequest::get(url, headers))
    }

    /// Resolve a link the service returned, relative links against the endpoint
    pub(crate) fn resolve_link(&self, link: &str) -> Result<Url> {
        match Url::parse(link) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.endpoint.join(link)?),
            Err(e) => Err(e.into()),
        }
    }

    /// Send through the transport, aborting as soon as `ctx` is cancelled
    pub async fn send(&self, request: HttpRequest, ctx: &CancellationToken) -> Result<HttpResponse> {
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let line = format!("{} {}", request.method, request.url);
        tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                tracing::debug!("Cancelled {}", line);
                Err(Error::Cancelled)
            },
            result = self.transport.send(request) => result,
        }
    }

    fn base_headers(&self, content_type: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        headers.insert(
            HeaderName::from_static(CLIENT_REQUEST_ID),
            HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())?,
        );
        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use reqwest::{Method, StatusCode};

    struct Echo;

    impl Transport for Echo {
        fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
            Box::pin(async move {
                Ok(HttpResponse {
                    status: StatusCode::OK,
                    headers: request.headers.clone(),
                    body: String::new(),
                    method: request.method,
                    url: request.url,
                })
            })
        }
    }

    struct Expand(&'static str);

    impl OperationOptions for Expand {
        fn to_query(&self) -> Vec<(&'static str, String)> {
            vec![("$expand", self.0.to_string())]
        }

        fn to_headers(&self) -> Vec<(&'static str, String)> {
            vec![("x-ms-test", "1".to_string())]
        }
    }

    fn client() -> ArmClient {
        let options = ClientOptions {
            token: Some("secret".to_string()),
            ..ClientOptions::default()
        };
        ArmClient::with_transport(Arc::new(Echo), options)
            .unwrap()
            .with_api_version("2021-06-30")
    }

    #[test]
    fn new_request_sets_api_version_and_options() {
        let client = client();
        let expand = Expand("output");
        let request = client
            .new_request(
                RequestOptions::new(Method::GET, "/subscriptions/sub1", &[StatusCode::OK]).with_options(&expand),
            )
            .unwrap();

        assert_eq!(
            request.http.url.as_str(),
            "https://management.azure.com/subscriptions/sub1?api-version=2021-06-30&%24expand=output"
        );
        let headers = &request.http.headers;
        assert_eq!(headers[CONTENT_TYPE], "application/json; charset=utf-8");
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert_eq!(headers["x-ms-test"], "1");
        assert!(headers.contains_key(CLIENT_REQUEST_ID));
    }

    #[test]
    fn relative_links_resolve_against_endpoint() {
        let client = client();
        assert_eq!(
            client.resolve_link("/subscriptions/sub1?page=2").unwrap().as_str(),
            "https://management.azure.com/subscriptions/sub1?page=2"
        );
        assert_eq!(
            client.resolve_link("https://other.example/next").unwrap().as_str(),
            "https://other.example/next"
        );
    }

    #[tokio::test]
    async fn send_refuses_cancelled_context() {
        let client = client();
        let ctx = CancellationToken::new();
        ctx.cancel();
        let request = client
            .new_request(RequestOptions::new(Method::GET, "/subscriptions/sub1", &[StatusCode::OK]))
            .unwrap();
        let err = request.execute(&ctx).await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
