//! HTTP transport for ARM REST calls

use crate::error::Result;
use futures::future::BoxFuture;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
pub fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut cut = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// A fully built request, ready for the transport
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: Url, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url,
            headers,
            body: None,
        }
    }
}

/// Raw response, along with the request line that produced it
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
    pub method: Method,
    pub url: Url,
}

impl HttpResponse {
    /// Read a header as a string, ignoring empty and non-ASCII values
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
    }

    /// Decode the body into `T`
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(crate::Error::decode::<T>)
    }

    /// Decode the body into `T`, treating an empty body as no model
    pub fn unmarshal_optional<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        self.unmarshal().map(Some)
    }
}

/// Low-level client the operation layer executes requests through.
///
/// Implementations only move bytes: status checking, paging and polling
/// happen above this seam.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>>;
}

/// [`Transport`] backed by reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new HTTP transport
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        Box::pin(async move {
            let HttpRequest {
                method,
                url,
                headers,
                body,
            } = request;
            tracing::debug!("{} {}", method, url);

            let mut builder = self.client.request(method.clone(), url.clone()).headers(headers);
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.text().await?;

            if !status.is_success() {
                tracing::debug!("{} {} returned {} - {}", method, url, status, sanitize_for_log(&body));
            }

            Ok(HttpResponse {
                status,
                headers,
                body,
                method,
                url,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(200)));
        assert!(sanitized.ends_with("[truncated, 500 bytes total]"));
    }

    #[test]
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("line\none\ttab"), "lineonetab");
    }

    #[test]
    fn sanitize_respects_char_boundaries() {
        let body = format!("{}é{}", "a".repeat(199), "b".repeat(100));
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"a".repeat(199)));
    }

    #[test]
    fn optional_unmarshal_treats_empty_body_as_none() {
        let response = HttpResponse {
            status: StatusCode::NO_CONTENT,
            headers: HeaderMap::new(),
            body: String::new(),
            method: Method::DELETE,
            url: Url::parse("https://management.azure.com/x").unwrap(),
        };
        let model: Option<serde_json::Value> = response.unmarshal_optional().unwrap();
        assert!(model.is_none());
    }
}
