//! Request building and execution

use super::http::{sanitize_for_log, HttpRequest, HttpResponse};
use super::odata::OData;
use super::pager::{decode_values, Pager};
use super::ArmClient;
use crate::error::{Error, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Per-operation options that turn into headers or query parameters
pub trait OperationOptions: Send + Sync {
    fn to_headers(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Options with nothing to send
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOptions;

impl OperationOptions for NoOptions {}

/// Describes one REST call before it is built
pub struct RequestOptions<'a> {
    pub content_type: &'static str,
    pub expected_status_codes: Vec<StatusCode>,
    pub http_method: Method,
    pub options: Option<&'a dyn OperationOptions>,
    pub pager: Option<Pager>,
    pub path: String,
}

impl<'a> RequestOptions<'a> {
    pub fn new(http_method: Method, path: impl Into<String>, expected_status_codes: &[StatusCode]) -> Self {
        Self {
            content_type: JSON_CONTENT_TYPE,
            expected_status_codes: expected_status_codes.to_vec(),
            http_method,
            options: None,
            pager: None,
            path: path.into(),
        }
    }

    pub fn with_options(mut self, options: &'a dyn OperationOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Follow `nextLink` until the last page
    pub fn paged(mut self) -> Self {
        self.pager = Some(Pager::default());
        self
    }
}

/// A built request bound to the client that will execute it
pub struct Request<'c> {
    client: &'c ArmClient,
    pub http: HttpRequest,
    expected_status_codes: Vec<StatusCode>,
    pager: Option<Pager>,
}

impl<'c> Request<'c> {
    pub(crate) fn new(
        client: &'c ArmClient,
        http: HttpRequest,
        expected_status_codes: Vec<StatusCode>,
        pager: Option<Pager>,
    ) -> Self {
        Self {
            client,
            http,
            expected_status_codes,
            pager,
        }
    }

    /// Encode `body` as the JSON request payload
    pub fn marshal<T: Serialize>(&mut self, body: &T) -> Result<()> {
        let bytes = serde_json::to_vec(body).map_err(Error::encode::<T>)?;
        self.http.body = Some(bytes);
        Ok(())
    }

    /// Send the request once and check the status code
    pub async fn execute(self, ctx: &CancellationToken) -> Result<HttpResponse> {
        let response = self.client.send(self.http, ctx).await?;
        check_status(&self.expected_status_codes, response)
    }

    /// Send the request and every follow-up page, returning the last response
    /// with its body replaced by all items merged under the value field
    pub async fn execute_paged(self, ctx: &CancellationToken) -> Result<HttpResponse> {
        let Request {
            client,
            http,
            expected_status_codes,
            pager,
        } = self;
        let pager = pager.unwrap_or_default();

        let mut response = check_status(&expected_status_codes, client.send(http, ctx).await?)?;
        let mut items = Vec::new();

        loop {
            let page = pager.read_page(&response.body)?;
            items.extend(page.items);

            let Some(link) = page.next_link else {
                break;
            };
            let url = client.resolve_link(&link)?;
            tracing::debug!("Following next link {}", url);

            let next = client.link_request(url)?;
            response = check_status(&expected_status_codes, client.send(next, ctx).await?)?;
        }

        response.body = pager.merged_body(items);
        Ok(response)
    }
}

/// Outcome of a successful operation
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub http_response: HttpResponse,
    pub odata: Option<OData>,
    pub model: Option<T>,
}

impl<T: DeserializeOwned> Response<T> {
    /// Decode the body, if any, into the model
    pub fn from_http(http_response: HttpResponse) -> Result<Self> {
        let odata = OData::from_response(&http_response);
        let model = http_response.unmarshal_optional()?;
        Ok(Self {
            http_response,
            odata,
            model,
        })
    }

    /// Response with no model, for operations whose body is ignored
    pub fn without_model(http_response: HttpResponse) -> Self {
        let odata = OData::from_response(&http_response);
        Self {
            http_response,
            odata,
            model: None,
        }
    }
}

impl<T: DeserializeOwned> Response<Vec<T>> {
    /// Decode the merged items of a paged response
    pub fn from_paged(http_response: HttpResponse) -> Result<Self> {
        let odata = OData::from_response(&http_response);
        let model = decode_values(&http_response)?;
        Ok(Self {
            http_response,
            odata,
            model: Some(model),
        })
    }
}

/// ARM error envelope: `{"error": {"code": ..., "message": ...}}`, with some
/// services answering the inner object directly
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
}

pub(crate) fn parse_arm_error(body: &str) -> ErrorDetail {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return ErrorDetail::default();
    };
    match envelope.error {
        Some(detail) => detail,
        None => ErrorDetail {
            code: envelope.code,
            message: envelope.message,
        },
    }
}

pub(crate) fn check_status(expected: &[StatusCode], response: HttpResponse) -> Result<HttpResponse> {
    if expected.contains(&response.status) {
        return Ok(response);
    }

    tracing::error!(
        "API error: {} {} returned {} - {}",
        response.method,
        response.url,
        response.status,
        sanitize_for_log(&response.body)
    );

    let detail = parse_arm_error(&response.body);
    Err(Error::UnexpectedStatus {
        status: response.status,
        code: detail.code,
        message: detail.message,
        body: response.body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use url::Url;

    fn response(status: StatusCode, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: body.to_string(),
            method: Method::GET,
            url: Url::parse("https://management.azure.com/x").unwrap(),
        }
    }

    #[test]
    fn expected_status_passes_through() {
        let ok = check_status(&[StatusCode::OK], response(StatusCode::OK, "{}")).unwrap();
        assert_eq!(ok.body, "{}");
    }

    #[test]
    fn unexpected_status_reads_error_envelope() {
        let err = check_status(
            &[StatusCode::OK],
            response(
                StatusCode::NOT_FOUND,
                r#"{"error":{"code":"ResourceNotFound","message":"gone"}}"#,
            ),
        )
        .unwrap_err();

        match err {
            Error::UnexpectedStatus { status, code, message, .. } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(code.as_deref(), Some("ResourceNotFound"));
                assert_eq!(message.as_deref(), Some("gone"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn flat_error_bodies_are_understood() {
        let detail = parse_arm_error(r#"{"code":"Conflict","message":"busy"}"#);
        assert_eq!(detail.code.as_deref(), Some("Conflict"));
        assert_eq!(detail.message.as_deref(), Some("busy"));

        let detail = parse_arm_error("<html>bad gateway</html>");
        assert!(detail.code.is_none());
    }

    #[test]
    fn paged_response_decodes_merged_values() {
        let resp = response(StatusCode::OK, r#"{"value":[{"a":1},{"a":2}]}"#);
        let decoded: Response<Vec<serde_json::Value>> = Response::from_paged(resp).unwrap();
        assert_eq!(decoded.model.unwrap().len(), 2);
    }
}
