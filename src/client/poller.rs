//! Long-running operation polling
//!
//! Mutating ARM calls may answer before the work is finished. The initial
//! response decides how completion is tracked:
//!
//! 1. an `Azure-AsyncOperation` header points at an operation status resource
//! 2. a `Location` header points at a URL answering `202` until done
//! 3. a `PUT`/`PATCH` body carrying `properties.provisioningState` is re-read
//!    from the resource itself
//! 4. anything else that succeeded is already done

use super::http::HttpResponse;
use super::odata::OData;
use super::request::{check_status, ErrorDetail};
use super::ArmClient;
use crate::error::{Error, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

const ASYNC_OPERATION_HEADER: &str = "Azure-AsyncOperation";
const LOCATION_HEADER: &str = "Location";
const RETRY_AFTER_HEADER: &str = "Retry-After";

/// Where a long-running operation stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollingStatus {
    InProgress,
    Succeeded,
    Failed,
    Cancelled,
}

impl PollingStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Map a service status string; anything unrecognised is still running
    fn from_service(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "canceled" | "cancelled" => Self::Cancelled,
            _ => Self::InProgress,
        }
    }
}

impl fmt::Display for PollingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "InProgress",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Strategy {
    Done,
    AsyncOperation(Url),
    Location(Url),
    ProvisioningState(Url),
}

#[derive(Debug, Default, Deserialize)]
struct OperationStatus {
    status: Option<String>,
    error: Option<ErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
struct ProvisioningEnvelope {
    properties: Option<ProvisioningProperties>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProvisioningProperties {
    provisioning_state: Option<String>,
}

fn provisioning_state(body: &str) -> Option<String> {
    serde_json::from_str::<ProvisioningEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.properties)
        .and_then(|properties| properties.provisioning_state)
}

fn retry_after(response: &HttpResponse) -> Option<Duration> {
    response
        .header(RETRY_AFTER_HEADER)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

/// Drives a long-running operation to a terminal state
#[derive(Clone)]
pub struct Poller {
    client: ArmClient,
    strategy: Strategy,
    status: PollingStatus,
    interval: Duration,
    latest_response: HttpResponse,
    /// Resource to re-read once an operation status resource reports success
    final_url: Option<Url>,
    failure: Option<ErrorDetail>,
}

impl fmt::Debug for Poller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poller")
            .field("strategy", &self.strategy)
            .field("status", &self.status)
            .field("interval", &self.interval)
            .finish()
    }
}

impl Poller {
    /// Choose a polling strategy for the initial response of an operation
    pub fn from_response(response: HttpResponse, client: &ArmClient) -> Result<Self> {
        let interval = retry_after(&response).unwrap_or_else(|| client.poll_interval());
        let writes_resource = matches!(response.method, Method::PUT | Method::PATCH);
        let mut final_url = None;

        let (strategy, status) = if let Some(link) = response.header(ASYNC_OPERATION_HEADER) {
            if writes_resource {
                final_url = Some(response.url.clone());
            }
            (Strategy::AsyncOperation(client.resolve_link(link)?), PollingStatus::InProgress)
        } else if let Some(link) = response.header(LOCATION_HEADER) {
            (Strategy::Location(client.resolve_link(link)?), PollingStatus::InProgress)
        } else if writes_resource && matches!(response.status, StatusCode::OK | StatusCode::CREATED) {
            match provisioning_state(&response.body).map(|state| PollingStatus::from_service(&state)) {
                Some(PollingStatus::InProgress) => (
                    Strategy::ProvisioningState(response.url.clone()),
                    PollingStatus::InProgress,
                ),
                Some(terminal) => (Strategy::Done, terminal),
                None => (Strategy::Done, PollingStatus::Succeeded),
            }
        } else if matches!(
            response.status,
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT
        ) {
            (Strategy::Done, PollingStatus::Succeeded)
        } else {
            return Err(Error::Poller(format!(
                "no polling information in {} response to {} {}",
                response.status, response.method, response.url
            )));
        };

        tracing::debug!(
            "Polling {} {} via {:?} every {:?}",
            response.method,
            response.url,
            strategy,
            interval
        );

        Ok(Self {
            client: client.clone(),
            strategy,
            status,
            interval,
            latest_response: response,
            final_url,
            failure: None,
        })
    }

    pub fn status(&self) -> PollingStatus {
        self.status
    }

    /// The most recent response seen while polling
    pub fn latest_response(&self) -> &HttpResponse {
        &self.latest_response
    }

    /// Decode the latest response body, e.g. the final resource after a PUT
    pub fn final_model<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.latest_response.unmarshal_optional()
    }

    pub fn odata(&self) -> Option<OData> {
        OData::from_response(&self.latest_response)
    }

    /// Check the operation once and update the status
    pub async fn poll(&mut self, ctx: &CancellationToken) -> Result<PollingStatus> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        match self.strategy.clone() {
            Strategy::Done => {},
            Strategy::AsyncOperation(url) => self.poll_async_operation(url, ctx).await?,
            Strategy::Location(url) => self.poll_location(url, ctx).await?,
            Strategy::ProvisioningState(url) => self.poll_provisioning_state(url, ctx).await?,
        }

        if self.status.is_terminal() {
            self.strategy = Strategy::Done;
        }
        Ok(self.status)
    }

    /// Poll until the operation finishes, sleeping between polls
    pub async fn poll_until_done(&mut self, ctx: &CancellationToken) -> Result<()> {
        while !self.status.is_terminal() {
            tokio::select! {
                biased;
                _ = ctx.cancelled() => return Err(Error::Cancelled),
                _ = tokio::time::sleep(self.interval) => {},
            }
            self.poll(ctx).await?;
        }

        match self.status {
            PollingStatus::Succeeded => Ok(()),
            status => {
                let failure = self.failure.take().unwrap_or_default();
                Err(Error::OperationFailed {
                    status: status.to_string(),
                    code: failure.code,
                    message: failure.message,
                })
            },
        }
    }

    async fn get(&mut self, url: Url, expected: &[StatusCode], ctx: &CancellationToken) -> Result<HttpResponse> {
        let request = self.client.link_request(url)?;
        let response = check_status(expected, self.client.send(request, ctx).await?)?;
        if let Some(interval) = retry_after(&response) {
            self.interval = interval;
        }
        Ok(response)
    }

    async fn poll_async_operation(&mut self, url: Url, ctx: &CancellationToken) -> Result<()> {
        let response = self
            .get(url, &[StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED], ctx)
            .await?;
        let operation: OperationStatus = response.unmarshal()?;
        let status = operation
            .status
            .as_deref()
            .map(PollingStatus::from_service)
            .unwrap_or(PollingStatus::InProgress);

        match status {
            PollingStatus::Succeeded => {
                self.latest_response = match self.final_url.clone() {
                    Some(final_url) => self.get(final_url, &[StatusCode::OK], ctx).await?,
                    None => response,
                };
            },
            PollingStatus::Failed | PollingStatus::Cancelled => {
                tracing::warn!("Long-running operation finished as {}", status);
                self.failure = operation.error;
                self.latest_response = response;
            },
            PollingStatus::InProgress => self.latest_response = response,
        }
        self.status = status;
        Ok(())
    }

    async fn poll_location(&mut self, url: Url, ctx: &CancellationToken) -> Result<()> {
        let response = self
            .get(
                url,
                &[StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED, StatusCode::NO_CONTENT],
                ctx,
            )
            .await?;
        self.status = if response.status == StatusCode::ACCEPTED {
            PollingStatus::InProgress
        } else {
            PollingStatus::Succeeded
        };
        self.latest_response = response;
        Ok(())
    }

    async fn poll_provisioning_state(&mut self, url: Url, ctx: &CancellationToken) -> Result<()> {
        let response = self.get(url, &[StatusCode::OK], ctx).await?;
        self.status = provisioning_state(&response.body)
            .map(|state| PollingStatus::from_service(&state))
            .unwrap_or(PollingStatus::Succeeded);
        if matches!(self.status, PollingStatus::Failed | PollingStatus::Cancelled) {
            tracing::warn!("Resource provisioning finished as {}", self.status);
        }
        self.latest_response = response;
        Ok(())
    }
}

/// Outcome of submitting a long-running operation
#[derive(Debug, Clone)]
pub struct LongRunningResponse<T> {
    pub poller: Poller,
    pub http_response: HttpResponse,
    pub odata: Option<OData>,
    pub model: Option<T>,
}

impl<T> LongRunningResponse<T> {
    /// Response for operations whose body is ignored, such as deletes
    pub fn without_model(http_response: HttpResponse, client: &ArmClient) -> Result<Self> {
        let odata = OData::from_response(&http_response);
        let poller = Poller::from_response(http_response.clone(), client)?;
        Ok(Self {
            poller,
            http_response,
            odata,
            model: None,
        })
    }
}

impl<T: DeserializeOwned> LongRunningResponse<T> {
    pub fn from_http(http_response: HttpResponse, client: &ArmClient) -> Result<Self> {
        let odata = OData::from_response(&http_response);
        let model = http_response.unmarshal_optional()?;
        let poller = Poller::from_response(http_response.clone(), client)?;
        Ok(Self {
            poller,
            http_response,
            odata,
            model,
        })
    }
}
