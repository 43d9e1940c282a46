//! Error types
//!
//! Every layer wraps the error it received and re-raises it; nothing in this
//! crate retries on its own.

use crate::resourceids::ParseError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed before a response was received
    #[error("sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("building request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("building request headers: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("building request headers: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// The service answered with a status code the operation does not accept
    #[error(
        "unexpected status {} ({status}) with {}",
        .status.as_u16(),
        describe_arm_error(.code.as_deref(), .message.as_deref(), .body)
    )]
    UnexpectedStatus {
        status: StatusCode,
        code: Option<String>,
        message: Option<String>,
        body: String,
    },

    #[error("unmarshaling into {target}: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("marshaling {target}: {source}")]
    Encode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    ResourceId(#[from] ParseError),

    /// Submitting an operation failed
    #[error("performing {operation}: {source}")]
    Performing {
        operation: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// Driving a long-running operation to completion failed
    #[error("polling after {operation}: {source}")]
    Polling {
        operation: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// The long-running operation reached a failed or cancelled terminal state
    #[error("long-running operation {status}: {}", describe_arm_error(.code.as_deref(), .message.as_deref(), ""))]
    OperationFailed {
        status: String,
        code: Option<String>,
        message: Option<String>,
    },

    #[error("building poller: {0}")]
    Poller(String),

    #[error("loading results: {0}")]
    Loading(#[source] Box<Error>),

    #[error("the operation was cancelled")]
    Cancelled,
}

impl Error {
    pub fn performing(operation: &'static str, source: Error) -> Self {
        Self::Performing {
            operation,
            source: Box::new(source),
        }
    }

    pub fn polling(operation: &'static str, source: Error) -> Self {
        Self::Polling {
            operation,
            source: Box::new(source),
        }
    }

    pub fn loading(source: Error) -> Self {
        Self::Loading(Box::new(source))
    }

    pub fn decode<T: ?Sized>(source: serde_json::Error) -> Self {
        Self::Decode {
            target: std::any::type_name::<T>(),
            source,
        }
    }

    pub fn encode<T: ?Sized>(source: serde_json::Error) -> Self {
        Self::Encode {
            target: std::any::type_name::<T>(),
            source,
        }
    }

    /// Status code of the response that caused this error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Performing { source, .. } | Self::Polling { source, .. } | Self::Loading(source) => {
                source.status()
            },
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Performing { source, .. } | Self::Polling { source, .. } | Self::Loading(source) => {
                source.is_cancelled()
            },
            _ => false,
        }
    }
}

fn describe_arm_error(code: Option<&str>, message: Option<&str>, body: &str) -> String {
    match (code, message) {
        (Some(code), Some(message)) => format!("error: {}: {}", code, message),
        (Some(code), None) => format!("error: {}", code),
        (None, Some(message)) => format!("error: {}", message),
        (None, None) if body.is_empty() => "no error body".to_string(),
        (None, None) => format!("body: {}", crate::client::http::sanitize_for_log(body)),
    }
}
