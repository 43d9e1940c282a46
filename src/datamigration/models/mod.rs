//! Data Migration request and response bodies
//!
//! # Module Structure
//!
//! - [`service`] - services, SKUs and status
//! - [`project`] - projects
//! - [`connection_info`] - the `type`-tagged connection union
//! - [`commands`] - the `commandType`-tagged command union
//! - [`tasks`] - tasks and the `taskType`-tagged properties union
//! - [`task_outputs`] - `resultType`-tagged task outputs

pub mod commands;
pub mod connection_info;
pub mod project;
pub mod service;
pub mod task_outputs;
pub mod tasks;

pub use commands::*;
pub use connection_info::*;
pub use project::*;
pub use service::*;
pub use task_outputs::*;
pub use tasks::*;

pub(crate) use crate::dates::parse_timestamp;
use serde::{Deserialize, Serialize};

/// Error information in OData format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ODataError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Exception raised while migrating an object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportableException {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_result: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}
