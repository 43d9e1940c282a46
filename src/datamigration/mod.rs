//! Azure Database Migration Service (`Microsoft.DataMigration`)
//!
//! # Module Structure
//!
//! - [`constants`] - open enums used by the models
//! - [`ids`] - service, project and task identifiers
//! - [`models`] - request and response bodies
//! - [`serviceresource`] - services, SKUs and projects
//! - [`taskresource`] - project tasks and task commands

pub mod constants;
pub mod ids;
pub mod models;
pub mod serviceresource;
pub mod taskresource;

pub use ids::{ProjectId, ServiceId, TaskId};
pub use serviceresource::{
    AvailableServiceSkuOperationPredicate, DeleteOperationOptions, ProjectOperationPredicate, ServiceOperationPredicate,
    ServiceResourceClient,
};
pub use taskresource::{GetOperationOptions, ListOperationOptions, ProjectTaskClient, ProjectTaskOperationPredicate};

pub const API_VERSION: &str = "2021-06-30";
