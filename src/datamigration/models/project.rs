use super::{parse_timestamp, ConnectionInfo};
use crate::datamigration::constants::{ProjectProvisioningState, ProjectSourcePlatform, ProjectTargetPlatform};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A migration project grouping tasks under a service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ProjectProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases_info: Option<Vec<DatabaseInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProjectProvisioningState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_connection_info: Option<ConnectionInfo>,
    pub source_platform: ProjectSourcePlatform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_connection_info: Option<ConnectionInfo>,
    pub target_platform: ProjectTargetPlatform,
}

impl ProjectProperties {
    pub fn creation_time_as_time(&self) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        parse_timestamp(&self.creation_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseInfo {
    pub source_database_name: String,
}
