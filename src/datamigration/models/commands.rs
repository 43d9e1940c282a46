use super::{ODataError, ReportableException};
use crate::datamigration::constants::CommandState;
use crate::polymorphic::discriminated_union;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

discriminated_union! {
    /// A command issued against a running task
    pub enum CommandProperties("commandType") {
        MigrateSyncComplete(MigrateSyncCompleteCommandProperties) => "Migrate.Sync.Complete.Database",
        MigrateMiSyncComplete(MigrateMiSyncCompleteCommandProperties) => "Migrate.SqlServer.AzureDbSqlMi.Complete",
        MongoDbCancel(MongoDbCancelCommand) => "cancel",
        MongoDbFinish(MongoDbFinishCommand) => "finish",
        MongoDbRestart(MongoDbRestartCommand) => "restart",
    }
    raw: RawCommandProperties,
    decoder: unmarshal_command_properties_implementation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseCommandProperties {
    #[serde(default)]
    pub command_type: String,
    pub errors: Option<Vec<ODataError>>,
    pub state: Option<CommandState>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawCommandProperties {
    pub base: BaseCommandProperties,
    pub values: Map<String, Value>,
}

impl CommandProperties {
    pub fn base(&self) -> BaseCommandProperties {
        let (errors, state) = match self {
            Self::MigrateSyncComplete(v) => (&v.errors, &v.state),
            Self::MigrateMiSyncComplete(v) => (&v.errors, &v.state),
            Self::MongoDbCancel(v) => (&v.errors, &v.state),
            Self::MongoDbFinish(v) => (&v.errors, &v.state),
            Self::MongoDbRestart(v) => (&v.errors, &v.state),
            Self::Raw(raw) => return raw.base.clone(),
        };
        BaseCommandProperties {
            command_type: self.tag().to_string(),
            errors: errors.clone(),
            state: state.clone(),
        }
    }

    pub fn state(&self) -> Option<CommandState> {
        self.base().state
    }
}

/// Completes an online (sync) database migration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "commandType", rename = "Migrate.Sync.Complete.Database", rename_all = "camelCase")]
pub struct MigrateSyncCompleteCommandProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MigrateSyncCompleteCommandInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<MigrateSyncCompleteCommandOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CommandState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateSyncCompleteCommandInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_time_stamp: Option<String>,
    pub database_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateSyncCompleteCommandOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ReportableException>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Completes an online migration to a managed instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "commandType",
    rename = "Migrate.SqlServer.AzureDbSqlMi.Complete",
    rename_all = "camelCase"
)]
pub struct MigrateMiSyncCompleteCommandProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MigrateMiSyncCompleteCommandInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<MigrateMiSyncCompleteCommandOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CommandState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateMiSyncCompleteCommandInput {
    pub source_database_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateMiSyncCompleteCommandOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ReportableException>>,
}

/// Names the MongoDB database or collection a command applies to; empty
/// means the whole migration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbCommandInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "commandType", rename = "cancel", rename_all = "camelCase")]
pub struct MongoDbCancelCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MongoDbCommandInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CommandState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbFinishCommandInput {
    /// Stop replication immediately instead of waiting for it to catch up
    pub immediate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "commandType", rename = "finish", rename_all = "camelCase")]
pub struct MongoDbFinishCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MongoDbFinishCommandInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CommandState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "commandType", rename = "restart", rename_all = "camelCase")]
pub struct MongoDbRestartCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MongoDbCommandInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CommandState>,
}
