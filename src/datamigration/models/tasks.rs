use super::{
    parse_timestamp, CommandProperties, ConnectToSourceSqlServerTaskOutput, MigrateSqlServerSqlDbTaskOutput,
    MongoDbConnectionInfo, MongoDbProgress, ODataError, ReportableException, SqlConnectionInfo,
};
use crate::datamigration::constants::{
    MongoDbClusterType, MongoDbReplication, MongoDbShardKeyOrder, ServerLevelPermissionsGroup, TaskState,
};
use crate::polymorphic::discriminated_union;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A task inside a Data Migration project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ProjectTaskProperties>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

impl ProjectTask {
    pub fn state(&self) -> Option<TaskState> {
        self.properties.as_ref().and_then(ProjectTaskProperties::state)
    }
}

discriminated_union! {
    /// Task-specific input, output and state
    pub enum ProjectTaskProperties("taskType") {
        ConnectToSourceSqlServer(ConnectToSourceSqlServerTaskProperties) => "ConnectToSource.SqlServer",
        ConnectToSourceMongoDb(ConnectToMongoDbTaskProperties) => "ConnectToSource.MongoDb",
        ConnectToTargetSqlDb(ConnectToTargetSqlDbTaskProperties) => "ConnectToTarget.SqlDb",
        GetUserTablesSql(GetUserTablesSqlTaskProperties) => "GetUserTables.Sql",
        MigrateSqlServerSqlDb(MigrateSqlServerSqlDbTaskProperties) => "Migrate.SqlServer.SqlDb",
        MigrateMongoDb(MigrateMongoDbTaskProperties) => "Migrate.MongoDb",
        CheckOciDriver(CheckOciDriverTaskProperties) => "Service.Check.OCI",
        UploadOciDriver(UploadOciDriverTaskProperties) => "Service.Upload.OCI",
    }
    raw: RawProjectTaskProperties,
    decoder: unmarshal_project_task_properties_implementation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseProjectTaskProperties {
    pub client_data: Option<HashMap<String, String>>,
    pub commands: Option<Vec<CommandProperties>>,
    pub errors: Option<Vec<ODataError>>,
    pub state: Option<TaskState>,
    #[serde(default)]
    pub task_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawProjectTaskProperties {
    pub base: BaseProjectTaskProperties,
    pub values: Map<String, Value>,
}

impl ProjectTaskProperties {
    pub fn base(&self) -> BaseProjectTaskProperties {
        let (client_data, commands, errors, state) = match self {
            Self::ConnectToSourceSqlServer(v) => (&v.client_data, &v.commands, &v.errors, &v.state),
            Self::ConnectToSourceMongoDb(v) => (&v.client_data, &v.commands, &v.errors, &v.state),
            Self::ConnectToTargetSqlDb(v) => (&v.client_data, &v.commands, &v.errors, &v.state),
            Self::GetUserTablesSql(v) => (&v.client_data, &v.commands, &v.errors, &v.state),
            Self::MigrateSqlServerSqlDb(v) => (&v.client_data, &v.commands, &v.errors, &v.state),
            Self::MigrateMongoDb(v) => (&v.client_data, &v.commands, &v.errors, &v.state),
            Self::CheckOciDriver(v) => (&v.client_data, &v.commands, &v.errors, &v.state),
            Self::UploadOciDriver(v) => (&v.client_data, &v.commands, &v.errors, &v.state),
            Self::Raw(raw) => return raw.base.clone(),
        };
        BaseProjectTaskProperties {
            client_data: client_data.clone(),
            commands: commands.clone(),
            errors: errors.clone(),
            state: state.clone(),
            task_type: self.tag().to_string(),
        }
    }

    pub fn state(&self) -> Option<TaskState> {
        match self {
            Self::ConnectToSourceSqlServer(v) => v.state.clone(),
            Self::ConnectToSourceMongoDb(v) => v.state.clone(),
            Self::ConnectToTargetSqlDb(v) => v.state.clone(),
            Self::GetUserTablesSql(v) => v.state.clone(),
            Self::MigrateSqlServerSqlDb(v) => v.state.clone(),
            Self::MigrateMongoDb(v) => v.state.clone(),
            Self::CheckOciDriver(v) => v.state.clone(),
            Self::UploadOciDriver(v) => v.state.clone(),
            Self::Raw(raw) => raw.base.state.clone(),
        }
    }
}

// ============================================================================
// ConnectToSource.SqlServer
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskType", rename = "ConnectToSource.SqlServer", rename_all = "camelCase")]
pub struct ConnectToSourceSqlServerTaskProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ConnectToSourceSqlServerTaskInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<ConnectToSourceSqlServerTaskOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectToSourceSqlServerTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_permissions_group: Option<ServerLevelPermissionsGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_agent_jobs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_databases: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_logins: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_tde_certificate_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_key_for_secure_fields: Option<String>,
    pub source_connection_info: SqlConnectionInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_ssis_catalog_only: Option<bool>,
}

// ============================================================================
// ConnectToSource.MongoDb
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskType", rename = "ConnectToSource.MongoDb", rename_all = "camelCase")]
pub struct ConnectToMongoDbTaskProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MongoDbConnectionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<MongoDbClusterInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
}

/// Shape of a MongoDB cluster as seen by the connection check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbClusterInfo {
    pub databases: Vec<MongoDbDatabaseInfo>,
    pub supports_sharding: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<MongoDbClusterType>,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbDatabaseInfo {
    pub average_document_size: i64,
    pub collections: Vec<MongoDbCollectionInfo>,
    pub data_size: i64,
    pub document_count: i64,
    pub name: String,
    pub qualified_name: String,
    pub supports_sharding: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbCollectionInfo {
    pub average_document_size: i64,
    pub data_size: i64,
    pub database_name: String,
    pub document_count: i64,
    pub is_capped: bool,
    pub is_system_collection: bool,
    pub is_view: bool,
    pub name: String,
    pub qualified_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard_key: Option<MongoDbShardKeyInfo>,
    pub supports_sharding: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_of: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbShardKeyInfo {
    pub fields: Vec<MongoDbShardKeyField>,
    pub is_unique: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbShardKeyField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<MongoDbShardKeyOrder>,
}

// ============================================================================
// ConnectToTarget.SqlDb
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskType", rename = "ConnectToTarget.SqlDb", rename_all = "camelCase")]
pub struct ConnectToTargetSqlDbTaskProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ConnectToTargetSqlDbTaskInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<ConnectToTargetSqlDbTaskOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectToTargetSqlDbTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_object_counts: Option<bool>,
    pub target_connection_info: SqlConnectionInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectToTargetSqlDbTaskOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_server_brand_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_server_version: Option<String>,
}

// ============================================================================
// GetUserTables.Sql
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskType", rename = "GetUserTables.Sql", rename_all = "camelCase")]
pub struct GetUserTablesSqlTaskProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<GetUserTablesSqlTaskInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<GetUserTablesSqlTaskOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserTablesSqlTaskInput {
    pub connection_info: SqlConnectionInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_key_for_secure_fields: Option<String>,
    pub selected_databases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserTablesSqlTaskOutput {
    /// Tables per database name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases_to_tables: Option<HashMap<String, Vec<DatabaseTable>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ReportableException>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_rows: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ============================================================================
// Migrate.SqlServer.SqlDb
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskType", rename = "Migrate.SqlServer.SqlDb", rename_all = "camelCase")]
pub struct MigrateSqlServerSqlDbTaskProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MigrateSqlServerSqlDbTaskInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cloneable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<MigrateSqlServerSqlDbTaskOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl MigrateSqlServerSqlDbTaskProperties {
    pub fn created_on_as_time(&self) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        parse_timestamp(&self.created_on)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateSqlServerSqlDbTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_key_for_secure_fields: Option<String>,
    pub selected_databases: Vec<MigrateSqlServerSqlDbDatabaseInput>,
    pub source_connection_info: SqlConnectionInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<String>,
    pub target_connection_info: SqlConnectionInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_options: Option<MigrationValidationOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateSqlServerSqlDbDatabaseInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_source_db_read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form; the service does not publish a schema for it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_setting: Option<Value>,
    /// Source table name to target table name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_map: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_database_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationValidationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_data_integrity_validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_query_analysis_validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_schema_validation: Option<bool>,
}

// ============================================================================
// Migrate.MongoDb
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskType", rename = "Migrate.MongoDb", rename_all = "camelCase")]
pub struct MigrateMongoDbTaskProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MongoDbMigrationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<MongoDbProgress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
}

/// What to copy from one MongoDB deployment to another, and how fast
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbMigrationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_r_us: Option<i64>,
    pub databases: HashMap<String, MongoDbDatabaseSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication: Option<MongoDbReplication>,
    pub source: MongoDbConnectionInfo,
    pub target: MongoDbConnectionInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttling: Option<MongoDbThrottlingSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbDatabaseSettings {
    pub collections: HashMap<String, MongoDbCollectionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_r_us: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbCollectionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard_key: Option<MongoDbShardKeySetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_r_us: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbShardKeySetting {
    pub fields: Vec<MongoDbShardKeyField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbThrottlingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallelism: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_free_cpu: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_free_memory_mb: Option<i64>,
}

// ============================================================================
// Service.Check.OCI / Service.Upload.OCI
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskType", rename = "Service.Check.OCI", rename_all = "camelCase")]
pub struct CheckOciDriverTaskProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<CheckOciDriverTaskInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<CheckOciDriverTaskOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOciDriverTaskInput {
    /// Oracle server version the driver must support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOciDriverTaskOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_driver: Option<OracleOciDriverInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ReportableException>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleOciDriverInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_oracle_versions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "taskType", rename = "Service.Upload.OCI", rename_all = "camelCase")]
pub struct UploadOciDriverTaskProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ODataError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<UploadOciDriverTaskInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<UploadOciDriverTaskOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOciDriverTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_share: Option<FileShare>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileShare {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOciDriverTaskOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ReportableException>>,
}
