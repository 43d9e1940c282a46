//! `resultType`-tagged task outputs

use super::{parse_timestamp, ReportableException};
use crate::datamigration::constants::{
    DatabaseCompatLevel, DatabaseFileType, DatabaseMigrationStage, DatabaseState, LoginType,
    MigrationState, MigrationStatus, MongoDbErrorType, MongoDbMigrationState, ResultType,
    ValidationStatus,
};
use crate::polymorphic::discriminated_union;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// ============================================================================
// ConnectToSource.SqlServer
// ============================================================================

discriminated_union! {
    pub enum ConnectToSourceSqlServerTaskOutput("resultType") {
        TaskLevel(ConnectToSourceSqlServerTaskOutputTaskLevel) => "TaskLevelOutput",
        DatabaseLevel(ConnectToSourceSqlServerTaskOutputDatabaseLevel) => "DatabaseLevelOutput",
        LoginLevel(ConnectToSourceSqlServerTaskOutputLoginLevel) => "LoginLevelOutput",
        AgentJobLevel(ConnectToSourceSqlServerTaskOutputAgentJobLevel) => "AgentJobLevelOutput",
    }
    raw: RawConnectToSourceSqlServerTaskOutput,
    decoder: unmarshal_connect_to_source_sql_server_task_output_implementation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseConnectToSourceSqlServerTaskOutput {
    pub id: Option<String>,
    #[serde(default)]
    pub result_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawConnectToSourceSqlServerTaskOutput {
    pub base: BaseConnectToSourceSqlServerTaskOutput,
    pub values: Map<String, Value>,
}

impl ConnectToSourceSqlServerTaskOutput {
    pub fn base(&self) -> BaseConnectToSourceSqlServerTaskOutput {
        let id = match self {
            Self::TaskLevel(v) => &v.id,
            Self::DatabaseLevel(v) => &v.id,
            Self::LoginLevel(v) => &v.id,
            Self::AgentJobLevel(v) => &v.id,
            Self::Raw(raw) => return raw.base.clone(),
        };
        BaseConnectToSourceSqlServerTaskOutput {
            id: id.clone(),
            result_type: self.tag().to_string(),
        }
    }
}

/// Server-wide summary of a source connection check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "TaskLevelOutput", rename_all = "camelCase")]
pub struct ConnectToSourceSqlServerTaskOutputTaskLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_jobs: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_tde_certificate_mapping: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_server_brand_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ReportableException>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "DatabaseLevelOutput", rename_all = "camelCase")]
pub struct ConnectToSourceSqlServerTaskOutputDatabaseLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility_level: Option<DatabaseCompatLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_files: Option<Vec<DatabaseFileInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_state: Option<DatabaseState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "sizeMB", skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseFileInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<DatabaseFileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_full_name: Option<String>,
    #[serde(rename = "sizeMB", skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationEligibilityInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_eligible_for_migration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_messages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "LoginLevelOutput", rename_all = "camelCase")]
pub struct ConnectToSourceSqlServerTaskOutputLoginLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_type: Option<LoginType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_eligibility: Option<MigrationEligibilityInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "AgentJobLevelOutput", rename_all = "camelCase")]
pub struct ConnectToSourceSqlServerTaskOutputAgentJobLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_executed_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_eligibility: Option<MigrationEligibilityInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ReportableException>>,
}

impl ConnectToSourceSqlServerTaskOutputAgentJobLevel {
    pub fn last_executed_on_as_time(&self) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        parse_timestamp(&self.last_executed_on)
    }
}

// ============================================================================
// Migrate.SqlServer.SqlDb
// ============================================================================

discriminated_union! {
    /// Progress of an offline SQL Server to Azure SQL Database migration,
    /// reported at migration, database and table level
    pub enum MigrateSqlServerSqlDbTaskOutput("resultType") {
        MigrationLevel(MigrateSqlServerSqlDbTaskOutputMigrationLevel) => "MigrationLevelOutput",
        DatabaseLevel(MigrateSqlServerSqlDbTaskOutputDatabaseLevel) => "DatabaseLevelOutput",
        TableLevel(MigrateSqlServerSqlDbTaskOutputTableLevel) => "TableLevelOutput",
        Error(MigrateSqlServerSqlDbTaskOutputError) => "ErrorOutput",
        MigrationValidation(MigrateSqlServerSqlDbTaskOutputValidationResult) => "MigrationValidationOutput",
    }
    raw: RawMigrateSqlServerSqlDbTaskOutput,
    decoder: unmarshal_migrate_sql_server_sql_db_task_output_implementation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMigrateSqlServerSqlDbTaskOutput {
    pub id: Option<String>,
    #[serde(default)]
    pub result_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawMigrateSqlServerSqlDbTaskOutput {
    pub base: BaseMigrateSqlServerSqlDbTaskOutput,
    pub values: Map<String, Value>,
}

impl MigrateSqlServerSqlDbTaskOutput {
    pub fn base(&self) -> BaseMigrateSqlServerSqlDbTaskOutput {
        let id = match self {
            Self::MigrationLevel(v) => &v.id,
            Self::DatabaseLevel(v) => &v.id,
            Self::TableLevel(v) => &v.id,
            Self::Error(v) => &v.id,
            Self::MigrationValidation(v) => &v.id,
            Self::Raw(raw) => return raw.base.clone(),
        };
        BaseMigrateSqlServerSqlDbTaskOutput {
            id: id.clone(),
            result_type: self.tag().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "MigrationLevelOutput", rename_all = "camelCase")]
pub struct MigrateSqlServerSqlDbTaskOutputMigrationLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_summary: Option<HashMap<String, DatabaseSummaryResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions_and_warnings: Option<Vec<ReportableException>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_report_result: Option<MigrationReportResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_server_brand_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MigrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_server_brand_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_server_version: Option<String>,
}

impl MigrateSqlServerSqlDbTaskOutputMigrationLevel {
    pub fn started_on_as_time(&self) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        parse_timestamp(&self.started_on)
    }

    pub fn ended_on_as_time(&self) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        parse_timestamp(&self.ended_on)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReportResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSummaryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_completed_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_prefix: Option<String>,
    #[serde(rename = "sizeMB", skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<DatabaseMigrationStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MigrationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItemMigrationSummaryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_completed_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MigrationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "DatabaseLevelOutput", rename_all = "camelCase")]
pub struct MigrateSqlServerSqlDbTaskOutputDatabaseLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions_and_warnings: Option<Vec<ReportableException>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_objects: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_objects_completed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_summary: Option<HashMap<String, DataItemMigrationSummaryResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<DatabaseMigrationStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MigrationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "TableLevelOutput", rename_all = "camelCase")]
pub struct MigrateSqlServerSqlDbTaskOutputTableLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_completed_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MigrationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "ErrorOutput", rename_all = "camelCase")]
pub struct MigrateSqlServerSqlDbTaskOutputError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportableException>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "MigrationValidationOutput", rename_all = "camelCase")]
pub struct MigrateSqlServerSqlDbTaskOutputValidationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ValidationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_results: Option<HashMap<String, MigrationValidationDatabaseSummaryResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationValidationDatabaseSummaryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ValidationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_database_name: Option<String>,
}

// ============================================================================
// Migrate.MongoDb
// ============================================================================

discriminated_union! {
    /// Progress of a MongoDB migration at migration, database or collection level
    pub enum MongoDbProgress("resultType") {
        Collection(MongoDbCollectionProgress) => "Collection",
        Database(MongoDbDatabaseProgress) => "Database",
        Migration(MongoDbMigrationProgress) => "Migration",
    }
    raw: RawMongoDbProgress,
    decoder: unmarshal_mongo_db_progress_implementation,
}

/// Counters shared by every MongoDB progress level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbProgressFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_copied: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_copied: Option<i64>,
    /// ISO 8601 duration, e.g. `PT5M`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, MongoDbError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_pending: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_replayed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_replay_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MongoDbMigrationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_documents: Option<i64>,
}

impl MongoDbProgressFields {
    pub fn last_event_time_as_time(&self) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        parse_timestamp(&self.last_event_time)
    }

    pub fn last_replay_time_as_time(&self) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        parse_timestamp(&self.last_replay_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<MongoDbErrorType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMongoDbProgress {
    #[serde(flatten)]
    pub progress: MongoDbProgressFields,
    pub result_type: Option<ResultType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawMongoDbProgress {
    pub base: BaseMongoDbProgress,
    pub values: Map<String, Value>,
}

impl MongoDbProgress {
    pub fn base(&self) -> BaseMongoDbProgress {
        let progress = match self {
            Self::Collection(v) => &v.progress,
            Self::Database(v) => &v.progress,
            Self::Migration(v) => &v.progress,
            Self::Raw(raw) => return raw.base.clone(),
        };
        BaseMongoDbProgress {
            progress: progress.clone(),
            result_type: Some(ResultType::parse(self.tag())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "Collection", rename_all = "camelCase")]
pub struct MongoDbCollectionProgress {
    #[serde(flatten)]
    pub progress: MongoDbProgressFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "Database", rename_all = "camelCase")]
pub struct MongoDbDatabaseProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<HashMap<String, MongoDbProgress>>,
    #[serde(flatten)]
    pub progress: MongoDbProgressFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType", rename = "Migration", rename_all = "camelCase")]
pub struct MongoDbMigrationProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<HashMap<String, MongoDbDatabaseProgress>>,
    #[serde(flatten)]
    pub progress: MongoDbProgressFields,
}
