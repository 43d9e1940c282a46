//! Enumerations used by the Data Migration `2021-06-30` API

use crate::enums::open_enum;

open_enum! {
    pub enum AuthenticationType {
        ActiveDirectoryIntegrated => "ActiveDirectoryIntegrated",
        ActiveDirectoryPassword => "ActiveDirectoryPassword",
        None => "None",
        SqlAuthentication => "SqlAuthentication",
        WindowsAuthentication => "WindowsAuthentication",
    }
}

open_enum! {
    pub enum BackupFileStatus {
        Arrived => "Arrived",
        Cancelled => "Cancelled",
        Queued => "Queued",
        Restored => "Restored",
        Restoring => "Restoring",
        Uploaded => "Uploaded",
        Uploading => "Uploading",
    }
}

open_enum! {
    pub enum BackupMode {
        CreateBackup => "CreateBackup",
        ExistingBackup => "ExistingBackup",
    }
}

open_enum! {
    pub enum BackupType {
        Database => "Database",
        DifferentialDatabase => "DifferentialDatabase",
        DifferentialFile => "DifferentialFile",
        DifferentialPartial => "DifferentialPartial",
        File => "File",
        Partial => "Partial",
        TransactionLog => "TransactionLog",
    }
}

open_enum! {
    /// State of a command issued against a running task
    pub enum CommandState {
        Accepted => "Accepted",
        Failed => "Failed",
        Running => "Running",
        Succeeded => "Succeeded",
        Unknown => "Unknown",
    }
}

open_enum! {
    pub enum DatabaseCompatLevel {
        CompatLevel80 => "CompatLevel80",
        CompatLevel90 => "CompatLevel90",
        CompatLevel140 => "CompatLevel140",
        CompatLevel100 => "CompatLevel100",
        CompatLevel110 => "CompatLevel110",
        CompatLevel130 => "CompatLevel130",
        CompatLevel120 => "CompatLevel120",
    }
}

open_enum! {
    pub enum DatabaseFileType {
        Filestream => "Filestream",
        Fulltext => "Fulltext",
        Log => "Log",
        NotSupported => "NotSupported",
        Rows => "Rows",
    }
}

open_enum! {
    pub enum DatabaseMigrationStage {
        Backup => "Backup",
        Completed => "Completed",
        FileCopy => "FileCopy",
        Initialize => "Initialize",
        None => "None",
        Restore => "Restore",
    }
}

open_enum! {
    /// Online migration state of a database moved to a managed instance
    pub enum DatabaseMigrationState {
        Cancelled => "CANCELLED",
        Completed => "COMPLETED",
        CutoverStart => "CUTOVER_START",
        Failed => "FAILED",
        FullBackupUploadStart => "FULL_BACKUP_UPLOAD_START",
        Initial => "INITIAL",
        LogShippingStart => "LOG_SHIPPING_START",
        PostCutoverComplete => "POST_CUTOVER_COMPLETE",
        Undefined => "UNDEFINED",
        UploadLogFilesStart => "UPLOAD_LOG_FILES_START",
    }
}

open_enum! {
    pub enum DatabaseState {
        Copying => "Copying",
        Emergency => "Emergency",
        Offline => "Offline",
        OfflineSecondary => "OfflineSecondary",
        Online => "Online",
        Recovering => "Recovering",
        RecoveryPending => "RecoveryPending",
        Restoring => "Restoring",
        Suspect => "Suspect",
    }
}

open_enum! {
    pub enum LoginMigrationStage {
        AssignRoleMembership => "AssignRoleMembership",
        AssignRoleOwnership => "AssignRoleOwnership",
        Completed => "Completed",
        EstablishObjectPermissions => "EstablishObjectPermissions",
        EstablishServerPermissions => "EstablishServerPermissions",
        EstablishUserMapping => "EstablishUserMapping",
        Initialize => "Initialize",
        LoginMigration => "LoginMigration",
        None => "None",
    }
}

open_enum! {
    pub enum LoginType {
        AsymmetricKey => "AsymmetricKey",
        Certificate => "Certificate",
        ExternalGroup => "ExternalGroup",
        ExternalUser => "ExternalUser",
        SqlLogin => "SqlLogin",
        WindowsGroup => "WindowsGroup",
        WindowsUser => "WindowsUser",
    }
}

open_enum! {
    pub enum MigrationState {
        Completed => "Completed",
        Failed => "Failed",
        InProgress => "InProgress",
        None => "None",
        Skipped => "Skipped",
        Stopped => "Stopped",
        Warning => "Warning",
    }
}

open_enum! {
    pub enum MigrationStatus {
        Completed => "Completed",
        CompletedWithWarnings => "CompletedWithWarnings",
        Configured => "Configured",
        Connecting => "Connecting",
        Default => "Default",
        Error => "Error",
        Running => "Running",
        SelectLogins => "SelectLogins",
        SourceAndTargetSelected => "SourceAndTargetSelected",
        Stopped => "Stopped",
    }
}

open_enum! {
    pub enum MongoDbClusterType {
        BlobContainer => "BlobContainer",
        CosmosDb => "CosmosDb",
        MongoDb => "MongoDb",
    }
}

open_enum! {
    pub enum MongoDbErrorType {
        Error => "Error",
        ValidationError => "ValidationError",
        Warning => "Warning",
    }
}

open_enum! {
    pub enum MongoDbMigrationState {
        Canceled => "Canceled",
        Complete => "Complete",
        Copying => "Copying",
        Failed => "Failed",
        Finalizing => "Finalizing",
        InitialReplay => "InitialReplay",
        Initializing => "Initializing",
        NotStarted => "NotStarted",
        Replaying => "Replaying",
        Restarting => "Restarting",
        ValidatingInput => "ValidatingInput",
    }
}

open_enum! {
    pub enum MongoDbReplication {
        Continuous => "Continuous",
        Disabled => "Disabled",
        OneTime => "OneTime",
    }
}

open_enum! {
    pub enum MongoDbShardKeyOrder {
        Forward => "Forward",
        Hashed => "Hashed",
        Reverse => "Reverse",
    }
}

open_enum! {
    pub enum MySqlTargetPlatformType {
        AzureDbForMySql => "AzureDbForMySQL",
        SqlServer => "SqlServer",
    }
}

open_enum! {
    pub enum ObjectType {
        Function => "Function",
        StoredProcedures => "StoredProcedures",
        Table => "Table",
        User => "User",
        View => "View",
    }
}

open_enum! {
    pub enum ProjectProvisioningState {
        Deleting => "Deleting",
        Succeeded => "Succeeded",
    }
}

open_enum! {
    pub enum ProjectSourcePlatform {
        MongoDb => "MongoDb",
        MySql => "MySQL",
        PostgreSql => "PostgreSql",
        Sql => "SQL",
        Unknown => "Unknown",
    }
}

open_enum! {
    pub enum ProjectTargetPlatform {
        AzureDbForMySql => "AzureDbForMySql",
        AzureDbForPostgreSql => "AzureDbForPostgreSql",
        MongoDb => "MongoDb",
        SqlDb => "SQLDB",
        SqlMi => "SQLMI",
        Unknown => "Unknown",
    }
}

open_enum! {
    pub enum ReplicateMigrationState {
        ActionRequired => "ACTION_REQUIRED",
        Complete => "COMPLETE",
        Failed => "FAILED",
        Pending => "PENDING",
        Undefined => "UNDEFINED",
        Validating => "VALIDATING",
    }
}

open_enum! {
    /// Discriminator of MongoDB migration progress reports
    pub enum ResultType {
        Collection => "Collection",
        Database => "Database",
        Migration => "Migration",
    }
}

open_enum! {
    pub enum ScenarioSource {
        Access => "Access",
        Db2 => "DB2",
        MongoDb => "MongoDB",
        MySql => "MySQL",
        MySqlRds => "MySQLRDS",
        Oracle => "Oracle",
        PostgreSql => "PostgreSQL",
        PostgreSqlRds => "PostgreSQLRDS",
        Sql => "SQL",
        SqlRds => "SQLRDS",
        Sybase => "Sybase",
    }
}

open_enum! {
    pub enum ScenarioTarget {
        AzureDbForMySql => "AzureDBForMySql",
        AzureDbForPostgresSql => "AzureDBForPostgresSQL",
        MongoDb => "MongoDB",
        SqlDb => "SQLDB",
        SqlDw => "SQLDW",
        SqlMi => "SQLMI",
        SqlServer => "SQLServer",
    }
}

open_enum! {
    pub enum ServerLevelPermissionsGroup {
        Default => "Default",
        MigrationFromMySqlToAzureDbForMySql => "MigrationFromMySQLToAzureDBForMySQL",
        MigrationFromSqlServerToAzureDb => "MigrationFromSqlServerToAzureDB",
        MigrationFromSqlServerToAzureMi => "MigrationFromSqlServerToAzureMI",
    }
}

open_enum! {
    /// Provisioning state of a Data Migration Service
    pub enum ServiceProvisioningState {
        Accepted => "Accepted",
        Deleting => "Deleting",
        Deploying => "Deploying",
        Failed => "Failed",
        FailedToStart => "FailedToStart",
        FailedToStop => "FailedToStop",
        Starting => "Starting",
        Stopped => "Stopped",
        Stopping => "Stopping",
        Succeeded => "Succeeded",
    }
}

open_enum! {
    /// Scaling behaviour of a service SKU. Wire values are lower case.
    pub enum ServiceScalability {
        Automatic => "automatic",
        Manual => "manual",
        None => "none",
    }
}

open_enum! {
    pub enum Severity {
        Error => "Error",
        Message => "Message",
        Warning => "Warning",
    }
}

open_enum! {
    pub enum SqlSourcePlatform {
        SqlOnPrem => "SqlOnPrem",
    }
}

open_enum! {
    pub enum SsisMigrationOverwriteOption {
        Ignore => "Ignore",
        Overwrite => "Overwrite",
    }
}

open_enum! {
    pub enum SsisMigrationStage {
        Completed => "Completed",
        InProgress => "InProgress",
        Initialize => "Initialize",
        None => "None",
    }
}

open_enum! {
    pub enum SsisStoreType {
        SsisCatalog => "SsisCatalog",
    }
}

open_enum! {
    /// Reporting state of an online (sync) database migration.
    /// `INITIALIAZING` is spelled the way the service sends it.
    pub enum SyncDatabaseMigrationReportingState {
        BackupCompleted => "BACKUP_COMPLETED",
        BackupInProgress => "BACKUP_IN_PROGRESS",
        Cancelled => "CANCELLED",
        Cancelling => "CANCELLING",
        Complete => "COMPLETE",
        Completing => "COMPLETING",
        Configuring => "CONFIGURING",
        Failed => "FAILED",
        Initialiazing => "INITIALIAZING",
        ReadyToComplete => "READY_TO_COMPLETE",
        RestoreCompleted => "RESTORE_COMPLETED",
        RestoreInProgress => "RESTORE_IN_PROGRESS",
        Running => "RUNNING",
        Starting => "STARTING",
        Undefined => "UNDEFINED",
        Validating => "VALIDATING",
        ValidationComplete => "VALIDATION_COMPLETE",
        ValidationFailed => "VALIDATION_FAILED",
    }
}

open_enum! {
    pub enum SyncTableMigrationState {
        BeforeLoad => "BEFORE_LOAD",
        Canceled => "CANCELED",
        Completed => "COMPLETED",
        Error => "ERROR",
        Failed => "FAILED",
        FullLoad => "FULL_LOAD",
    }
}

open_enum! {
    pub enum TaskState {
        Canceled => "Canceled",
        Failed => "Failed",
        FailedInputValidation => "FailedInputValidation",
        Faulted => "Faulted",
        Queued => "Queued",
        Running => "Running",
        Succeeded => "Succeeded",
        Unknown => "Unknown",
    }
}

open_enum! {
    pub enum UpdateActionType {
        AddedOnTarget => "AddedOnTarget",
        ChangedOnTarget => "ChangedOnTarget",
        DeletedOnTarget => "DeletedOnTarget",
    }
}

open_enum! {
    pub enum ValidationStatus {
        Completed => "Completed",
        CompletedWithIssues => "CompletedWithIssues",
        Default => "Default",
        Failed => "Failed",
        InProgress => "InProgress",
        Initialized => "Initialized",
        NotStarted => "NotStarted",
        Stopped => "Stopped",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_state_parses_any_casing() {
        assert_eq!(CommandState::parse("running"), CommandState::Running);
        assert_eq!("ACCEPTED".parse::<CommandState>().unwrap(), CommandState::Accepted);
        assert_eq!(
            CommandState::possible_values(),
            &["Accepted", "Failed", "Running", "Succeeded", "Unknown"]
        );
    }

    #[test]
    fn lower_case_wire_values_are_preserved() {
        assert_eq!(ServiceScalability::parse("Automatic"), ServiceScalability::Automatic);
        assert_eq!(ServiceScalability::Automatic.as_str(), "automatic");
        assert_eq!(serde_json::to_string(&ServiceScalability::None).unwrap(), "\"none\"");
    }

    #[test]
    fn screaming_case_values_keep_their_spelling() {
        assert_eq!(
            DatabaseMigrationState::parse("cutover_start"),
            DatabaseMigrationState::CutoverStart
        );
        assert_eq!(
            SyncDatabaseMigrationReportingState::Initialiazing.to_string(),
            "INITIALIAZING"
        );
    }

    #[test]
    fn new_service_values_pass_through() {
        let state: ServiceProvisioningState = serde_json::from_str("\"Upgrading\"").unwrap();
        assert_eq!(state, ServiceProvisioningState::Other("Upgrading".to_string()));
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"Upgrading\"");
    }
}
