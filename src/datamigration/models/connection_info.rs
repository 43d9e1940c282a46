use crate::datamigration::constants::{AuthenticationType, SqlSourcePlatform};
use crate::polymorphic::discriminated_union;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

discriminated_union! {
    /// Credentials and address of a migration source or target
    pub enum ConnectionInfo("type") {
        MongoDb(MongoDbConnectionInfo) => "MongoDbConnectionInfo",
        Sql(SqlConnectionInfo) => "SqlConnectionInfo",
        MySql(MySqlConnectionInfo) => "MySqlConnectionInfo",
        PostgreSql(PostgreSqlConnectionInfo) => "PostgreSqlConnectionInfo",
        MiSql(MiSqlConnectionInfo) => "MiSqlConnectionInfo",
    }
    raw: RawConnectionInfo,
    decoder: unmarshal_connection_info_implementation,
}

/// Fields every connection carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseConnectionInfo {
    pub password: Option<String>,
    #[serde(default, rename = "type")]
    pub type_: String,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawConnectionInfo {
    pub base: BaseConnectionInfo,
    pub values: Map<String, Value>,
}

impl ConnectionInfo {
    pub fn base(&self) -> BaseConnectionInfo {
        let (password, user_name) = match self {
            Self::MongoDb(v) => (&v.password, &v.user_name),
            Self::Sql(v) => (&v.password, &v.user_name),
            Self::MySql(v) => (&v.password, &v.user_name),
            Self::PostgreSql(v) => (&v.password, &v.user_name),
            Self::MiSql(v) => (&v.password, &v.user_name),
            Self::Raw(raw) => return raw.base.clone(),
        };
        BaseConnectionInfo {
            password: password.clone(),
            type_: self.tag().to_string(),
            user_name: user_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "MongoDbConnectionInfo", rename_all = "camelCase")]
pub struct MongoDbConnectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<String>,
    pub connection_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypt_connection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_server_certificate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "SqlConnectionInfo", rename_all = "camelCase")]
pub struct SqlConnectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<AuthenticationType>,
    pub data_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypt_connection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<SqlSourcePlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_server_certificate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "MySqlConnectionInfo", rename_all = "camelCase")]
pub struct MySqlConnectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<AuthenticationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypt_connection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub port: i64,
    pub server_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "PostgreSqlConnectionInfo", rename_all = "camelCase")]
pub struct PostgreSqlConnectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<AuthenticationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypt_connection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub port: i64,
    pub server_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_server_certificate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Connection to an Azure SQL Managed Instance, addressed by resource ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "MiSqlConnectionInfo", rename_all = "camelCase")]
pub struct MiSqlConnectionInfo {
    pub managed_instance_resource_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sql_connection_decodes_by_type() {
        let info = unmarshal_connection_info_implementation(json!({
            "type": "sqlconnectioninfo",
            "dataSource": "onprem.contoso.local",
            "authentication": "SqlAuthentication",
            "userName": "sa"
        }))
        .unwrap();

        let ConnectionInfo::Sql(sql) = &info else {
            panic!("expected SQL connection, got {info:?}");
        };
        assert_eq!(sql.data_source, "onprem.contoso.local");
        assert_eq!(sql.authentication, Some(AuthenticationType::SqlAuthentication));
        assert_eq!(info.base().type_, "SqlConnectionInfo");
        assert_eq!(info.base().user_name.as_deref(), Some("sa"));
    }

    #[test]
    fn unknown_connection_keeps_every_key() {
        let input = json!({"type": "OracleConnectionInfo", "dataSource": "ora", "userName": "system"});
        let info = unmarshal_connection_info_implementation(input.clone()).unwrap();

        let ConnectionInfo::Raw(raw) = &info else {
            panic!("expected raw connection, got {info:?}");
        };
        assert_eq!(raw.base.type_, "OracleConnectionInfo");
        assert_eq!(raw.base.user_name.as_deref(), Some("system"));
        assert_eq!(Value::Object(raw.values.clone()), input);
    }

    #[test]
    fn concrete_connection_stamps_its_type() {
        let info = ConnectionInfo::from(MiSqlConnectionInfo {
            managed_instance_resource_id: "/mi".to_string(),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({"type": "MiSqlConnectionInfo", "managedInstanceResourceId": "/mi"})
        );
    }

    #[test]
    fn nested_field_errors_fail_the_decode() {
        let err = unmarshal_connection_info_implementation(json!({"type": "MySqlConnectionInfo", "port": "x"}))
            .unwrap_err();
        assert!(err.to_string().contains("unmarshaling into MySqlConnectionInfo"));
    }
}
