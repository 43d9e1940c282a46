use crate::datamigration::constants::{ServiceProvisioningState, ServiceScalability};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Data Migration Service instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMigrationService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<DataMigrationServiceProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<ServiceSku>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMigrationServiceProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ServiceProvisioningState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_nic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_subnet_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSku {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// A SKU a service can be scaled to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableServiceSku {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<AvailableServiceSkuCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<AvailableServiceSkuSku>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableServiceSkuCapacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ServiceScalability>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableServiceSkuSku {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// Health of a running service, from `checkStatus`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMigrationServiceStatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_task_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_decodes_from_arm_body() {
        let service: DataMigrationService = serde_json::from_value(json!({
            "id": "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DataMigration/services/dms1",
            "name": "dms1",
            "location": "westeurope",
            "kind": "Cloud",
            "sku": {"name": "Premium_4vCores", "tier": "Premium", "capacity": 4},
            "properties": {"provisioningState": "stopped", "virtualSubnetId": "/subnet"}
        }))
        .unwrap();

        assert_eq!(service.name.as_deref(), Some("dms1"));
        let properties = service.properties.unwrap();
        assert_eq!(properties.provisioning_state, Some(ServiceProvisioningState::Stopped));
        assert_eq!(service.sku.unwrap().capacity, Some(4));
    }

    #[test]
    fn unset_fields_are_not_sent() {
        let service = DataMigrationService {
            location: "westeurope".to_string(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&service).unwrap(), json!({"location": "westeurope"}));
    }
}
