//! Integration tests for the ARM client using wiremock
//!
//! These tests drive the operation clients against mocked endpoints,
//! covering long-running operations, paging, error bodies and cancellation.

use azrm::client::{ArmClient, ClientOptions};
use azrm::datamigration::constants::{
    CommandState, ProjectSourcePlatform, ServiceProvisioningState, ServiceScalability, TaskState,
};
use azrm::datamigration::models::{
    CommandProperties, MigrateSyncCompleteCommandInput, MigrateSyncCompleteCommandProperties,
};
use azrm::datamigration::{
    DeleteOperationOptions, ListOperationOptions, ProjectId, ProjectTaskClient, ServiceId, ServiceOperationPredicate,
    ServiceResourceClient, TaskId,
};
use azrm::elasticsan::constants::SkuName;
use azrm::elasticsan::{ElasticSanId, ElasticSansClient};
use azrm::network::webapplicationfirewallpolicies::constants::{
    WebApplicationFirewallEnabledState, WebApplicationFirewallMode,
};
use azrm::network::webapplicationfirewallpolicies::models::WebApplicationFirewallPolicy;
use azrm::network::webapplicationfirewallpolicies::{
    ApplicationGatewayWebApplicationFirewallPolicyId, WebApplicationFirewallPoliciesClient,
};
use azrm::resourceids::{ResourceGroupId, SubscriptionId};
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{bearer_token, body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE_PATH: &str = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DataMigration/services/dms1";

fn arm_client(server: &MockServer) -> ArmClient {
    let options = ClientOptions {
        endpoint: server.uri(),
        token: Some("test-token".to_string()),
        poll_interval: Duration::from_millis(5),
        ..ClientOptions::default()
    };
    ArmClient::new(options).expect("client should build")
}

fn service_id() -> ServiceId {
    ServiceId::new("sub1", "rg1", "dms1")
}

/// Data Migration service operations
mod service_tests {
    use super::*;

    /// Every request carries the API version, token and a client request ID
    #[tokio::test]
    async fn test_get_sends_api_version_and_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(query_param("api-version", "2021-06-30"))
            .and(bearer_token("test-token"))
            .and(header_exists("x-ms-client-request-id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "dms1",
                "location": "westus",
                "kind": "Cloud",
                "properties": {"provisioningState": "Succeeded"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let response = assert_ok!(client.services_get(&CancellationToken::new(), &service_id()).await);

        let service = response.model.expect("service body");
        assert_eq!(service.name.as_deref(), Some("dms1"));
        assert_eq!(service.location, "westus");
    }

    /// 404 surfaces as an unexpected status carrying the ARM error code
    #[tokio::test]
    async fn test_404_reports_arm_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {
                    "code": "ResourceNotFound",
                    "message": "The Resource 'dms1' was not found."
                }
            })))
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let err = assert_err!(client.services_get(&CancellationToken::new(), &service_id()).await);

        assert!(err.is_not_found());
        assert!(err.to_string().contains("ResourceNotFound"));
    }

    /// Start answers 202 and completes through the operation status resource
    #[tokio::test]
    async fn test_start_polls_async_operation() {
        let server = MockServer::start().await;
        let operation_url = format!("{}/operations/op1", server.uri());

        Mock::given(method("POST"))
            .and(path(format!("{}/start", SERVICE_PATH)))
            .respond_with(ResponseTemplate::new(202).insert_header("Azure-AsyncOperation", operation_url.as_str()))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/operations/op1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "InProgress"})))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/operations/op1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Succeeded"})))
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        assert_ok!(client.services_start_then_poll(&CancellationToken::new(), &service_id()).await);
    }

    /// A failed operation is reported with the polling context
    #[tokio::test]
    async fn test_stop_failure_names_operation() {
        let server = MockServer::start().await;
        let operation_url = format!("{}/operations/op2", server.uri());

        Mock::given(method("POST"))
            .and(path(format!("{}/stop", SERVICE_PATH)))
            .respond_with(ResponseTemplate::new(202).insert_header("Azure-AsyncOperation", operation_url.as_str()))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/operations/op2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "Failed",
                "error": {"code": "ServiceBusy", "message": "tasks are running"}
            })))
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let err = assert_err!(client.services_stop_then_poll(&CancellationToken::new(), &service_id()).await);

        let message = err.to_string();
        assert!(message.starts_with("polling after ServicesStop"), "{}", message);
        assert!(message.contains("ServiceBusy"), "{}", message);
    }

    /// A delete answered with 200 is already complete
    #[tokio::test]
    async fn test_delete_200_needs_no_polling() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(SERVICE_PATH))
            .and(query_param("deleteRunningTasks", "true"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let options = DeleteOperationOptions {
            delete_running_tasks: Some(true),
        };
        assert_ok!(
            client
                .services_delete_then_poll(&CancellationToken::new(), &service_id(), options)
                .await
        );
    }

    /// A delete answered with 202 follows the Location header until it stops answering 202
    #[tokio::test]
    async fn test_delete_202_follows_location() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(SERVICE_PATH))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("Location", format!("{}/locations/del1", server.uri()).as_str())
                    .insert_header("Retry-After", "0"),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/locations/del1"))
            .respond_with(ResponseTemplate::new(202))
            .up_to_n_times(2)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/locations/del1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        assert_ok!(
            client
                .services_delete_then_poll(&CancellationToken::new(), &service_id(), DeleteOperationOptions::new())
                .await
        );
    }

    /// Every page is fetched and the predicate filters the merged items
    #[tokio::test]
    async fn test_list_follows_next_link() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/subscriptions/sub1/providers/Microsoft.DataMigration/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [
                    {"name": "dms1", "location": "westus"},
                    {"name": "dms2", "location": "eastus"}
                ],
                "nextLink": format!("{}/pages/2", server.uri())
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/pages/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{"name": "dms3", "location": "westus"}],
                "nextLink": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let ctx = CancellationToken::new();

        let all = assert_ok!(client.services_list_complete(&ctx, &SubscriptionId::new("sub1")).await);
        assert_eq!(all.items.len(), 3);

        // single page for the filtered listing
        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/subscriptions/sub1/providers/Microsoft.DataMigration/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [
                    {"name": "dms1", "location": "westus"},
                    {"name": "dms2", "location": "eastus"}
                ]
            })))
            .mount(&server)
            .await;

        let predicate = ServiceOperationPredicate {
            location: Some("westus".to_string()),
            ..Default::default()
        };
        let filtered = assert_ok!(
            client
                .services_list_complete_matching_predicate(&ctx, &SubscriptionId::new("sub1"), predicate)
                .await
        );
        let names: Vec<_> = filtered.items.iter().filter_map(|s| s.name.as_deref()).collect();
        assert_eq!(names, vec!["dms1"]);
    }

    /// Create answers 201 while deploying and is polled on the service itself
    #[tokio::test]
    async fn test_create_or_update_polls_provisioning_state() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(SERVICE_PATH))
            .and(query_param("api-version", "2021-06-30"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "name": "dms1",
                "location": "westus",
                "properties": {"provisioningState": "Creating"}
            })))
            .expect(2)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(query_param("api-version", "2021-06-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "dms1",
                "location": "westus",
                "properties": {"provisioningState": "Deploying"}
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(query_param("api-version", "2021-06-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "dms1",
                "location": "westus",
                "properties": {"provisioningState": "Succeeded"}
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let input: azrm::datamigration::models::DataMigrationService = serde_json::from_value(json!({
            "location": "westus",
            "sku": {"name": "Premium_4vCores", "tier": "Premium"}
        }))
        .expect("valid service");
        let ctx = CancellationToken::new();

        let mut result = assert_ok!(client.services_create_or_update(&ctx, &service_id(), &input).await);
        let accepted = result.model.take().expect("initial body");
        assert_eq!(
            accepted.properties.and_then(|p| p.provisioning_state),
            Some(ServiceProvisioningState::parse("Creating"))
        );
        assert_ok!(result.poller.poll_until_done(&ctx).await);
        let created: azrm::datamigration::models::DataMigrationService =
            result.poller.final_model().unwrap().expect("final service");
        assert_eq!(
            created.properties.and_then(|p| p.provisioning_state),
            Some(ServiceProvisioningState::Succeeded)
        );

        assert_ok!(client.services_create_or_update_then_poll(&ctx, &service_id(), &input).await);
    }

    /// Check status is a POST against the service
    #[tokio::test]
    async fn test_check_status_posts() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{}/checkStatus", SERVICE_PATH)))
            .and(query_param("api-version", "2021-06-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "agentVersion": "2.0.1",
                "status": "Online",
                "supportedTaskTypes": ["Migrate.SqlServer.SqlDb", "ConnectToSource.SqlServer"],
                "vmSize": "Standard_D4"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let response = assert_ok!(client.services_check_status(&CancellationToken::new(), &service_id()).await);

        let status = response.model.expect("status body");
        assert_eq!(status.status.as_deref(), Some("Online"));
        assert_eq!(status.supported_task_types.map(|t| t.len()), Some(2));
    }

    /// SKUs are listed under the service and paged
    #[tokio::test]
    async fn test_list_skus_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/skus", SERVICE_PATH)))
            .and(query_param("api-version", "2021-06-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{
                    "resourceType": "Microsoft.DataMigration/services",
                    "sku": {"name": "Standard_1vCores", "tier": "Standard"},
                    "capacity": {"minimum": 1, "maximum": 4, "default": 1, "scaleType": "manual"}
                }],
                "nextLink": format!("{}/pages/skus-2", server.uri())
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/pages/skus-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{
                    "resourceType": "Microsoft.DataMigration/services",
                    "sku": {"name": "Premium_4vCores", "tier": "Premium"}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let result = assert_ok!(
            client
                .services_list_skus_complete(&CancellationToken::new(), &service_id())
                .await
        );

        assert_eq!(result.items.len(), 2);
        let capacity = result.items[0].capacity.clone().expect("capacity");
        assert_eq!(capacity.scale_type, Some(ServiceScalability::Manual));
        assert_eq!(capacity.maximum, Some(4));
    }

    /// Follow-up pages are sent with their own client request ID
    #[tokio::test]
    async fn test_pages_get_fresh_request_ids() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DataMigration/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{"name": "dms1", "location": "westus"}],
                "nextLink": format!("{}/pages/rg-2", server.uri())
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/pages/rg-2"))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{"name": "dms2", "location": "eastus"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let result = assert_ok!(
            client
                .services_list_by_resource_group_complete(&CancellationToken::new(), &ResourceGroupId::new("sub1", "rg1"))
                .await
        );
        assert_eq!(result.items.len(), 2);

        let requests = server.received_requests().await.expect("recording enabled");
        let ids: Vec<String> = requests
            .iter()
            .filter_map(|r| r.headers.get("x-ms-client-request-id"))
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    /// Projects are read and listed under the service
    #[tokio::test]
    async fn test_projects_get_and_list() {
        let server = MockServer::start().await;
        let project = json!({
            "name": "proj1",
            "location": "westus",
            "properties": {
                "sourcePlatform": "SQL",
                "targetPlatform": "SQLDB",
                "provisioningState": "Succeeded"
            }
        });

        Mock::given(method("GET"))
            .and(path(format!("{}/projects/proj1", SERVICE_PATH)))
            .and(query_param("api-version", "2021-06-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&project))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("{}/projects", SERVICE_PATH)))
            .and(query_param("api-version", "2021-06-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [project, {"name": "proj2", "location": "westus"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let ctx = CancellationToken::new();

        let id = ProjectId::new("sub1", "rg1", "dms1", "proj1");
        let response = assert_ok!(client.projects_get(&ctx, &id).await);
        let properties = response.model.and_then(|p| p.properties).expect("project properties");
        assert_eq!(properties.source_platform, ProjectSourcePlatform::Sql);

        let listed = assert_ok!(client.projects_list_complete(&ctx, &service_id()).await);
        let names: Vec<_> = listed.items.iter().filter_map(|p| p.name.as_deref()).collect();
        assert_eq!(names, vec!["proj1", "proj2"]);
    }

    /// Cancelling the context aborts an in-flight request
    #[tokio::test]
    async fn test_cancellation_aborts_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"name": "dms1", "location": "westus"}))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let client = ServiceResourceClient::from_client(&arm_client(&server));
        let ctx = CancellationToken::new();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let err = assert_err!(client.services_get(&ctx, &service_id()).await);
        assert!(err.is_cancelled());
    }
}

/// Data Migration task operations
mod task_tests {
    use super::*;

    const TASK_PATH: &str =
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DataMigration/services/dms1/projects/proj1/tasks/task1";

    /// The command body carries its discriminator and the reply decodes to the concrete variant
    #[tokio::test]
    async fn test_command_round_trips_discriminator() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{}/command", TASK_PATH)))
            .and(body_json(json!({
                "commandType": "Migrate.Sync.Complete.Database",
                "input": {"databaseName": "db1"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "commandType": "Migrate.Sync.Complete.Database",
                "state": "Running"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ProjectTaskClient::from_client(&arm_client(&server));
        let command = CommandProperties::from(MigrateSyncCompleteCommandProperties {
            input: Some(MigrateSyncCompleteCommandInput {
                commit_time_stamp: None,
                database_name: "db1".to_string(),
            }),
            ..Default::default()
        });
        let id = TaskId::new("sub1", "rg1", "dms1", "proj1", "task1");

        let response = assert_ok!(client.tasks_command(&CancellationToken::new(), &id, &command).await);
        match response.model {
            Some(CommandProperties::MigrateSyncComplete(reply)) => {
                assert_eq!(reply.state, Some(CommandState::Running));
            },
            other => panic!("unexpected command reply: {:?}", other),
        }
    }

    /// Unknown task types decode as raw values instead of failing
    #[tokio::test]
    async fn test_get_keeps_unknown_task_type() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(TASK_PATH))
            .and(query_param("$expand", "output"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "task1",
                "properties": {"taskType": "Migrate.Future.Thing", "state": "Running"}
            })))
            .mount(&server)
            .await;

        let client = ProjectTaskClient::from_client(&arm_client(&server));
        let id = TaskId::new("sub1", "rg1", "dms1", "proj1", "task1");
        let options = azrm::datamigration::GetOperationOptions {
            expand: Some("output".to_string()),
        };

        let response = assert_ok!(client.tasks_get(&CancellationToken::new(), &id, options).await);
        let properties = response.model.and_then(|task| task.properties).expect("task properties");
        assert_eq!(properties.tag(), "Migrate.Future.Thing");
    }
    /// Listing passes the task type filter through
    #[tokio::test]
    async fn test_list_filters_by_task_type() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(
                "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DataMigration/services/dms1/projects/proj1/tasks",
            ))
            .and(query_param("api-version", "2021-06-30"))
            .and(query_param("taskType", "Migrate.SqlServer.SqlDb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{
                    "name": "task1",
                    "properties": {"taskType": "Migrate.SqlServer.SqlDb", "state": "Running"}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ProjectTaskClient::from_client(&arm_client(&server));
        let options = ListOperationOptions {
            task_type: Some("Migrate.SqlServer.SqlDb".to_string()),
        };
        let result = assert_ok!(
            client
                .tasks_list_complete(
                    &CancellationToken::new(),
                    &ProjectId::new("sub1", "rg1", "dms1", "proj1"),
                    options
                )
                .await
        );

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].state(), Some(TaskState::Running));
    }

    /// Cancel is a POST returning the task
    #[tokio::test]
    async fn test_cancel_returns_task() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{}/cancel", TASK_PATH)))
            .and(query_param("api-version", "2021-06-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "task1",
                "properties": {"taskType": "ConnectToSource.SqlServer", "state": "Canceled"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ProjectTaskClient::from_client(&arm_client(&server));
        let id = TaskId::new("sub1", "rg1", "dms1", "proj1", "task1");

        let response = assert_ok!(client.tasks_cancel(&CancellationToken::new(), &id).await);
        let task = response.model.expect("task body");
        assert_eq!(task.state(), Some(TaskState::Canceled));
    }
}

/// Elastic SAN and WAF policy operations
mod resource_tests {
    use super::*;

    const SAN_PATH: &str = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.ElasticSan/elasticSans/san1";
    const WAF_PATH: &str =
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/applicationGatewayWebApplicationFirewallPolicies/waf1";

    /// Create polls the operation and then re-reads the resource
    #[tokio::test]
    async fn test_san_create_reads_final_resource() {
        let server = MockServer::start().await;

        let body = json!({
            "location": "westus2",
            "properties": {
                "baseSizeTiB": 1,
                "extendedCapacitySizeTiB": 0,
                "sku": {"name": "Premium_LRS"}
            }
        });

        Mock::given(method("PUT"))
            .and(path(SAN_PATH))
            .and(query_param("api-version", "2023-01-01"))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("Azure-AsyncOperation", format!("{}/operations/san-op", server.uri()).as_str())
                    .set_body_json(&body),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/operations/san-op"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Succeeded"})))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(SAN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "san1",
                "location": "westus2",
                "properties": {
                    "baseSizeTiB": 1,
                    "extendedCapacitySizeTiB": 0,
                    "sku": {"name": "Premium_LRS"},
                    "provisioningState": "Succeeded"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElasticSansClient::from_client(&arm_client(&server));
        let id = ElasticSanId::new("sub1", "rg1", "san1");
        let input = serde_json::from_value(body).expect("valid elastic san");
        let ctx = CancellationToken::new();

        let mut result = assert_ok!(client.create(&ctx, &id, &input).await);
        assert_ok!(result.poller.poll_until_done(&ctx).await);

        let created: azrm::elasticsan::models::ElasticSan =
            result.poller.final_model().unwrap().expect("final resource");
        assert_eq!(created.name.as_deref(), Some("san1"));
    }

    /// Resource group listing uses the provider path under the group
    #[tokio::test]
    async fn test_san_list_by_resource_group() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.ElasticSan/elasticSans"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{
                    "name": "san1",
                    "location": "westus2",
                    "properties": {"baseSizeTiB": 1, "extendedCapacitySizeTiB": 0, "sku": {"name": "Premium_ZRS"}}
                }]
            })))
            .mount(&server)
            .await;

        let client = ElasticSansClient::from_client(&arm_client(&server));
        let result = assert_ok!(
            client
                .list_by_resource_group_complete(&CancellationToken::new(), &ResourceGroupId::new("sub1", "rg1"))
                .await
        );
        assert_eq!(result.items.len(), 1);
    }

    /// WAF delete follows the Location header to completion
    #[tokio::test]
    async fn test_waf_delete_polls_location() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(WAF_PATH))
            .and(query_param("api-version", "2023-11-01"))
            .respond_with(
                ResponseTemplate::new(202).insert_header("Location", format!("{}/locations/waf-del", server.uri()).as_str()),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/locations/waf-del"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = WebApplicationFirewallPoliciesClient::from_client(&arm_client(&server));
        let id = ApplicationGatewayWebApplicationFirewallPolicyId::new("sub1", "rg1", "waf1");
        assert_ok!(client.delete_then_poll(&CancellationToken::new(), &id).await);
    }

    /// Unexpected status codes are errors even when they are successes
    #[tokio::test]
    async fn test_waf_create_rejects_unexpected_status() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(WAF_PATH))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let client = WebApplicationFirewallPoliciesClient::from_client(&arm_client(&server));
        let id = ApplicationGatewayWebApplicationFirewallPolicyId::new("sub1", "rg1", "waf1");
        let err = assert_err!(
            client
                .create_or_update(&CancellationToken::new(), &id, &Default::default())
                .await
        );
        assert_eq!(err.status(), Some(reqwest::StatusCode::ACCEPTED));
    }

    /// Get decodes the SAN properties
    #[tokio::test]
    async fn test_san_get() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SAN_PATH))
            .and(query_param("api-version", "2023-01-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "san1",
                "location": "westus2",
                "properties": {
                    "baseSizeTiB": 2,
                    "extendedCapacitySizeTiB": 4,
                    "sku": {"name": "Premium_ZRS"},
                    "totalSizeTiB": 6
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElasticSansClient::from_client(&arm_client(&server));
        let response = assert_ok!(
            client
                .get(&CancellationToken::new(), &ElasticSanId::new("sub1", "rg1", "san1"))
                .await
        );

        let san = response.model.expect("san body");
        assert_eq!(san.properties.sku.name, SkuName::PremiumZrs);
        assert_eq!(san.properties.total_size_tib, Some(6));
    }

    /// Subscription listing uses the provider path under the subscription
    #[tokio::test]
    async fn test_san_list_by_subscription() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/subscriptions/sub1/providers/Microsoft.ElasticSan/elasticSans"))
            .and(query_param("api-version", "2023-01-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [
                    {
                        "name": "san1",
                        "location": "westus2",
                        "properties": {"baseSizeTiB": 1, "extendedCapacitySizeTiB": 0, "sku": {"name": "Premium_LRS"}}
                    },
                    {
                        "name": "san2",
                        "location": "eastus",
                        "properties": {"baseSizeTiB": 1, "extendedCapacitySizeTiB": 0, "sku": {"name": "Premium_ZRS"}}
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElasticSansClient::from_client(&arm_client(&server));
        let result = assert_ok!(
            client
                .list_by_subscription_complete(&CancellationToken::new(), &SubscriptionId::new("sub1"))
                .await
        );
        let names: Vec<_> = result.items.iter().filter_map(|s| s.name.as_deref()).collect();
        assert_eq!(names, vec!["san1", "san2"]);
    }

    /// Get decodes the WAF policy settings
    #[tokio::test]
    async fn test_waf_get() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(WAF_PATH))
            .and(query_param("api-version", "2023-11-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "waf1",
                "location": "westeurope",
                "properties": {
                    "managedRules": {"managedRuleSets": [{"ruleSetType": "OWASP", "ruleSetVersion": "3.2"}]},
                    "policySettings": {"state": "Enabled", "mode": "Prevention"},
                    "provisioningState": "Succeeded"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = WebApplicationFirewallPoliciesClient::from_client(&arm_client(&server));
        let id = ApplicationGatewayWebApplicationFirewallPolicyId::new("sub1", "rg1", "waf1");
        let response = assert_ok!(client.get(&CancellationToken::new(), &id).await);

        let properties = response.model.and_then(|p| p.properties).expect("policy properties");
        assert_eq!(properties.managed_rules.managed_rule_sets[0].rule_set_type, "OWASP");
        let settings = properties.policy_settings.expect("policy settings");
        assert_eq!(settings.state, Some(WebApplicationFirewallEnabledState::Enabled));
        assert_eq!(settings.mode, Some(WebApplicationFirewallMode::Prevention));
    }

    /// Create or update returns the stored policy on 200 and 201
    #[tokio::test]
    async fn test_waf_create_or_update_returns_policy() {
        let server = MockServer::start().await;
        let input: WebApplicationFirewallPolicy = serde_json::from_value(json!({
            "location": "westeurope",
            "properties": {
                "managedRules": {"managedRuleSets": [{"ruleSetType": "OWASP", "ruleSetVersion": "3.2"}]}
            }
        }))
        .expect("valid policy");

        Mock::given(method("PUT"))
            .and(path(WAF_PATH))
            .and(query_param("api-version", "2023-11-01"))
            .and(body_json(json!({
                "location": "westeurope",
                "properties": {
                    "managedRules": {"managedRuleSets": [{"ruleSetType": "OWASP", "ruleSetVersion": "3.2"}]}
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "name": "waf1",
                "location": "westeurope",
                "etag": "W/\"1\"",
                "properties": {
                    "managedRules": {"managedRuleSets": [{"ruleSetType": "OWASP", "ruleSetVersion": "3.2"}]},
                    "provisioningState": "Succeeded"
                }
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path(WAF_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "waf1",
                "location": "westeurope",
                "etag": "W/\"2\"",
                "properties": {"managedRules": {"managedRuleSets": []}}
            })))
            .mount(&server)
            .await;

        let client = WebApplicationFirewallPoliciesClient::from_client(&arm_client(&server));
        let id = ApplicationGatewayWebApplicationFirewallPolicyId::new("sub1", "rg1", "waf1");
        let ctx = CancellationToken::new();

        let created = assert_ok!(client.create_or_update(&ctx, &id, &input).await);
        assert_eq!(created.http_response.status, reqwest::StatusCode::CREATED);
        assert_eq!(created.model.and_then(|p| p.etag).as_deref(), Some("W/\"1\""));

        let updated = assert_ok!(client.create_or_update(&ctx, &id, &input).await);
        assert_eq!(updated.http_response.status, reqwest::StatusCode::OK);
        assert_eq!(updated.model.and_then(|p| p.etag).as_deref(), Some("W/\"2\""));
    }

    /// Subscription-wide listing of WAF policies
    #[tokio::test]
    async fn test_waf_list_all() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(
                "/subscriptions/sub1/providers/Microsoft.Network/applicationGatewayWebApplicationFirewallPolicies",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [
                    {"name": "waf1", "location": "westeurope", "properties": {"managedRules": {"managedRuleSets": []}}},
                    {"name": "waf2", "location": "westeurope"}
                ]
            })))
            .mount(&server)
            .await;

        let client = WebApplicationFirewallPoliciesClient::from_client(&arm_client(&server));
        let result = assert_ok!(
            client
                .list_all_complete(&CancellationToken::new(), &SubscriptionId::new("sub1"))
                .await
        );
        assert_eq!(result.items.len(), 2);
    }
}
