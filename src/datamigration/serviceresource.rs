//! Data Migration services and projects

use super::ids::{ProjectId, ServiceId};
use super::models::{AvailableServiceSku, DataMigrationService, DataMigrationServiceStatusResponse, Project};
use super::API_VERSION;
use crate::client::predicate::field_matches;
use crate::client::{
    ArmClient, ClientOptions, ListCompleteResult, LongRunningResponse, OperationOptions, Predicate, RequestOptions,
    Response,
};
use crate::error::{Error, Result};
use crate::resourceids::{ResourceGroupId, ResourceId, SubscriptionId};
use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;

/// Client for Data Migration services, their SKUs and projects
#[derive(Clone)]
pub struct ServiceResourceClient {
    client: ArmClient,
}

/// Options for `services_delete`
#[derive(Debug, Clone, Default)]
pub struct DeleteOperationOptions {
    /// Delete the service even when tasks are still running
    pub delete_running_tasks: Option<bool>,
}

impl DeleteOperationOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationOptions for DeleteOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(delete_running_tasks) = self.delete_running_tasks {
            query.push(("deleteRunningTasks", delete_running_tasks.to_string()));
        }
        query
    }
}

impl ServiceResourceClient {
    /// Build a client with its own transport
    pub fn new(options: ClientOptions) -> Result<Self> {
        Ok(Self::from_client(&ArmClient::new(options)?))
    }

    /// Share an existing client's transport, pinned to this API version
    pub fn from_client(client: &ArmClient) -> Self {
        Self {
            client: client.with_api_version(API_VERSION),
        }
    }

    pub fn client(&self) -> &ArmClient {
        &self.client
    }

    // =========================================================================
    // Services
    // =========================================================================

    /// Get a Data Migration service
    pub async fn services_get(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
    ) -> Result<Response<DataMigrationService>> {
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, id.id(), &[StatusCode::OK]))?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }

    /// Create or update a service. Updates only change the SKU and tags.
    pub async fn services_create_or_update(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
        input: &DataMigrationService,
    ) -> Result<LongRunningResponse<DataMigrationService>> {
        let mut request = self.client.new_request(RequestOptions::new(
            Method::PUT,
            id.id(),
            &[StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED],
        ))?;
        request.marshal(input)?;
        let response = request.execute(ctx).await?;
        LongRunningResponse::from_http(response, &self.client)
    }

    /// Create or update a service and wait for provisioning to finish
    pub async fn services_create_or_update_then_poll(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
        input: &DataMigrationService,
    ) -> Result<()> {
        let mut result = self
            .services_create_or_update(ctx, id, input)
            .await
            .map_err(|e| Error::performing("ServicesCreateOrUpdate", e))?;
        result
            .poller
            .poll_until_done(ctx)
            .await
            .map_err(|e| Error::polling("ServicesCreateOrUpdate", e))
    }

    /// Start deleting a service
    pub async fn services_delete(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
        options: DeleteOperationOptions,
    ) -> Result<LongRunningResponse<()>> {
        let request = self.client.new_request(
            RequestOptions::new(
                Method::DELETE,
                id.id(),
                &[StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT],
            )
            .with_options(&options),
        )?;
        let response = request.execute(ctx).await?;
        LongRunningResponse::without_model(response, &self.client)
    }

    /// Delete a service and wait until it is gone
    pub async fn services_delete_then_poll(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
        options: DeleteOperationOptions,
    ) -> Result<()> {
        let mut result = self
            .services_delete(ctx, id, options)
            .await
            .map_err(|e| Error::performing("ServicesDelete", e))?;
        result
            .poller
            .poll_until_done(ctx)
            .await
            .map_err(|e| Error::polling("ServicesDelete", e))
    }

    /// Start a stopped service
    pub async fn services_start(&self, ctx: &CancellationToken, id: &ServiceId) -> Result<LongRunningResponse<()>> {
        self.service_action(ctx, id, "start").await
    }

    /// Start a service and wait until it is running
    pub async fn services_start_then_poll(&self, ctx: &CancellationToken, id: &ServiceId) -> Result<()> {
        let mut result = self
            .services_start(ctx, id)
            .await
            .map_err(|e| Error::performing("ServicesStart", e))?;
        result
            .poller
            .poll_until_done(ctx)
            .await
            .map_err(|e| Error::polling("ServicesStart", e))
    }

    /// Stop a running service; running tasks keep their state
    pub async fn services_stop(&self, ctx: &CancellationToken, id: &ServiceId) -> Result<LongRunningResponse<()>> {
        self.service_action(ctx, id, "stop").await
    }

    /// Stop a service and wait until it has stopped
    pub async fn services_stop_then_poll(&self, ctx: &CancellationToken, id: &ServiceId) -> Result<()> {
        let mut result = self
            .services_stop(ctx, id)
            .await
            .map_err(|e| Error::performing("ServicesStop", e))?;
        result
            .poller
            .poll_until_done(ctx)
            .await
            .map_err(|e| Error::polling("ServicesStop", e))
    }

    async fn service_action(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
        action: &str,
    ) -> Result<LongRunningResponse<()>> {
        let request = self.client.new_request(RequestOptions::new(
            Method::POST,
            format!("{}/{}", id.id(), action),
            &[StatusCode::OK, StatusCode::ACCEPTED],
        ))?;
        let response = request.execute(ctx).await?;
        LongRunningResponse::without_model(response, &self.client)
    }

    /// Health check of the service's worker
    pub async fn services_check_status(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
    ) -> Result<Response<DataMigrationServiceStatusResponse>> {
        let request = self.client.new_request(RequestOptions::new(
            Method::POST,
            format!("{}/checkStatus", id.id()),
            &[StatusCode::OK],
        ))?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }

    /// Services in a subscription, every page merged
    pub async fn services_list(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
    ) -> Result<Response<Vec<DataMigrationService>>> {
        let path = format!("{}/providers/Microsoft.DataMigration/services", id.id());
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, path, &[StatusCode::OK]).paged())?;
        let response = request.execute_paged(ctx).await?;
        Response::from_paged(response)
    }

    /// All services in a subscription
    pub async fn services_list_complete(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
    ) -> Result<ListCompleteResult<DataMigrationService>> {
        self.services_list_complete_matching_predicate(ctx, id, ServiceOperationPredicate::default())
            .await
    }

    /// Services in a subscription that match `predicate`
    pub async fn services_list_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
        predicate: ServiceOperationPredicate,
    ) -> Result<ListCompleteResult<DataMigrationService>> {
        let response = self.services_list(ctx, id).await.map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }

    /// Services in a resource group, every page merged
    pub async fn services_list_by_resource_group(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
    ) -> Result<Response<Vec<DataMigrationService>>> {
        let path = format!("{}/providers/Microsoft.DataMigration/services", id.id());
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, path, &[StatusCode::OK]).paged())?;
        let response = request.execute_paged(ctx).await?;
        Response::from_paged(response)
    }

    /// All services in a resource group
    pub async fn services_list_by_resource_group_complete(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
    ) -> Result<ListCompleteResult<DataMigrationService>> {
        self.services_list_by_resource_group_complete_matching_predicate(
            ctx,
            id,
            ServiceOperationPredicate::default(),
        )
        .await
    }

    /// Services in a resource group that match `predicate`
    pub async fn services_list_by_resource_group_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
        predicate: ServiceOperationPredicate,
    ) -> Result<ListCompleteResult<DataMigrationService>> {
        let response = self
            .services_list_by_resource_group(ctx, id)
            .await
            .map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }

    /// SKUs the service can be scaled to
    pub async fn services_list_skus(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
    ) -> Result<Response<Vec<AvailableServiceSku>>> {
        let request = self.client.new_request(
            RequestOptions::new(Method::GET, format!("{}/skus", id.id()), &[StatusCode::OK]).paged(),
        )?;
        let response = request.execute_paged(ctx).await?;
        Response::from_paged(response)
    }

    /// Every SKU the service can be scaled to
    pub async fn services_list_skus_complete(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
    ) -> Result<ListCompleteResult<AvailableServiceSku>> {
        self.services_list_skus_complete_matching_predicate(ctx, id, AvailableServiceSkuOperationPredicate::default())
            .await
    }

    /// SKUs that match `predicate`
    pub async fn services_list_skus_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
        predicate: AvailableServiceSkuOperationPredicate,
    ) -> Result<ListCompleteResult<AvailableServiceSku>> {
        let response = self.services_list_skus(ctx, id).await.map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }

    // =========================================================================
    // Projects
    // =========================================================================

    /// Get a migration project
    pub async fn projects_get(&self, ctx: &CancellationToken, id: &ProjectId) -> Result<Response<Project>> {
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, id.id(), &[StatusCode::OK]))?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }

    /// Projects of a service, every page merged
    pub async fn projects_list(&self, ctx: &CancellationToken, id: &ServiceId) -> Result<Response<Vec<Project>>> {
        let request = self.client.new_request(
            RequestOptions::new(Method::GET, format!("{}/projects", id.id()), &[StatusCode::OK]).paged(),
        )?;
        let response = request.execute_paged(ctx).await?;
        Response::from_paged(response)
    }

    /// All projects of a service
    pub async fn projects_list_complete(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
    ) -> Result<ListCompleteResult<Project>> {
        self.projects_list_complete_matching_predicate(ctx, id, ProjectOperationPredicate::default())
            .await
    }

    /// Projects of a service that match `predicate`
    pub async fn projects_list_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &ServiceId,
        predicate: ProjectOperationPredicate,
    ) -> Result<ListCompleteResult<Project>> {
        let response = self.projects_list(ctx, id).await.map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceOperationPredicate {
    pub etag: Option<String>,
    pub id: Option<String>,
    pub kind: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub type_: Option<String>,
}

impl Predicate<DataMigrationService> for ServiceOperationPredicate {
    fn matches(&self, input: &DataMigrationService) -> bool {
        field_matches(&self.etag, input.etag.as_deref())
            && field_matches(&self.id, input.id.as_deref())
            && field_matches(&self.kind, input.kind.as_deref())
            && field_matches(&self.location, Some(input.location.as_str()))
            && field_matches(&self.name, input.name.as_deref())
            && field_matches(&self.type_, input.type_.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AvailableServiceSkuOperationPredicate {
    pub resource_type: Option<String>,
}

impl Predicate<AvailableServiceSku> for AvailableServiceSkuOperationPredicate {
    fn matches(&self, input: &AvailableServiceSku) -> bool {
        field_matches(&self.resource_type, input.resource_type.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectOperationPredicate {
    pub etag: Option<String>,
    pub id: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub type_: Option<String>,
}

impl Predicate<Project> for ProjectOperationPredicate {
    fn matches(&self, input: &Project) -> bool {
        field_matches(&self.etag, input.etag.as_deref())
            && field_matches(&self.id, input.id.as_deref())
            && field_matches(&self.location, input.location.as_deref())
            && field_matches(&self.name, input.name.as_deref())
            && field_matches(&self.type_, input.type_.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(name: &str, location: &str) -> DataMigrationService {
        DataMigrationService {
            name: Some(name.to_string()),
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let predicate = ServiceOperationPredicate::default();
        assert!(predicate.matches(&service("dms1", "westeurope")));
        assert!(predicate.matches(&DataMigrationService::default()));
    }

    #[test]
    fn every_set_field_must_match() {
        let predicate = ServiceOperationPredicate {
            name: Some("dms1".to_string()),
            location: Some("westeurope".to_string()),
            ..Default::default()
        };
        assert!(predicate.matches(&service("dms1", "westeurope")));
        assert!(!predicate.matches(&service("dms1", "northeurope")));
        assert!(!predicate.matches(&service("dms2", "westeurope")));

        let predicate = ServiceOperationPredicate {
            etag: Some("W/\"1\"".to_string()),
            ..Default::default()
        };
        assert!(!predicate.matches(&service("dms1", "westeurope")));
    }

    #[test]
    fn delete_options_only_send_what_is_set() {
        assert!(DeleteOperationOptions::new().to_query().is_empty());
        let options = DeleteOperationOptions {
            delete_running_tasks: Some(true),
        };
        assert_eq!(options.to_query(), vec![("deleteRunningTasks", "true".to_string())]);
    }
}
