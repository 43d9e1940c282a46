use super::ids::ElasticSanId;
use super::models::ElasticSan;
use super::API_VERSION;
use crate::client::predicate::field_matches;
use crate::client::{ArmClient, ClientOptions, ListCompleteResult, LongRunningResponse, Predicate, RequestOptions, Response};
use crate::error::{Error, Result};
use crate::resourceids::{ResourceGroupId, ResourceId, SubscriptionId};
use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;

/// Client for Elastic SAN resources
#[derive(Clone)]
pub struct ElasticSansClient {
    client: ArmClient,
}

impl ElasticSansClient {
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

    /// Get an Elastic SAN
    pub async fn get(&self, ctx: &CancellationToken, id: &ElasticSanId) -> Result<Response<ElasticSan>> {
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, id.id(), &[StatusCode::OK]))?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }

    /// Start creating an Elastic SAN; poll the returned poller for the result
    pub async fn create(
        &self,
        ctx: &CancellationToken,
        id: &ElasticSanId,
        input: &ElasticSan,
    ) -> Result<LongRunningResponse<ElasticSan>> {
        let mut request = self.client.new_request(RequestOptions::new(
            Method::PUT,
            id.id(),
            &[StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED],
        ))?;
        request.marshal(input)?;
        let response = request.execute(ctx).await?;
        LongRunningResponse::from_http(response, &self.client)
    }

    /// Create an Elastic SAN and wait for provisioning to finish
    pub async fn create_then_poll(&self, ctx: &CancellationToken, id: &ElasticSanId, input: &ElasticSan) -> Result<()> {
        let mut result = self
            .create(ctx, id, input)
            .await
            .map_err(|e| Error::performing("Create", e))?;
        result
            .poller
            .poll_until_done(ctx)
            .await
            .map_err(|e| Error::polling("Create", e))
    }

    /// Start deleting an Elastic SAN
    pub async fn delete(&self, ctx: &CancellationToken, id: &ElasticSanId) -> Result<LongRunningResponse<()>> {
        let request = self.client.new_request(RequestOptions::new(
            Method::DELETE,
            id.id(),
            &[StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT],
        ))?;
        let response = request.execute(ctx).await?;
        LongRunningResponse::without_model(response, &self.client)
    }

    /// Delete an Elastic SAN and wait until it is gone
    pub async fn delete_then_poll(&self, ctx: &CancellationToken, id: &ElasticSanId) -> Result<()> {
        let mut result = self
            .delete(ctx, id)
            .await
            .map_err(|e| Error::performing("Delete", e))?;
        result
            .poller
            .poll_until_done(ctx)
            .await
            .map_err(|e| Error::polling("Delete", e))
    }

    /// Elastic SANs in a resource group, every page merged
    pub async fn list_by_resource_group(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
    ) -> Result<Response<Vec<ElasticSan>>> {
        self.list(ctx, format!("{}/providers/Microsoft.ElasticSan/elasticSans", id.id()))
            .await
    }

    /// All Elastic SANs in a resource group
    pub async fn list_by_resource_group_complete(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
    ) -> Result<ListCompleteResult<ElasticSan>> {
        self.list_by_resource_group_complete_matching_predicate(ctx, id, ElasticSanOperationPredicate::default())
            .await
    }

    /// Elastic SANs in a resource group that match `predicate`
    pub async fn list_by_resource_group_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
        predicate: ElasticSanOperationPredicate,
    ) -> Result<ListCompleteResult<ElasticSan>> {
        let response = self.list_by_resource_group(ctx, id).await.map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }

    /// Elastic SANs in a subscription, every page merged
    pub async fn list_by_subscription(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
    ) -> Result<Response<Vec<ElasticSan>>> {
        self.list(ctx, format!("{}/providers/Microsoft.ElasticSan/elasticSans", id.id()))
            .await
    }

    /// All Elastic SANs in a subscription
    pub async fn list_by_subscription_complete(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
    ) -> Result<ListCompleteResult<ElasticSan>> {
        self.list_by_subscription_complete_matching_predicate(ctx, id, ElasticSanOperationPredicate::default())
            .await
    }

    /// Elastic SANs in a subscription that match `predicate`
    pub async fn list_by_subscription_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
        predicate: ElasticSanOperationPredicate,
    ) -> Result<ListCompleteResult<ElasticSan>> {
        let response = self.list_by_subscription(ctx, id).await.map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }

    async fn list(&self, ctx: &CancellationToken, path: String) -> Result<Response<Vec<ElasticSan>>> {
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, path, &[StatusCode::OK]).paged())?;
        let response = request.execute_paged(ctx).await?;
        Response::from_paged(response)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ElasticSanOperationPredicate {
    pub id: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub type_: Option<String>,
}

impl Predicate<ElasticSan> for ElasticSanOperationPredicate {
    fn matches(&self, input: &ElasticSan) -> bool {
        field_matches(&self.id, input.id.as_deref())
            && field_matches(&self.location, Some(input.location.as_str()))
            && field_matches(&self.name, input.name.as_deref())
            && field_matches(&self.type_, input.type_.as_deref())
    }
}
