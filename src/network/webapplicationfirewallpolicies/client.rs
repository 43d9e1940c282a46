use super::ids::ApplicationGatewayWebApplicationFirewallPolicyId;
use super::models::WebApplicationFirewallPolicy;
use super::API_VERSION;
use crate::client::predicate::field_matches;
use crate::client::{ArmClient, ClientOptions, ListCompleteResult, LongRunningResponse, Predicate, RequestOptions, Response};
use crate::error::{Error, Result};
use crate::resourceids::{ResourceGroupId, ResourceId, SubscriptionId};
use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;

const PROVIDER_PATH: &str = "/providers/Microsoft.Network/applicationGatewayWebApplicationFirewallPolicies";

/// Client for application gateway web application firewall policies
#[derive(Clone)]
pub struct WebApplicationFirewallPoliciesClient {
    client: ArmClient,
}

impl WebApplicationFirewallPoliciesClient {
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

    /// Get a WAF policy
    pub async fn get(
        &self,
        ctx: &CancellationToken,
        id: &ApplicationGatewayWebApplicationFirewallPolicyId,
    ) -> Result<Response<WebApplicationFirewallPolicy>> {
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, id.id(), &[StatusCode::OK]))?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }

    /// Synchronous PUT; the service answers with the stored policy
    pub async fn create_or_update(
        &self,
        ctx: &CancellationToken,
        id: &ApplicationGatewayWebApplicationFirewallPolicyId,
        input: &WebApplicationFirewallPolicy,
    ) -> Result<Response<WebApplicationFirewallPolicy>> {
        let mut request = self.client.new_request(RequestOptions::new(
            Method::PUT,
            id.id(),
            &[StatusCode::OK, StatusCode::CREATED],
        ))?;
        request.marshal(input)?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }

    /// Start deleting a WAF policy
    pub async fn delete(
        &self,
        ctx: &CancellationToken,
        id: &ApplicationGatewayWebApplicationFirewallPolicyId,
    ) -> Result<LongRunningResponse<()>> {
        let request = self.client.new_request(RequestOptions::new(
            Method::DELETE,
            id.id(),
            &[StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT],
        ))?;
        let response = request.execute(ctx).await?;
        LongRunningResponse::without_model(response, &self.client)
    }

    /// Delete a WAF policy and wait until it is gone
    pub async fn delete_then_poll(
        &self,
        ctx: &CancellationToken,
        id: &ApplicationGatewayWebApplicationFirewallPolicyId,
    ) -> Result<()> {
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

    /// Policies in a resource group
    pub async fn list(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
    ) -> Result<Response<Vec<WebApplicationFirewallPolicy>>> {
        self.list_at(ctx, format!("{}{}", id.id(), PROVIDER_PATH)).await
    }

    /// All policies in a resource group
    pub async fn list_complete(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
    ) -> Result<ListCompleteResult<WebApplicationFirewallPolicy>> {
        self.list_complete_matching_predicate(ctx, id, WebApplicationFirewallPolicyOperationPredicate::default())
            .await
    }

    /// Policies in a resource group that match `predicate`
    pub async fn list_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &ResourceGroupId,
        predicate: WebApplicationFirewallPolicyOperationPredicate,
    ) -> Result<ListCompleteResult<WebApplicationFirewallPolicy>> {
        let response = self.list(ctx, id).await.map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }

    /// Policies across a whole subscription
    pub async fn list_all(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
    ) -> Result<Response<Vec<WebApplicationFirewallPolicy>>> {
        self.list_at(ctx, format!("{}{}", id.id(), PROVIDER_PATH)).await
    }

    /// All policies in a subscription
    pub async fn list_all_complete(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
    ) -> Result<ListCompleteResult<WebApplicationFirewallPolicy>> {
        self.list_all_complete_matching_predicate(ctx, id, WebApplicationFirewallPolicyOperationPredicate::default())
            .await
    }

    /// Policies in a subscription that match `predicate`
    pub async fn list_all_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &SubscriptionId,
        predicate: WebApplicationFirewallPolicyOperationPredicate,
    ) -> Result<ListCompleteResult<WebApplicationFirewallPolicy>> {
        let response = self.list_all(ctx, id).await.map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }

    async fn list_at(
        &self,
        ctx: &CancellationToken,
        path: String,
    ) -> Result<Response<Vec<WebApplicationFirewallPolicy>>> {
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, path, &[StatusCode::OK]).paged())?;
        let response = request.execute_paged(ctx).await?;
        Response::from_paged(response)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WebApplicationFirewallPolicyOperationPredicate {
    pub etag: Option<String>,
    pub id: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub type_: Option<String>,
}

impl Predicate<WebApplicationFirewallPolicy> for WebApplicationFirewallPolicyOperationPredicate {
    fn matches(&self, input: &WebApplicationFirewallPolicy) -> bool {
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

    fn policy(name: &str, location: &str) -> WebApplicationFirewallPolicy {
        WebApplicationFirewallPolicy {
            name: Some(name.to_string()),
            location: Some(location.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn predicate_filters_on_location() {
        let predicate = WebApplicationFirewallPolicyOperationPredicate {
            location: Some("westeurope".to_string()),
            ..Default::default()
        };
        assert!(predicate.matches(&policy("a", "westeurope")));
        assert!(!predicate.matches(&policy("b", "eastus")));
    }

    #[test]
    fn predicate_rejects_missing_etag_when_set() {
        let predicate = WebApplicationFirewallPolicyOperationPredicate {
            etag: Some("W/\"1\"".to_string()),
            ..Default::default()
        };
        assert!(!predicate.matches(&policy("a", "westeurope")));
    }
}
