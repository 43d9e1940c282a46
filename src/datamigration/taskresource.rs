//! Data Migration project tasks

use super::ids::{ProjectId, TaskId};
use super::models::{CommandProperties, ProjectTask};
use super::API_VERSION;
use crate::client::predicate::field_matches;
use crate::client::{ArmClient, ClientOptions, ListCompleteResult, OperationOptions, Predicate, RequestOptions, Response};
use crate::error::{Error, Result};
use crate::resourceids::ResourceId;
use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;

/// Client for the tasks of a migration project
#[derive(Clone)]
pub struct ProjectTaskClient {
    client: ArmClient,
}

/// Options for `tasks_get`
#[derive(Debug, Clone, Default)]
pub struct GetOperationOptions {
    /// `$expand` expression, e.g. `output` to include task output
    pub expand: Option<String>,
}

impl OperationOptions for GetOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        self.expand.iter().map(|expand| ("$expand", expand.clone())).collect()
    }
}

/// Options for `tasks_list`
#[derive(Debug, Clone, Default)]
pub struct ListOperationOptions {
    /// Only return tasks of this type, e.g. `Migrate.SqlServer.SqlDb`
    pub task_type: Option<String>,
}

impl OperationOptions for ListOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        self.task_type
            .iter()
            .map(|task_type| ("taskType", task_type.clone()))
            .collect()
    }
}

impl ProjectTaskClient {
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

    /// Get a task; `$expand=output` includes its output
    pub async fn tasks_get(
        &self,
        ctx: &CancellationToken,
        id: &TaskId,
        options: GetOperationOptions,
    ) -> Result<Response<ProjectTask>> {
        let request = self
            .client
            .new_request(RequestOptions::new(Method::GET, id.id(), &[StatusCode::OK]).with_options(&options))?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }

    /// Tasks of a project, every page merged
    pub async fn tasks_list(
        &self,
        ctx: &CancellationToken,
        id: &ProjectId,
        options: ListOperationOptions,
    ) -> Result<Response<Vec<ProjectTask>>> {
        let request = self.client.new_request(
            RequestOptions::new(Method::GET, format!("{}/tasks", id.id()), &[StatusCode::OK])
                .with_options(&options)
                .paged(),
        )?;
        let response = request.execute_paged(ctx).await?;
        Response::from_paged(response)
    }

    /// All tasks of a project
    pub async fn tasks_list_complete(
        &self,
        ctx: &CancellationToken,
        id: &ProjectId,
        options: ListOperationOptions,
    ) -> Result<ListCompleteResult<ProjectTask>> {
        self.tasks_list_complete_matching_predicate(ctx, id, options, ProjectTaskOperationPredicate::default())
            .await
    }

    /// Tasks of a project that match `predicate`
    pub async fn tasks_list_complete_matching_predicate(
        &self,
        ctx: &CancellationToken,
        id: &ProjectId,
        options: ListOperationOptions,
        predicate: ProjectTaskOperationPredicate,
    ) -> Result<ListCompleteResult<ProjectTask>> {
        let response = self.tasks_list(ctx, id, options).await.map_err(Error::loading)?;
        Ok(ListCompleteResult::from_response(response, &predicate))
    }

    /// Ask the service to cancel a task; the returned task reflects the request
    pub async fn tasks_cancel(&self, ctx: &CancellationToken, id: &TaskId) -> Result<Response<ProjectTask>> {
        let request = self.client.new_request(RequestOptions::new(
            Method::POST,
            format!("{}/cancel", id.id()),
            &[StatusCode::OK],
        ))?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }

    /// Send a command to a running task, e.g. complete an online migration
    pub async fn tasks_command(
        &self,
        ctx: &CancellationToken,
        id: &TaskId,
        input: &CommandProperties,
    ) -> Result<Response<CommandProperties>> {
        let mut request = self.client.new_request(RequestOptions::new(
            Method::POST,
            format!("{}/command", id.id()),
            &[StatusCode::OK],
        ))?;
        request.marshal(input)?;
        let response = request.execute(ctx).await?;
        Response::from_http(response)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectTaskOperationPredicate {
    pub etag: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub type_: Option<String>,
}

impl Predicate<ProjectTask> for ProjectTaskOperationPredicate {
    fn matches(&self, input: &ProjectTask) -> bool {
        field_matches(&self.etag, input.etag.as_deref())
            && field_matches(&self.id, input.id.as_deref())
            && field_matches(&self.name, input.name.as_deref())
            && field_matches(&self.type_, input.type_.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_become_query_parameters() {
        assert!(GetOperationOptions::default().to_query().is_empty());
        let get = GetOperationOptions {
            expand: Some("output".to_string()),
        };
        assert_eq!(get.to_query(), vec![("$expand", "output".to_string())]);

        let list = ListOperationOptions {
            task_type: Some("Migrate.MongoDb".to_string()),
        };
        assert_eq!(list.to_query(), vec![("taskType", "Migrate.MongoDb".to_string())]);
    }

    #[test]
    fn task_predicate_compares_names() {
        let task = ProjectTask {
            name: Some("migrate-sales".to_string()),
            ..Default::default()
        };
        let predicate = ProjectTaskOperationPredicate {
            name: Some("migrate-sales".to_string()),
            ..Default::default()
        };
        assert!(predicate.matches(&task));
        assert!(!ProjectTaskOperationPredicate {
            etag: Some("1".to_string()),
            ..Default::default()
        }
        .matches(&task));
    }
}
