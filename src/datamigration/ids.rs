//! Data Migration resource identifiers

use crate::resourceids::{ParseError, ParseResult, ResourceGroupId, ResourceId, Segment};
use std::fmt;

const PROVIDER: &str = "Microsoft.DataMigration";

fn service_segments() -> Vec<Segment> {
    vec![
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftDataMigration", PROVIDER),
        Segment::static_segment("staticServices", "services"),
        Segment::user_specified("serviceName", "serviceValue"),
    ]
}

/// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.DataMigration/services/{serviceName}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub service_name: String,
}

impl ServiceId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            service_name: service_name.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_id(input)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_id_insensitively(input)
    }

    pub fn resource_group(&self) -> ResourceGroupId {
        ResourceGroupId::new(self.subscription_id.clone(), self.resource_group_name.clone())
    }
}

impl ResourceId for ServiceId {
    const TYPE_NAME: &'static str = "Service";

    fn segments() -> Vec<Segment> {
        service_segments()
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            service_name: result.require("serviceName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/{}/services/{}",
            self.subscription_id, self.resource_group_name, PROVIDER, self.service_name
        )
    }

    fn components(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Subscription", self.subscription_id.as_str()),
            ("Resource Group Name", self.resource_group_name.as_str()),
            ("Service Name", self.service_name.as_str()),
        ]
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// A migration project inside a service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub service_name: String,
    pub project_name: String,
}

impl ProjectId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        service_name: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            service_name: service_name.into(),
            project_name: project_name.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_id(input)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_id_insensitively(input)
    }

    pub fn service(&self) -> ServiceId {
        ServiceId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.service_name.clone(),
        )
    }
}

impl ResourceId for ProjectId {
    const TYPE_NAME: &'static str = "Project";

    fn segments() -> Vec<Segment> {
        let mut segments = service_segments();
        segments.push(Segment::static_segment("staticProjects", "projects"));
        segments.push(Segment::user_specified("projectName", "projectValue"));
        segments
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            service_name: result.require("serviceName")?,
            project_name: result.require("projectName")?,
        })
    }

    fn id(&self) -> String {
        format!("{}/projects/{}", self.service().id(), self.project_name)
    }

    fn components(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Subscription", self.subscription_id.as_str()),
            ("Resource Group Name", self.resource_group_name.as_str()),
            ("Service Name", self.service_name.as_str()),
            ("Project Name", self.project_name.as_str()),
        ]
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// A task inside a migration project
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub service_name: String,
    pub project_name: String,
    pub task_name: String,
}

impl TaskId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        service_name: impl Into<String>,
        project_name: impl Into<String>,
        task_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            service_name: service_name.into(),
            project_name: project_name.into(),
            task_name: task_name.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_id(input)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_id_insensitively(input)
    }

    pub fn project(&self) -> ProjectId {
        ProjectId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.service_name.clone(),
            self.project_name.clone(),
        )
    }
}

impl ResourceId for TaskId {
    const TYPE_NAME: &'static str = "Task";

    fn segments() -> Vec<Segment> {
        let mut segments = ProjectId::segments();
        segments.push(Segment::static_segment("staticTasks", "tasks"));
        segments.push(Segment::user_specified("taskName", "taskValue"));
        segments
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            service_name: result.require("serviceName")?,
            project_name: result.require("projectName")?,
            task_name: result.require("taskName")?,
        })
    }

    fn id(&self) -> String {
        format!("{}/tasks/{}", self.project().id(), self.task_name)
    }

    fn components(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Subscription", self.subscription_id.as_str()),
            ("Resource Group Name", self.resource_group_name.as_str()),
            ("Service Name", self.service_name.as_str()),
            ("Project Name", self.project_name.as_str()),
            ("Task Name", self.task_name.as_str()),
        ]
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::validate_resource_id;

    const TASK: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.DataMigration/services/serviceValue/projects/projectValue/tasks/taskValue";

    #[test]
    fn service_id_formats() {
        let id = ServiceId::new("sub1", "rg1", "dms1");
        assert_eq!(
            id.to_string(),
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DataMigration/services/dms1"
        );
        assert_eq!(ServiceId::parse(&id.id()), Ok(id));
    }

    #[test]
    fn task_id_round_trips() {
        let id = TaskId::parse(TASK).unwrap();
        assert_eq!(id.service_name, "serviceValue");
        assert_eq!(id.project_name, "projectValue");
        assert_eq!(id.task_name, "taskValue");
        assert_eq!(id.id(), TASK);
    }

    #[test]
    fn every_truncated_task_id_fails() {
        let parts: Vec<&str> = TASK.trim_start_matches('/').split('/').collect();
        for len in 0..parts.len() {
            let input = format!("/{}", parts[..len].join("/"));
            assert!(TaskId::parse(&input).is_err(), "{input} should not parse");
        }
    }

    #[test]
    fn task_id_reports_missing_task_name() {
        let input = TASK.trim_end_matches("/taskValue");
        let err = TaskId::parse(input).unwrap_err();
        assert!(matches!(err, ParseError::SegmentNotSpecified { segment: "taskName", .. }));
    }

    #[test]
    fn service_emitted_casing_parses_insensitively() {
        let upper = "/SUBSCRIPTIONS/sub1/RESOURCEGROUPS/rg1/PROVIDERS/MICROSOFT.DATAMIGRATION/SERVICES/Dms1";
        assert!(ServiceId::parse(upper).is_err());

        let id = ServiceId::parse_insensitively(upper).unwrap();
        assert_eq!(id, ServiceId::new("sub1", "rg1", "Dms1"));
        assert_eq!(
            id.id(),
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DataMigration/services/Dms1"
        );
    }

    #[test]
    fn project_id_describes_components() {
        let id = ProjectId::new("sub1", "rg1", "dms1", "proj1");
        assert_eq!(
            id.describe(),
            "Project (Subscription: \"sub1\"\nResource Group Name: \"rg1\"\nService Name: \"dms1\"\nProject Name: \"proj1\")"
        );
        assert!(validate_resource_id::<ProjectId>(&id.id(), "project_id").is_empty());
        assert_eq!(validate_resource_id::<TaskId>(&id.id(), "task_id").len(), 1);
    }
}
