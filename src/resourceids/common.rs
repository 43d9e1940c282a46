//! Identifiers shared across API groups

use super::{ParseError, ParseResult, ResourceId, Segment};
use std::fmt;

/// `/subscriptions/{subscriptionId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    pub subscription_id: String,
}

impl SubscriptionId {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_id(input)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_id_insensitively(input)
    }
}

impl ResourceId for SubscriptionId {
    const TYPE_NAME: &'static str = "Subscription";

    fn segments() -> Vec<Segment> {
        vec![
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
        ]
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
        })
    }

    fn id(&self) -> String {
        format!("/subscriptions/{}", self.subscription_id)
    }

    fn components(&self) -> Vec<(&'static str, &str)> {
        vec![("Subscription", self.subscription_id.as_str())]
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceGroupId {
    pub subscription_id: String,
    pub resource_group_name: String,
}

impl ResourceGroupId {
    pub fn new(subscription_id: impl Into<String>, resource_group_name: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_id(input)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_id_insensitively(input)
    }

    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id.clone())
    }
}

impl ResourceId for ResourceGroupId {
    const TYPE_NAME: &'static str = "Resource Group";

    fn segments() -> Vec<Segment> {
        vec![
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName"),
        ]
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}",
            self.subscription_id, self.resource_group_name
        )
    }

    fn components(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Subscription", self.subscription_id.as_str()),
            ("Resource Group Name", self.resource_group_name.as_str()),
        ]
    }
}

impl fmt::Display for ResourceGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
