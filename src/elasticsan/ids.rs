use crate::resourceids::{ParseError, ParseResult, ResourceGroupId, ResourceId, Segment};
use std::fmt;

/// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.ElasticSan/elasticSans/{elasticSanName}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElasticSanId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub elastic_san_name: String,
}

impl ElasticSanId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        elastic_san_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            elastic_san_name: elastic_san_name.into(),
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

impl ResourceId for ElasticSanId {
    const TYPE_NAME: &'static str = "Elastic San";

    fn segments() -> Vec<Segment> {
        vec![
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::resource_provider("staticMicrosoftElasticSan", "Microsoft.ElasticSan"),
            Segment::static_segment("staticElasticSans", "elasticSans"),
            Segment::user_specified("elasticSanName", "elasticSanValue"),
        ]
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            elastic_san_name: result.require("elasticSanName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ElasticSan/elasticSans/{}",
            self.subscription_id, self.resource_group_name, self.elastic_san_name
        )
    }

    fn components(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Subscription", self.subscription_id.as_str()),
            ("Resource Group Name", self.resource_group_name.as_str()),
            ("Elastic San Name", self.elastic_san_name.as_str()),
        ]
    }
}

impl fmt::Display for ElasticSanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let id = ElasticSanId::new("sub1", "rg1", "san1");
        assert_eq!(
            id.id(),
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.ElasticSan/elasticSans/san1"
        );
        assert_eq!(ElasticSanId::parse(&id.id()), Ok(id.clone()));
        assert_eq!(id.resource_group().id(), "/subscriptions/sub1/resourceGroups/rg1");
    }

    #[test]
    fn wrong_provider_is_rejected() {
        let err =
            ElasticSanId::parse("/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Storage/elasticSans/san1")
                .unwrap_err();
        assert!(err.to_string().contains("staticMicrosoftElasticSan"));
    }

    #[test]
    fn lowercase_server_ids_parse_insensitively() {
        let id = ElasticSanId::parse_insensitively(
            "/subscriptions/sub1/resourcegroups/rg1/providers/microsoft.elasticsan/elasticsans/san1",
        )
        .unwrap();
        assert_eq!(id.elastic_san_name, "san1");
    }
}
