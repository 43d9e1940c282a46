use crate::resourceids::{ParseError, ParseResult, ResourceGroupId, ResourceId, Segment};
use std::fmt;

/// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Network/applicationGatewayWebApplicationFirewallPolicies/{policyName}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationGatewayWebApplicationFirewallPolicyId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub policy_name: String,
}

impl ApplicationGatewayWebApplicationFirewallPolicyId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        policy_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            policy_name: policy_name.into(),
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

impl ResourceId for ApplicationGatewayWebApplicationFirewallPolicyId {
    const TYPE_NAME: &'static str = "Application Gateway Web Application Firewall Policy";

    fn segments() -> Vec<Segment> {
        vec![
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
            Segment::static_segment(
                "staticApplicationGatewayWebApplicationFirewallPolicies",
                "applicationGatewayWebApplicationFirewallPolicies",
            ),
            Segment::user_specified("policyName", "policyValue"),
        ]
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            policy_name: result.require("policyName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/applicationGatewayWebApplicationFirewallPolicies/{}",
            self.subscription_id, self.resource_group_name, self.policy_name
        )
    }

    fn components(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Subscription", self.subscription_id.as_str()),
            ("Resource Group Name", self.resource_group_name.as_str()),
            ("Policy Name", self.policy_name.as_str()),
        ]
    }
}

impl fmt::Display for ApplicationGatewayWebApplicationFirewallPolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/applicationGatewayWebApplicationFirewallPolicies/waf1";

    #[test]
    fn parses_policy_id() {
        let id = ApplicationGatewayWebApplicationFirewallPolicyId::parse(ID).unwrap();
        assert_eq!(id.policy_name, "waf1");
        assert_eq!(id.id(), ID);
        assert_eq!(id.resource_group().resource_group_name, "rg1");
    }

    #[test]
    fn missing_policy_name_is_rejected() {
        let input = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/applicationGatewayWebApplicationFirewallPolicies";
        assert!(ApplicationGatewayWebApplicationFirewallPolicyId::parse(input).is_err());
    }

    #[test]
    fn insensitive_parse_accepts_lowercase_segments() {
        let id = ApplicationGatewayWebApplicationFirewallPolicyId::parse_insensitively(&ID.to_lowercase()).unwrap();
        assert_eq!(id.policy_name, "waf1");
    }
}
