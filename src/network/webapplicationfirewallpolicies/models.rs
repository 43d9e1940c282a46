use super::constants::{
    ActionType, ApplicationGatewayFirewallRateLimitDuration, ApplicationGatewayFirewallUserSessionVariable,
    ManagedRuleEnabledState, OwaspCrsExclusionEntryMatchVariable, OwaspCrsExclusionEntrySelectorMatchOperator,
    ProvisioningState, ScrubbingRuleEntryMatchOperator, ScrubbingRuleEntryMatchVariable, ScrubbingRuleEntryState,
    WebApplicationFirewallAction, WebApplicationFirewallEnabledState, WebApplicationFirewallMatchVariable,
    WebApplicationFirewallMode, WebApplicationFirewallOperator, WebApplicationFirewallPolicyResourceState,
    WebApplicationFirewallRuleType, WebApplicationFirewallScrubbingState, WebApplicationFirewallState,
    WebApplicationFirewallTransform,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Defines a web application firewall policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebApplicationFirewallPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<WebApplicationFirewallPolicyPropertiesFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

impl WebApplicationFirewallPolicy {
    pub fn provisioning_state(&self) -> Option<&ProvisioningState> {
        self.properties.as_ref()?.provisioning_state.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApplicationFirewallPolicyPropertiesFormat {
    /// Gateways the policy is attached to; read-only
    #[serde(skip_serializing)]
    pub application_gateways: Option<Vec<SubResource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_rules: Option<Vec<WebApplicationFirewallCustomRule>>,
    #[serde(skip_serializing)]
    pub http_listeners: Option<Vec<SubResource>>,
    pub managed_rules: ManagedRulesDefinition,
    #[serde(skip_serializing)]
    pub path_based_rules: Option<Vec<SubResource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_settings: Option<PolicySettings>,
    #[serde(skip_serializing)]
    pub provisioning_state: Option<ProvisioningState>,
    #[serde(skip_serializing)]
    pub resource_state: Option<WebApplicationFirewallPolicyResourceState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApplicationFirewallCustomRule {
    pub action: WebApplicationFirewallAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by_user_session: Option<Vec<GroupByUserSession>>,
    pub match_conditions: Vec<MatchCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub priority: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_duration: Option<ApplicationGatewayFirewallRateLimitDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_threshold: Option<i64>,
    pub rule_type: WebApplicationFirewallRuleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<WebApplicationFirewallState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupByUserSession {
    pub group_by_variables: Vec<GroupByVariable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupByVariable {
    pub variable_name: ApplicationGatewayFirewallUserSessionVariable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCondition {
    pub match_values: Vec<String>,
    pub match_variables: Vec<MatchVariable>,
    /// Wire name is misspelled by the service
    #[serde(rename = "negationConditon", skip_serializing_if = "Option::is_none")]
    pub negation_condition: Option<bool>,
    pub operator: WebApplicationFirewallOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transforms: Option<Vec<WebApplicationFirewallTransform>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchVariable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    pub variable_name: WebApplicationFirewallMatchVariable,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRulesDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<OwaspCrsExclusionEntry>>,
    pub managed_rule_sets: Vec<ManagedRuleSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwaspCrsExclusionEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_managed_rule_sets: Option<Vec<ExclusionManagedRuleSet>>,
    pub match_variable: OwaspCrsExclusionEntryMatchVariable,
    pub selector: String,
    pub selector_match_operator: OwaspCrsExclusionEntrySelectorMatchOperator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionManagedRuleSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_groups: Option<Vec<ExclusionManagedRuleGroup>>,
    pub rule_set_type: String,
    pub rule_set_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionManagedRuleGroup {
    pub rule_group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ExclusionManagedRule>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionManagedRule {
    pub rule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRuleSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_group_overrides: Option<Vec<ManagedRuleGroupOverride>>,
    pub rule_set_type: String,
    pub rule_set_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRuleGroupOverride {
    pub rule_group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ManagedRuleOverride>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRuleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionType>,
    pub rule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ManagedRuleEnabledState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_block_response_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_block_response_status_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_upload_enforcement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_upload_limit_in_mb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_challenge_cookie_expiration_in_mins: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_scrubbing: Option<PolicySettingsLogScrubbing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_request_body_size_in_kb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WebApplicationFirewallMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body_enforcement: Option<bool>,
    #[serde(rename = "requestBodyInspectLimitInKB", skip_serializing_if = "Option::is_none")]
    pub request_body_inspect_limit_in_kb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<WebApplicationFirewallEnabledState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySettingsLogScrubbing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrubbing_rules: Option<Vec<WebApplicationFirewallScrubbingRules>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<WebApplicationFirewallScrubbingState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApplicationFirewallScrubbingRules {
    pub match_variable: ScrubbingRuleEntryMatchVariable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    pub selector_match_operator: ScrubbingRuleEntryMatchOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ScrubbingRuleEntryState>,
}
