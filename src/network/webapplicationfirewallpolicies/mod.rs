//! Application gateway web application firewall policies

pub mod client;
pub mod constants;
pub mod ids;
pub mod models;

pub use client::{WebApplicationFirewallPoliciesClient, WebApplicationFirewallPolicyOperationPredicate};
pub use ids::ApplicationGatewayWebApplicationFirewallPolicyId;

pub const API_VERSION: &str = "2023-11-01";
