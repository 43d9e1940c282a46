//! Azure networking (`Microsoft.Network`)

pub mod webapplicationfirewallpolicies;
