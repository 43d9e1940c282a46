//! Typed Azure Resource Manager client
//!
//! Covers three control-plane API groups:
//!
//! - [`datamigration`] - Database Migration Service (`2021-06-30`)
//! - [`elasticsan`] - Elastic SAN (`2023-01-01`)
//! - [`network`] - application gateway WAF policies (`2023-11-01`)
//!
//! Every group executes through the shared [`client::ArmClient`]. Bearer
//! tokens are passed in through [`client::ClientOptions`]; acquiring one is
//! left to the caller.

mod enums;

pub mod client;
pub mod config;
pub mod dates;
pub mod datamigration;
pub mod elasticsan;
pub mod error;
pub mod network;
pub mod polymorphic;
pub mod resourceids;

pub use error::{Error, Result};
