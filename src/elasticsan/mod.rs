//! Azure Elastic SAN (`Microsoft.ElasticSan`)

pub mod constants;
pub mod elasticsans;
pub mod ids;
pub mod models;

pub use elasticsans::{ElasticSanOperationPredicate, ElasticSansClient};
pub use ids::ElasticSanId;

pub const API_VERSION: &str = "2023-01-01";
