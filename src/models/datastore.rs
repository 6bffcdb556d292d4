//! Datastore snapshot model handed to the hosting layer.

use serde::{Deserialize, Serialize};

use super::{ExchangeRecord, Post, Product};

/// The root datastore containing all application data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub schema_version: i32,
    pub generated_at: String,
    pub revision_id: i64,
    pub posts: Vec<Post>,
    pub products: Vec<Product>,
    pub records: Vec<ExchangeRecord>,
    pub balance: u32,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}
