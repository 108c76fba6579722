//! Mapping Store abstraction
//!
//! Handlers never talk to a database directly. They go through
//! [`MappingStore`], which reports a lookup as found (`Some`), not found
//! (`None`) or failed (`Err`).

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::UrlMapping;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] redb::Error),
    #[error("record encoding error: {0}")]
    Codec(#[from] serde_json::Error),
    /// Transient failure reaching a remote backend. The embedded redb store
    /// reports through `Database` instead; this is for network-backed stores.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait MappingStore: Send + Sync + 'static {
    /// Writes a mapping, overwriting any existing record with the same short id.
    async fn put(&self, mapping: &UrlMapping) -> Result<()>;

    /// Point lookup by short id. Returns `None` if no mapping exists.
    async fn get(&self, short_id: &str) -> Result<Option<UrlMapping>>;
}
