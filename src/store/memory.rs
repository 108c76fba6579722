use async_trait::async_trait;
use dashmap::DashMap;

use crate::model::UrlMapping;
use crate::store::{MappingStore, Result};

/// In-memory Mapping Store backed by a `DashMap`.
///
/// Nothing survives a restart. Used in tests and for throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    storage: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn put(&self, mapping: &UrlMapping) -> Result<()> {
        self.storage
            .insert(mapping.short_id.clone(), mapping.long_url.clone());
        Ok(())
    }

    async fn get(&self, short_id: &str) -> Result<Option<UrlMapping>> {
        Ok(self
            .storage
            .get(short_id)
            .map(|long_url| UrlMapping::new(short_id, long_url.value().as_str())))
    }
}
