//! The mapping service: the write path (shorten) and the read path (resolve)
//!
//! Stateless apart from its injected collaborators; every call does exactly
//! one store operation.

use std::sync::Arc;

use crate::error::Result;
use crate::generator::IdGenerator;
use crate::model::UrlMapping;
use crate::store::MappingStore;

/// Outcome of a resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A mapping exists; redirect to this long URL.
    Redirect(String),
    NotFound,
}

#[derive(Clone)]
pub struct MappingService {
    store: Arc<dyn MappingStore>,
    generator: Arc<dyn IdGenerator>,
}

impl MappingService {
    pub fn new(store: Arc<dyn MappingStore>, generator: Arc<dyn IdGenerator>) -> Self {
        Self { store, generator }
    }

    /// Stores `long_url` under a fresh short id and returns `https://<host>/<id>`.
    ///
    /// Neither the URL nor the host is validated. A colliding id overwrites
    /// the previous mapping.
    pub async fn shorten(&self, long_url: String, host: &str) -> Result<String> {
        let mapping = UrlMapping::new(self.generator.generate(), long_url);
        self.store.put(&mapping).await?;

        tracing::info!(short_id = %mapping.short_id, long_url = %mapping.long_url, "created mapping");
        Ok(format!("https://{}/{}", host, mapping.short_id))
    }

    /// Looks up `short_id` exactly as given.
    pub async fn resolve(&self, short_id: &str) -> Result<Resolution> {
        match self.store.get(short_id).await? {
            Some(mapping) => {
                tracing::info!(short_id, long_url = %mapping.long_url, "resolved mapping");
                Ok(Resolution::Redirect(mapping.long_url))
            }
            None => {
                tracing::debug!(short_id, "no mapping for short id");
                Ok(Resolution::NotFound)
            }
        }
    }
}
