//! Shared state and configuration for REST handlers.

use std::sync::Arc;

use vitrina_catalog::ProductCatalog;

/// Server-side configuration for the catalog REST API.
#[derive(Debug, Clone, Default)]
pub struct RestConfig {
    /// Optional concurrency limit applied to the whole router.
    pub concurrency_limit: Option<usize>,
}

/// Shared state for catalog REST handlers.
#[derive(Clone)]
pub struct RestState {
    /// The product catalog. Read-only after construction, so a plain `Arc`
    /// is all the sharing machinery concurrent requests need.
    pub catalog: Arc<ProductCatalog>,
    /// Server-side configuration.
    pub config: RestConfig,
}

impl RestState {
    /// Creates state over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self {
            catalog,
            config: RestConfig::default(),
        }
    }

    /// Creates state over the static seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Arc::new(ProductCatalog::seed()))
    }

    /// Overrides the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RestConfig) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for RestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestState")
            .field("catalog_len", &self.catalog.len())
            .field("config", &self.config)
            .finish()
    }
}
