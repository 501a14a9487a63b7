//! State

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use storefront_catalog::{
    catalog::{CatalogService, FixtureCatalog, StubCatalog},
    fixtures::FixtureError,
    products::ProductError,
};

use crate::config::catalog::CatalogConfig;

/// Errors raised while building the product catalog at startup.
#[derive(Debug, Error)]
pub(crate) enum CatalogInitError {
    #[error("failed to load products fixture: {0}")]
    Fixture(#[from] FixtureError),

    #[error("built-in product is invalid: {0}")]
    Stub(#[from] ProductError),
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) catalog: Arc<dyn CatalogService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub(crate) fn from_catalog(catalog: impl CatalogService + 'static) -> Arc<Self> {
        Arc::new(Self::new(Arc::new(catalog)))
    }

    /// Build state from the configured catalog source.
    pub(crate) fn from_config(config: &CatalogConfig) -> Result<Arc<Self>, CatalogInitError> {
        match &config.catalog {
            Some(path) => {
                let catalog = FixtureCatalog::from_path(path)?;

                info!(
                    path = %path.display(),
                    products = catalog.len(),
                    "loaded products fixture"
                );

                Ok(Self::from_catalog(catalog))
            }
            None => {
                info!("no products fixture configured, serving the built-in product");

                Ok(Self::from_catalog(StubCatalog::try_default()?))
            }
        }
    }
}
