//! Catalog
//!
//! Product lookup for the product page.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::products::Product;

mod fixture;
mod stub;

pub use fixture::FixtureCatalog;
pub use stub::{StubCatalog, stub_product};

/// Catalog lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No product has the requested identifier.
    #[error("product not found")]
    NotFound,
}

/// Looks up products by their path identifier.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Find the product a product page path refers to.
    async fn find_product(&self, id: &str) -> Result<Arc<Product>, CatalogError>;
}
