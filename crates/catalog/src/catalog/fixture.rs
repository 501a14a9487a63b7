//! Fixture Catalog

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use crate::{
    catalog::{CatalogError, CatalogService},
    fixtures::{FixtureError, ProductsFixture},
    products::{Product, ProductId},
};

/// A catalog of products loaded from a YAML fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    products: FxHashMap<ProductId, Arc<Product>>,
}

impl FixtureCatalog {
    /// Build a catalog from already checked products.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.id(), Arc::new(product)))
                .collect(),
        }
    }

    /// Load a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be parsed or a product is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(Self::from_products(
            ProductsFixture::from_yaml(yaml)?.into_products()?,
        ))
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a product is invalid.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        Ok(Self::from_products(
            ProductsFixture::from_path(path)?.into_products()?,
        ))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogService for FixtureCatalog {
    async fn find_product(&self, id: &str) -> Result<Arc<Product>, CatalogError> {
        // Only the canonical form resolves, so each product has exactly one URL.
        let id = id
            .parse::<ProductId>()
            .ok()
            .filter(|parsed| parsed.to_string() == id)
            .ok_or(CatalogError::NotFound)?;

        self.products
            .get(&id)
            .map(Arc::clone)
            .ok_or(CatalogError::NotFound)
    }
}
