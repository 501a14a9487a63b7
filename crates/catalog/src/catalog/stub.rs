//! Stub Catalog

use std::sync::Arc;

use async_trait::async_trait;
use rusty_money::{Money, iso::USD};

use crate::{
    catalog::{CatalogError, CatalogService},
    products::{NewProduct, Product, ProductError},
    variants::{Color, Size},
};

/// A catalog holding a single product, returned for every identifier.
#[derive(Debug, Clone)]
pub struct StubCatalog {
    product: Arc<Product>,
}

impl StubCatalog {
    /// Serve the given product for every identifier.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            product: Arc::new(product),
        }
    }

    /// Serve [`stub_product`].
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in record breaks a product invariant.
    pub fn try_default() -> Result<Self, ProductError> {
        Ok(Self::new(stub_product()?))
    }
}

#[async_trait]
impl CatalogService for StubCatalog {
    async fn find_product(&self, _id: &str) -> Result<Arc<Product>, CatalogError> {
        Ok(Arc::clone(&self.product))
    }
}

/// The built-in product record.
///
/// # Errors
///
/// Returns an error if the record breaks a product invariant.
pub fn stub_product() -> Result<Product, ProductError> {
    Product::try_new(NewProduct {
        id: 1,
        name: "Adidas CoreFit T-Shirt".to_string(),
        short_description: "Lightweight training tee with a relaxed fit for everyday workouts."
            .to_string(),
        description: "Made from soft, breathable fabric that wicks moisture away from the \
                      skin, the CoreFit tee keeps you cool from warm-up to cool-down. A \
                      crew neck and ribbed cuffs hold their shape wash after wash."
            .to_string(),
        price: Money::from_minor(5990, USD),
        sizes: Size::ALL.to_vec(),
        colors: Color::ALL.to_vec(),
        images: [
            (Color::Gray, "/products/1g.png"),
            (Color::Purple, "/products/1p.png"),
            (Color::Green, "/products/1gr.png"),
        ]
        .into_iter()
        .map(|(color, path)| (color, path.to_string()))
        .collect(),
    })
}
