//! Product Fixtures
//!
//! YAML product records, e.g.
//!
//! ```yaml
//! products:
//!   1:
//!     name: Adidas CoreFit T-Shirt
//!     short_description: Everyday training tee
//!     description: Lightweight and breathable.
//!     price: 59.90 USD
//!     sizes: [xs, s, m, l, xl]
//!     colors: [gray, purple, green]
//!     images:
//!       gray: /products/1g.png
//!       purple: /products/1p.png
//!       green: /products/1gr.png
//! ```

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    pricing::{PriceError, parse_price},
    products::{NewProduct, Product, ProductError, ProductId},
    variants::{Color, Size},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error, including unknown color or size labels
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Product record breaks an invariant
    #[error(transparent)]
    Product(#[from] ProductError),

    /// The fixture holds no products
    #[error("fixture contains no products")]
    Empty,
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product id -> product fixture
    pub products: FxHashMap<ProductId, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// One-line summary
    #[serde(default)]
    pub short_description: String,

    /// Full description
    #[serde(default)]
    pub description: String,

    /// Product price (e.g. "59.90 USD")
    pub price: String,

    /// Sizes on offer
    pub sizes: Vec<Size>,

    /// Colors on offer
    pub colors: Vec<Color>,

    /// Image path per color
    pub images: FxHashMap<Color, String>,
}

impl ProductFixture {
    /// Convert the fixture into a checked product.
    ///
    /// # Errors
    ///
    /// Returns an error when the price cannot be parsed or the record breaks a
    /// product invariant.
    pub fn into_product(self, id: ProductId) -> Result<Product, FixtureError> {
        let price = parse_price(&self.price)?;

        Ok(Product::try_new(NewProduct {
            id,
            name: self.name,
            short_description: self.short_description,
            description: self.description,
            price,
            sizes: self.sizes,
            colors: self.colors,
            images: self.images,
        })?)
    }
}

impl ProductsFixture {
    /// Parse a products fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or names an unknown variant.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Read and parse a products fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Convert every fixture into a checked product.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Empty`] when there are no products, or the first
    /// conversion error encountered.
    pub fn into_products(self) -> Result<Vec<Product>, FixtureError> {
        if self.products.is_empty() {
            return Err(FixtureError::Empty);
        }

        let mut products = self
            .products
            .into_iter()
            .map(|(id, fixture)| fixture.into_product(id))
            .collect::<Result<Vec<_>, _>>()?;

        products.sort_by_key(Product::id);

        Ok(products)
    }
}
