//! Storefront Catalog
//!
//! Product records, variant selection and product page links for the storefront.

pub mod catalog;
pub mod fixtures;
pub mod links;
pub mod pricing;
pub mod products;
pub mod selection;
pub mod variants;
