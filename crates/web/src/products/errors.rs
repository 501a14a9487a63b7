//! Product Errors

use salvo::http::StatusError;
use tracing::debug;

use storefront_catalog::catalog::CatalogError;

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::NotFound => {
            debug!("product not found");

            StatusError::not_found().brief("Product not found")
        }
    }
}
