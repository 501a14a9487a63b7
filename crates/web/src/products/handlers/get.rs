//! Get Product Page Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use tracing::debug;

use storefront_catalog::selection::Selection;

use crate::{
    extensions::*,
    products::{errors::into_status_error, views::ProductPage},
    state::State,
};

/// Get Product Page Handler
///
/// Renders the product page for the color and size in the query string,
/// falling back to the product's first declared variants.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = req
        .param::<String>("product")
        .ok_or_else(StatusError::not_found)?;
    let color = req.query::<String>("color");
    let size = req.query::<String>("size");

    let product = state
        .catalog
        .find_product(&id)
        .await
        .map_err(into_status_error)?;

    let selection = Selection::resolve(&product, color.as_deref(), size.as_deref());

    debug!(
        product = product.id(),
        color = %selection.color(),
        size = %selection.size(),
        "rendering product page"
    );

    Ok(Text::Html(ProductPage::new(&product, selection).render()))
}
