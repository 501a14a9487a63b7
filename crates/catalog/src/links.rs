//! Product Links

use std::fmt;

use crate::{
    products::{Product, ProductId},
    selection::Selection,
    variants::{Color, Size},
};

/// Relative link to a product page with an explicit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductLink {
    id: ProductId,
    color: Color,
    size: Size,
}

impl ProductLink {
    /// Create a link to the given product and selection.
    pub fn new(id: ProductId, color: Color, size: Size) -> Self {
        Self { id, color, size }
    }

    /// Linked product
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Color carried in the query string
    pub fn color(&self) -> Color {
        self.color
    }

    /// Size carried in the query string
    pub fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for ProductLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/products/{}?color={}&size={}",
            self.id, self.color, self.size
        )
    }
}

/// One entry of a variant picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantLink<T> {
    /// The variant this entry switches to.
    pub value: T,

    /// Link to the page with the variant applied.
    pub link: ProductLink,

    /// Whether the page is already showing this variant.
    pub selected: bool,
}

/// Links for every size the product offers, holding the selected color.
pub fn size_links(product: &Product, selection: Selection) -> Vec<VariantLink<Size>> {
    product
        .sizes()
        .iter()
        .map(|&size| VariantLink {
            value: size,
            link: selection.with_size(size).link(product),
            selected: size == selection.size(),
        })
        .collect()
}

/// Links for every color the product offers, holding the selected size.
pub fn color_links(product: &Product, selection: Selection) -> Vec<VariantLink<Color>> {
    product
        .colors()
        .iter()
        .map(|&color| VariantLink {
            value: color,
            link: selection.with_color(color).link(product),
            selected: color == selection.color(),
        })
        .collect()
}
