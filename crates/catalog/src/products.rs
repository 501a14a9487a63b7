//! Products

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use smallvec::{Array, SmallVec};
use thiserror::Error;

use crate::variants::{Color, Size};

/// Product identifier
pub type ProductId = u32;

/// Errors raised when a product record breaks its invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    /// The product declares no sizes.
    #[error("product {0} declares no sizes")]
    NoSizes(ProductId),

    /// The product declares no colors.
    #[error("product {0} declares no colors")]
    NoColors(ProductId),

    /// A size is declared more than once.
    #[error("product {0} declares size {1} more than once")]
    DuplicateSize(ProductId, Size),

    /// A color is declared more than once.
    #[error("product {0} declares color {1} more than once")]
    DuplicateColor(ProductId, Color),

    /// A color has no image.
    #[error("product {0} has no image for color {1}")]
    MissingImage(ProductId, Color),
}

/// Image path for every color.
///
/// One field per [`Color`] variant, so lookups cannot miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImages {
    gray: String,
    purple: String,
    green: String,
}

impl ProductImages {
    /// Build the mapping from per-color paths.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::MissingImage`] naming the first color, in
    /// declaration order, that has no path.
    pub fn from_map(
        product: ProductId,
        mut images: FxHashMap<Color, String>,
    ) -> Result<Self, ProductError> {
        let mut take = |color: Color| {
            images
                .remove(&color)
                .ok_or(ProductError::MissingImage(product, color))
        };

        Ok(Self {
            gray: take(Color::Gray)?,
            purple: take(Color::Purple)?,
            green: take(Color::Green)?,
        })
    }

    /// Image path for the given color.
    pub fn get(&self, color: Color) -> &str {
        match color {
            Color::Gray => &self.gray,
            Color::Purple => &self.purple,
            Color::Green => &self.green,
        }
    }
}

/// New Product
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// One-line summary
    pub short_description: String,

    /// Full description
    pub description: String,

    /// Product price
    pub price: Money<'static, Currency>,

    /// Sizes on offer, first is the default
    pub sizes: Vec<Size>,

    /// Colors on offer, first is the default
    pub colors: Vec<Color>,

    /// Image path per color
    pub images: FxHashMap<Color, String>,
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    short_description: String,
    description: String,
    price: Money<'static, Currency>,
    sizes: SmallVec<[Size; 5]>,
    colors: SmallVec<[Color; 3]>,
    default_size: Size,
    default_color: Color,
    images: ProductImages,
}

impl Product {
    /// Build a product, checking its invariants.
    ///
    /// # Errors
    ///
    /// - [`ProductError::NoSizes`] / [`ProductError::NoColors`]: a variant list is empty.
    /// - [`ProductError::DuplicateSize`] / [`ProductError::DuplicateColor`]: a variant
    ///   is listed twice.
    /// - [`ProductError::MissingImage`]: some color has no image.
    pub fn try_new(product: NewProduct) -> Result<Self, ProductError> {
        let id = product.id;

        let sizes: SmallVec<[Size; 5]> = unique(product.sizes, |size| {
            ProductError::DuplicateSize(id, size)
        })?;
        let colors: SmallVec<[Color; 3]> = unique(product.colors, |color| {
            ProductError::DuplicateColor(id, color)
        })?;

        let default_size = *sizes.first().ok_or(ProductError::NoSizes(id))?;
        let default_color = *colors.first().ok_or(ProductError::NoColors(id))?;

        Ok(Self {
            id,
            name: product.name,
            short_description: product.short_description,
            description: product.description,
            price: product.price,
            sizes,
            colors,
            default_size,
            default_color,
            images: ProductImages::from_map(id, product.images)?,
        })
    }

    /// Product identifier
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line summary
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Full description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Product price
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Sizes on offer, in declaration order.
    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    /// Colors on offer, in declaration order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The first declared size.
    pub fn default_size(&self) -> Size {
        self.default_size
    }

    /// The first declared color.
    pub fn default_color(&self) -> Color {
        self.default_color
    }

    /// Image paths by color.
    pub fn images(&self) -> &ProductImages {
        &self.images
    }
}

fn unique<A>(
    values: Vec<A::Item>,
    duplicate: impl Fn(A::Item) -> ProductError,
) -> Result<SmallVec<A>, ProductError>
where
    A: Array,
    A::Item: Copy + PartialEq,
{
    let mut seen = SmallVec::<A>::with_capacity(values.len());

    for value in values {
        if seen.contains(&value) {
            return Err(duplicate(value));
        }

        seen.push(value);
    }

    Ok(seen)
}
