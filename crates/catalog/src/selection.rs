//! Selection
//!
//! Resolves the color and size a product page shows from untrusted query values.

use std::{fmt::Display, str::FromStr};

use tracing::debug;

use crate::{
    links::ProductLink,
    products::Product,
    variants::{Color, Size, UnknownVariant},
};

/// The color and size a product page is showing.
///
/// Always a color and a size the product is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    color: Color,
    size: Size,
}

impl Selection {
    /// Resolve a selection from optional query values.
    ///
    /// A value that is absent, not a known label, or not offered by the product
    /// falls back to the product's first declared variant.
    pub fn resolve(product: &Product, color: Option<&str>, size: Option<&str>) -> Self {
        Self {
            color: resolve_variant(color, product.colors(), product.default_color()),
            size: resolve_variant(size, product.sizes(), product.default_size()),
        }
    }

    /// The product's default selection.
    pub fn default_for(product: &Product) -> Self {
        Self {
            color: product.default_color(),
            size: product.default_size(),
        }
    }

    /// Selected color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Selected size
    pub fn size(&self) -> Size {
        self.size
    }

    /// This selection with the color replaced.
    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// This selection with the size replaced.
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    /// Image path for the selected color.
    pub fn image<'p>(&self, product: &'p Product) -> &'p str {
        product.images().get(self.color)
    }

    /// Link to the product page showing this selection.
    pub fn link(&self, product: &Product) -> ProductLink {
        ProductLink::new(product.id(), self.color, self.size)
    }
}

fn resolve_variant<T>(requested: Option<&str>, offered: &[T], default: T) -> T
where
    T: FromStr<Err = UnknownVariant> + Copy + PartialEq + Display,
{
    let Some(label) = requested else {
        return default;
    };

    match label.parse::<T>() {
        Ok(value) if offered.contains(&value) => value,
        Ok(_) | Err(_) => {
            // The rejected value is client input and is not recorded.
            debug!(fallback = %default, "requested variant unavailable, using default");

            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use testresult::TestResult;
    use tracing::Level;

    use crate::products::tests::new_product;

    use super::*;

    #[test]
    fn resolve_accepts_offered_variants() -> TestResult {
        let product = Product::try_new(new_product())?;

        let selection = Selection::resolve(&product, Some("gray"), Some("l"));

        assert_eq!(selection.color(), Color::Gray);
        assert_eq!(selection.size(), Size::L);
        assert_eq!(selection.image(&product), "/products/7-gray.png");

        Ok(())
    }

    #[test]
    fn resolve_falls_back_for_missing_or_unknown_values() -> TestResult {
        let product = Product::try_new(new_product())?;
        let default = Selection::default_for(&product);

        assert_eq!(Selection::resolve(&product, None, None), default);
        assert_eq!(Selection::resolve(&product, Some(""), Some("")), default);
        assert_eq!(Selection::resolve(&product, Some("neon"), Some("xxl")), default);

        Ok(())
    }

    #[test]
    fn resolve_falls_back_for_variants_the_product_does_not_offer() -> TestResult {
        let product = Product::try_new(new_product())?;

        // Purple and XS are real labels, but this product only offers green/gray and m/l.
        let selection = Selection::resolve(&product, Some("purple"), Some("xs"));

        assert_eq!(selection.color(), Color::Green);
        assert_eq!(selection.size(), Size::M);

        Ok(())
    }

    #[test]
    fn resolve_treats_each_parameter_independently() -> TestResult {
        let product = Product::try_new(new_product())?;

        let selection = Selection::resolve(&product, Some("gray"), Some("huge"));

        assert_eq!(selection.color(), Color::Gray);
        assert_eq!(selection.size(), Size::M);

        Ok(())
    }

    #[test]
    fn with_variant_keeps_the_other_value() -> TestResult {
        let product = Product::try_new(new_product())?;
        let selection = Selection::resolve(&product, Some("gray"), Some("l"));

        assert_eq!(selection.with_size(Size::M).color(), Color::Gray);
        assert_eq!(selection.with_color(Color::Green).size(), Size::L);

        Ok(())
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_poisoned| io::Error::other("log buffer poisoned"))?
                .extend_from_slice(buf);

            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn fallback_logs_the_default_but_not_the_rejected_value() -> TestResult {
        let product = Product::try_new(new_product())?;
        let buffer = LogBuffer::default();
        let writer = buffer.clone();

        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();

        let selection = tracing::subscriber::with_default(subscriber, || {
            Selection::resolve(&product, Some("neon-<script>"), Some("purple"))
        });

        assert_eq!(selection, Selection::default_for(&product));

        let logs = buffer
            .0
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default();

        assert_eq!(logs.matches("using default").count(), 2);
        assert!(logs.contains("fallback=green"));
        assert!(!logs.contains("neon"));
        assert!(!logs.contains("purple"));

        Ok(())
    }
}
