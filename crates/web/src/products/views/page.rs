//! Product Page View

use leptos::{prelude::*, tachys::view::RenderHtml};

use storefront_catalog::{
    links::{VariantLink, color_links, size_links},
    pricing::format_price,
    products::Product,
    selection::Selection,
};

const PAYMENT_METHODS: [(&str, &str); 3] = [
    ("/klarna.png", "Klarna"),
    ("/cards.png", "Cards"),
    ("/stripe.png", "Stripe"),
];

const DISCLAIMER: &str = "By clicking Pay Now, you agree to our Terms & Conditions and Privacy \
                          Policy. You authorize us to charge your selected payment method for \
                          the total amount shown. All sales are subject to our return and \
                          Refund Policies.";

/// One entry of a color or size picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VariantOption {
    pub label: &'static str,
    pub href: String,
    pub selected: bool,
}

impl<T> From<VariantLink<T>> for VariantOption
where
    T: Copy + Into<&'static str>,
{
    fn from(entry: VariantLink<T>) -> Self {
        Self {
            label: entry.value.into(),
            href: entry.link.to_string(),
            selected: entry.selected,
        }
    }
}

/// Everything the product page shows, resolved for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProductPage {
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub sizes: Vec<VariantOption>,
    pub colors: Vec<VariantOption>,
}

impl ProductPage {
    pub(crate) fn new(product: &Product, selection: Selection) -> Self {
        Self {
            name: product.name().to_string(),
            short_description: product.short_description().to_string(),
            description: product.description().to_string(),
            price: format_price(product.price()),
            image: selection.image(product).to_string(),
            sizes: size_links(product, selection)
                .into_iter()
                .map(VariantOption::from)
                .collect(),
            colors: color_links(product, selection)
                .into_iter()
                .map(VariantOption::from)
                .collect(),
        }
    }

    /// Render the page as a complete HTML document.
    pub(crate) fn render(self) -> String {
        let page = self;
        let html = view! { <ProductDocument page=page/> }.to_html();

        format!("<!DOCTYPE html>{html}")
    }
}

#[component]
fn ProductDocument(page: ProductPage) -> impl IntoView {
    let ProductPage {
        name,
        short_description,
        description,
        price,
        image,
        sizes,
        colors,
    } = page;

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{name.clone()}</title>
            </head>
            <body>
                <main class="product-page">
                    <div class="product-image">
                        <img src=image alt=name.clone() width="600" height="600"/>
                    </div>
                    <div class="product-details">
                        <h1 class="product-name">{name}</h1>
                        <p class="product-short-description">{short_description}</p>
                        <p class="product-description">{description}</p>
                        <h2 class="product-price">{price}</h2>
                        <VariantPicker heading="Size" options=sizes/>
                        <VariantPicker heading="Color" options=colors/>
                        <PaymentMethods/>
                        <p class="product-disclaimer">{DISCLAIMER}</p>
                    </div>
                </main>
            </body>
        </html>
    }
}

#[component]
fn VariantPicker(heading: &'static str, options: Vec<VariantOption>) -> impl IntoView {
    view! {
        <div class="variant-picker">
            <span class="variant-heading">{heading}</span>
            <ul class="variant-options">
                {options
                    .into_iter()
                    .map(|option| view! { <li><VariantOptionLink option=option/></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn VariantOptionLink(option: VariantOption) -> impl IntoView {
    let VariantOption {
        label,
        href,
        selected,
    } = option;

    let classes = if selected {
        "variant-option selected"
    } else {
        "variant-option"
    };

    view! {
        <a href=href class=classes aria-current=selected.then_some("true")>
            {label}
        </a>
    }
}

#[component]
fn PaymentMethods() -> impl IntoView {
    view! {
        <div class="payment-methods">
            {PAYMENT_METHODS
                .into_iter()
                .map(|(src, alt)| view! { <img src=src alt=alt width="50" height="25"/> })
                .collect_view()}
        </div>
    }
}
