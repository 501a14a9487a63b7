//! Test helpers.

use std::{
    io,
    sync::{Arc, Mutex},
};

use salvo::{affix_state::inject, prelude::*};
use tracing::Subscriber;

use storefront_catalog::{
    catalog::{CatalogService, stub_product},
    products::{Product, ProductError},
};

use crate::state::State;

pub(crate) fn catalog_service(catalog: impl CatalogService + 'static, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_catalog(catalog)))
            .push(route),
    )
}

pub(crate) fn stub_product_arc() -> Result<Arc<Product>, ProductError> {
    stub_product().map(Arc::new)
}

/// The opening `<a ...>` tag whose `href` is exactly `href`.
pub(crate) fn anchor_with_href<'a>(body: &'a str, href: &str) -> Option<&'a str> {
    let attribute = format!(r#"href="{href}""#);
    let position = body.find(&attribute)?;
    let start = body.get(..position)?.rfind('<')?;
    let end = position + body.get(position..)?.find('>')?;

    body.get(start..=end).filter(|tag| tag.starts_with("<a "))
}

/// In-memory sink for formatted log lines.
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// A plain-text subscriber writing into this buffer.
    pub(crate) fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        let logs = self.clone();

        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || logs.clone())
            .finish()
    }

    pub(crate) fn lines_containing(&self, needle: &str) -> Vec<String> {
        let Ok(buffer) = self.0.lock() else {
            return Vec::new();
        };

        String::from_utf8_lossy(&buffer)
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for CapturedLogs {
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
