//! Product Views

mod page;

pub(crate) use page::ProductPage;
