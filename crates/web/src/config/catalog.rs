//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Product catalog settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Products fixture (YAML). The built-in product is served when unset.
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,
}
