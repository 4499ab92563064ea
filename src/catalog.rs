use std::path::Path;

use tracing::{debug, info};

use crate::content::Catalog;
use crate::error::{ImportError, Result};

const BUILTIN_CATALOG: &str = include_str!("../catalog/authoring.json");

/// Catalog compiled into the binary, used when no `--catalog` is given.
pub fn builtin() -> Result<Catalog> {
    let catalog = from_json(BUILTIN_CATALOG)?;
    debug!(slides = catalog.hero_slides.len(), "Loaded built-in catalog");
    Ok(catalog)
}

pub fn from_json(json: &str) -> Result<Catalog> {
    Ok(serde_json::from_str(json)?)
}

pub fn load(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = from_json(&json)?;
    info!("Loaded catalog from {}", path.display());
    Ok(catalog)
}

/// Built-in catalog as pretty JSON, a starting point for custom catalogs.
pub fn builtin_json() -> &'static str {
    BUILTIN_CATALOG
}
