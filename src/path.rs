use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::error::{ImportError, Result};

static HTML_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.html$").unwrap());

const INDEX_PATH: &str = "/index";

/// Storage path for a page: the URL path minus a trailing `.html` and one
/// trailing slash, with the site root mapped to `/index`. Query and fragment
/// are not part of the path and never appear.
pub fn document_path(page_url: &str) -> Result<String> {
    let url = Url::parse(page_url).map_err(|source| ImportError::InvalidUrl {
        url: page_url.to_string(),
        source,
    })?;

    let path = HTML_SUFFIX_RE.replace(url.path(), "");
    let path = path.strip_suffix('/').unwrap_or(&path);
    let path = if path.is_empty() || path == "/" {
        INDEX_PATH.to_string()
    } else {
        path.to_string()
    };

    debug!(url = page_url, path = %path, "Derived document path");
    Ok(path)
}
