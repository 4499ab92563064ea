//! Converts a marketing page into block tables for a document-based
//! authoring pipeline: hero carousel, card grids, column panels and a
//! trailing metadata block, plus the path the page is stored under.

pub mod blocks;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod path;
pub mod table;
pub mod tree;

pub use content::Catalog;
pub use error::{ImportError, Result};
pub use page::{import_page, transform_dom, ImportedPage, TransformOptions};
pub use path::document_path;
