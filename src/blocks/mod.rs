//! Block builders: each maps content records to one named block table.
//! Absent optional fields drop their fragment; builders never fail.

pub mod banner;
pub mod cards;
pub mod carousel;
pub mod columns;
pub mod metadata;

pub use banner::hero_banner;
pub use cards::{cards_category, cards_product, cards_resource};
pub use carousel::carousel_hero;
pub use columns::{columns_mozaic, columns_stats};
pub use metadata::{metadata, PageMeta};

use crate::content::Cta;
use crate::tree::{link, paragraph, Element};

pub(crate) fn cta_paragraph(cta: &Cta) -> Element {
    paragraph(link(&cta.href, &cta.text))
}
