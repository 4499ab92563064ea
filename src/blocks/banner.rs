use crate::content::Banner;
use crate::table::Block;
use crate::tree::{column, heading, image, paragraph};

use super::cta_paragraph;

pub const HERO_BANNER: &str = "Hero-Banner";
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Image row (only when an image is set) followed by the text row.
pub fn hero_banner(banner: &Banner) -> Block {
    let mut block = Block::new(HERO_BANNER);
    if let Some(src) = &banner.image {
        block = block.row([image(src, banner.image_alt.as_deref().unwrap_or(""))]);
    }

    let mut text = column().child(heading(
        banner.level.unwrap_or(DEFAULT_HEADING_LEVEL),
        &banner.heading,
    ));
    if let Some(description) = &banner.description {
        text = text.child(paragraph(description.as_str()));
    }
    if let Some(cta) = &banner.cta {
        text = text.child(cta_paragraph(cta));
    }
    block.row([text])
}
