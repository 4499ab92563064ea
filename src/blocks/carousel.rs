use crate::content::Slide;
use crate::table::Block;
use crate::tree::{column, heading, image, link, paragraph, Element, Node};

pub const CAROUSEL_HERO: &str = "Carousel-Hero";

/// One row per slide: image column, then eyebrow / h1 / description / CTAs.
pub fn carousel_hero(slides: &[Slide]) -> Block {
    slides
        .iter()
        .fold(Block::new(CAROUSEL_HERO), |block, slide| {
            block.row([image_column(slide), content_column(slide)])
        })
}

fn image_column(slide: &Slide) -> Element {
    let col = column();
    match &slide.bg_image {
        Some(src) => col.child(image(src, slide.eyebrow.as_deref().unwrap_or(""))),
        None => col,
    }
}

fn content_column(slide: &Slide) -> Element {
    let mut col = column();
    if let Some(eyebrow) = &slide.eyebrow {
        col = col.child(paragraph(eyebrow.as_str()));
    }
    if let Some(text) = &slide.heading {
        col = col.child(heading(1, text));
    }
    if let Some(description) = &slide.description {
        col = col.child(paragraph(description.as_str()));
    }
    if !slide.ctas.is_empty() {
        // each link is followed by a separating space
        let links = slide
            .ctas
            .iter()
            .flat_map(|cta| [Node::from(link(&cta.href, &cta.text)), Node::text(" ")]);
        col = col.child(Element::new("p").children(links));
    }
    col
}
