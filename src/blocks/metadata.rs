use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::table::Block;
use crate::tree::{image, Node};

pub const METADATA: &str = "Metadata";
pub const DEFAULT_TEMPLATE: &str = "seagate-universal";

static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static OG_IMAGE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:image"]"#).unwrap());

/// Page-level metadata read from the source document. Nothing is written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PageMeta {
    pub fn from_document(document: &Html) -> Self {
        let title = document
            .select(&TITLE_SEL)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string());

        // present-but-empty description still yields a row
        let description = document
            .select(&DESCRIPTION_SEL)
            .next()
            .map(|el| el.value().attr("content").unwrap_or("").to_string());

        let image = document
            .select(&OG_IMAGE_SEL)
            .next()
            .and_then(|el| el.value().attr("content"))
            .filter(|src| !src.is_empty())
            .map(str::to_string);

        Self {
            title,
            description,
            image,
        }
    }
}

/// Rows in fixed order: Title, Description, Image, Template. Template is always last.
pub fn metadata(meta: &PageMeta, template: &str) -> Block {
    let mut rows: Vec<(&str, Node)> = Vec::with_capacity(4);
    if let Some(title) = &meta.title {
        rows.push(("Title", Node::text(title.as_str())));
    }
    if let Some(description) = &meta.description {
        rows.push(("Description", Node::text(description.as_str())));
    }
    if let Some(src) = &meta.image {
        let alt = meta.title.as_deref().unwrap_or("");
        rows.push(("Image", image(src, alt).into()));
    }
    rows.push(("Template", Node::text(template)));

    rows.into_iter().fold(Block::new(METADATA), |block, (key, value)| {
        block.row([Node::text(key), value])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(block: &Block) -> Vec<String> {
        block
            .rows()
            .iter()
            .map(|row| row[0][0].to_html())
            .collect()
    }

    #[test]
    fn reads_all_fields() {
        let doc = Html::parse_document(concat!(
            "<html><head><title>  Seagate | Data Storage  </title>",
            r#"<meta name="description" content="Hard drives and SSDs">"#,
            r#"<meta property="og:image" content="https://example.com/og.png">"#,
            "</head><body></body></html>"
        ));
        let meta = PageMeta::from_document(&doc);
        assert_eq!(meta.title.as_deref(), Some("Seagate | Data Storage"));
        assert_eq!(meta.description.as_deref(), Some("Hard drives and SSDs"));
        assert_eq!(meta.image.as_deref(), Some("https://example.com/og.png"));

        let block = metadata(&meta, DEFAULT_TEMPLATE);
        assert_eq!(block.name(), METADATA);
        assert_eq!(keys(&block), ["Title", "Description", "Image", "Template"]);
        assert_eq!(
            block.rows()[2][1][0].to_html(),
            r#"<img src="https://example.com/og.png" alt="Seagate | Data Storage">"#
        );
        assert_eq!(block.rows()[3][1][0].to_html(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn absent_fields_skip_rows() {
        let doc = Html::parse_document("<html><head></head><body><p>x</p></body></html>");
        let meta = PageMeta::from_document(&doc);
        assert_eq!(meta, PageMeta::default());
        let block = metadata(&meta, "custom");
        assert_eq!(keys(&block), ["Template"]);
        assert_eq!(block.rows()[0][1][0].to_html(), "custom");
    }

    #[test]
    fn empty_og_image_is_ignored() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="og:image" content=""><meta name="description"></head></html>"#,
        );
        let meta = PageMeta::from_document(&doc);
        assert!(meta.image.is_none());
        assert_eq!(meta.description.as_deref(), Some(""));
        assert_eq!(keys(&metadata(&meta, "t")), ["Description", "Template"]);
    }

    #[test]
    fn image_alt_falls_back_to_empty() {
        let meta = PageMeta {
            image: Some("./og.png".into()),
            ..Default::default()
        };
        let block = metadata(&meta, "t");
        assert_eq!(block.rows()[0][1][0].to_html(), r#"<img src="./og.png" alt="">"#);
    }
}
