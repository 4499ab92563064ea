use scraper::Html;
use serde::Serialize;
use tracing::{debug, info};

use crate::blocks::{
    self, carousel_hero, cards_category, cards_product, cards_resource, columns_mozaic,
    columns_stats, hero_banner, PageMeta,
};
use crate::content::Catalog;
use crate::error::Result;
use crate::path::document_path;
use crate::table::section_metadata;
use crate::tree::{heading, link, paragraph, separator, Element, Node};

const SECTION_HEADING_LEVEL: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    HeroCarousel,
    FeaturedProducts,
    ExploreProducts,
    ValueProposition,
    AiDataStory,
    MozaicHeader,
    MozaicDetails,
    CapacityStatement,
    CompanyStats,
    LatestResources,
    EsgBanner,
    Footnotes,
}

/// Homepage layout, top to bottom.
pub const SECTION_ORDER: [SectionKind; 12] = [
    SectionKind::HeroCarousel,
    SectionKind::FeaturedProducts,
    SectionKind::ExploreProducts,
    SectionKind::ValueProposition,
    SectionKind::AiDataStory,
    SectionKind::MozaicHeader,
    SectionKind::MozaicDetails,
    SectionKind::CapacityStatement,
    SectionKind::CompanyStats,
    SectionKind::LatestResources,
    SectionKind::EsgBanner,
    SectionKind::Footnotes,
];

/// Section styles. Fixed per section; not derived from content.
const SECTION_STYLES: &[(SectionKind, &str)] = &[
    (SectionKind::MozaicHeader, "dark"),
    (SectionKind::CapacityStatement, "dark"),
];

impl SectionKind {
    pub fn style(self) -> Option<&'static str> {
        SECTION_STYLES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, style)| *style)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub content: Vec<Node>,
    pub style: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Value of the `Template` metadata row.
    pub template: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            template: blocks::metadata::DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedPage {
    pub main: Element,
    pub path: String,
}

// ── Sequence ──

pub fn build_sections(catalog: &Catalog) -> Vec<Section> {
    SECTION_ORDER
        .iter()
        .map(|&kind| Section {
            kind,
            content: section_content(kind, catalog),
            style: kind.style(),
        })
        .collect()
}

fn section_heading(text: &str) -> Node {
    heading(SECTION_HEADING_LEVEL, text).into()
}

fn section_content(kind: SectionKind, c: &Catalog) -> Vec<Node> {
    match kind {
        SectionKind::HeroCarousel => vec![carousel_hero(&c.hero_slides).into()],
        SectionKind::FeaturedProducts => vec![
            section_heading(&c.featured_products_heading),
            cards_product(&c.products).into(),
        ],
        SectionKind::ExploreProducts => {
            let explore = &c.explore_products;
            let mut nodes = vec![section_heading(&explore.heading)];
            if let Some(cta) = &explore.see_more {
                nodes.push(paragraph(link(&cta.href, &cta.text)).into());
            }
            nodes.push(cards_category(&c.categories).into());
            nodes
        }
        SectionKind::ValueProposition => vec![hero_banner(&c.value_proposition).into()],
        SectionKind::AiDataStory => vec![cards_resource(&c.ai_data_story).into()],
        SectionKind::MozaicHeader => vec![hero_banner(&c.mozaic_header).into()],
        SectionKind::MozaicDetails => vec![columns_mozaic(&c.mozaic_details).into()],
        SectionKind::CapacityStatement => {
            let statement = &c.capacity_statement;
            let mut nodes = vec![section_heading(&statement.heading)];
            if let Some(description) = &statement.description {
                nodes.push(paragraph(description.as_str()).into());
            }
            nodes
        }
        SectionKind::CompanyStats => vec![columns_stats(&c.company_stats).into()],
        SectionKind::LatestResources => vec![
            section_heading(&c.latest_resources_heading),
            cards_resource(&c.latest_resources).into(),
        ],
        SectionKind::EsgBanner => vec![hero_banner(&c.esg_banner).into()],
        SectionKind::Footnotes => c
            .footnotes
            .iter()
            .map(|note| paragraph(note.as_str()).into())
            .collect(),
    }
}

/// Each section is followed by its style table (if any) and a separator;
/// the Metadata block closes the page with no separator after it.
pub fn assemble(sections: Vec<Section>, meta: &PageMeta, options: &TransformOptions) -> Element {
    let mut main = Element::new("main");
    for section in sections {
        main = main.children(section.content);
        if let Some(style) = section.style {
            main = main.child(section_metadata(style));
        }
        main = main.child(separator());
    }
    main.child(blocks::metadata(meta, &options.template))
}

// ── Entry points ──

/// Root content node for `document`, built from `catalog`.
pub fn transform_dom(document: &Html, catalog: &Catalog, options: &TransformOptions) -> Element {
    let meta = PageMeta::from_document(document);
    debug!(?meta, "Read page metadata");
    let sections = build_sections(catalog);
    let section_count = sections.len();
    let main = assemble(sections, &meta, options);
    info!(
        sections = section_count,
        nodes = main.children.len(),
        "Transformed page"
    );
    main
}

pub fn import_page(
    document: &Html,
    url: &str,
    catalog: &Catalog,
    options: &TransformOptions,
) -> Result<ImportedPage> {
    let path = document_path(url)?;
    let main = transform_dom(document, catalog, options);
    Ok(ImportedPage { main, path })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog;

    fn fixture() -> Html {
        let html = std::fs::read_to_string("tests/fixtures/homepage.html").unwrap();
        Html::parse_document(&html)
    }

    fn table_name(node: &Node) -> Option<String> {
        let table = node.as_element().filter(|el| el.tag == "table")?;
        Some(table.elements().next()?.text_content())
    }

    fn is_separator(node: &Node) -> bool {
        node.as_element().is_some_and(|el| el.tag == "hr")
    }

    #[test]
    fn twelve_sections_in_fixed_order() {
        let sections = build_sections(&catalog::builtin().unwrap());
        let kinds: Vec<_> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SECTION_ORDER.to_vec());

        let styled: Vec<_> = sections
            .iter()
            .filter(|s| s.style.is_some())
            .map(|s| (s.kind, s.style.unwrap()))
            .collect();
        assert_eq!(
            styled,
            vec![
                (SectionKind::MozaicHeader, "dark"),
                (SectionKind::CapacityStatement, "dark"),
            ]
        );
    }

    #[test]
    fn block_sequence_matches_layout() {
        let main = transform_dom(&fixture(), &catalog::builtin().unwrap(), &TransformOptions::default());
        let tables: Vec<String> = main.children.iter().filter_map(table_name).collect();
        assert_eq!(
            tables,
            vec![
                "Carousel-Hero",
                "Cards-Product",
                "Cards-Category",
                "Hero-Banner",
                "Cards-Resource",
                "Hero-Banner",
                "Section Metadata",
                "Columns-Mozaic",
                "Section Metadata",
                "Columns-Stats",
                "Cards-Resource",
                "Hero-Banner",
                "Metadata",
            ]
        );
    }

    #[test]
    fn separators_and_style_markers() {
        let main = transform_dom(&fixture(), &catalog::builtin().unwrap(), &TransformOptions::default());
        let children = &main.children;
        assert_eq!(children.iter().filter(|n| is_separator(n)).count(), 12);

        // metadata last, separator right before it
        assert_eq!(table_name(children.last().unwrap()).as_deref(), Some("Metadata"));
        assert!(is_separator(&children[children.len() - 2]));

        // every style marker sits directly before a separator
        for (i, node) in children.iter().enumerate() {
            if table_name(node).as_deref() == Some("Section Metadata") {
                assert!(is_separator(&children[i + 1]));
                assert!(node.to_html().contains("<td>dark</td>"));
            }
        }
    }

    #[test]
    fn freestanding_text_comes_from_catalog() {
        let main = transform_dom(&fixture(), &catalog::builtin().unwrap(), &TransformOptions::default());
        let html = main.to_html();
        assert!(html.starts_with("<main><table><tr><th colspan=\"2\">Carousel-Hero</th>"));
        assert!(html.contains("<hr><h2>Featured products</h2><table>"));
        assert!(html.contains(
            r#"<h2>Explore all products</h2><p><a href="https://www.seagate.com/products/">See More</a></p><table>"#
        ));
        assert!(html.contains("<h2>Our latest resources</h2><table>"));
        assert!(html.ends_with("</table></main>"));
    }

    #[test]
    fn footnotes_precede_final_separator() {
        let c = catalog::builtin().unwrap();
        let main = transform_dom(&fixture(), &c, &TransformOptions::default());
        let n = main.children.len();
        let notes: Vec<String> = main.children[n - 2 - c.footnotes.len()..n - 2]
            .iter()
            .map(|node| node.as_element().unwrap().text_content())
            .collect();
        assert_eq!(notes, c.footnotes);
    }

    #[test]
    fn metadata_reads_source_document() {
        let options = TransformOptions { template: "custom-template".into() };
        let main = transform_dom(&fixture(), &catalog::builtin().unwrap(), &options);
        let meta = main.children.last().unwrap().to_html();
        assert!(meta.contains("<td>Title</td><td>Seagate | Data Storage Solutions</td>"));
        assert!(meta.contains("<td>Template</td><td>custom-template</td>"));
        assert!(meta.find("Title").unwrap() < meta.find("Description").unwrap());
        assert!(meta.find("Image").unwrap() < meta.find("Template").unwrap());
    }

    #[test]
    fn transform_is_idempotent() {
        let doc = fixture();
        let c = catalog::builtin().unwrap();
        let first = import_page(&doc, "https://www.seagate.com/", &c, &TransformOptions::default()).unwrap();
        let second = import_page(&doc, "https://www.seagate.com/", &c, &TransformOptions::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.path, "/index");
    }

    #[test]
    fn empty_catalog_still_yields_full_skeleton() {
        let doc = Html::parse_document("<html><body></body></html>");
        let main = transform_dom(&doc, &Catalog::default(), &TransformOptions::default());
        assert_eq!(main.children.iter().filter(|n| is_separator(n)).count(), 12);
        assert_eq!(table_name(main.children.last().unwrap()).as_deref(), Some("Metadata"));
        // empty texts never leak a "None"/"undefined" marker
        assert!(!main.to_html().contains("undefined"));
        assert!(!main.to_html().contains("None"));
    }

    #[test]
    fn bad_url_fails_import() {
        let doc = Html::parse_document("<html></html>");
        let c = catalog::builtin().unwrap();
        assert!(import_page(&doc, "::", &c, &TransformOptions::default()).is_err());
    }
}
