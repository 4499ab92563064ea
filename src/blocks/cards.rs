use crate::content::{Category, Product, Resource};
use crate::table::Block;
use crate::tree::{column, emphasis, heading, image, link, paragraph, strong, Element};

pub const CARDS_PRODUCT: &str = "Cards-Product";
pub const CARDS_CATEGORY: &str = "Cards-Category";
pub const CARDS_RESOURCE: &str = "Cards-Resource";

fn image_column(src: Option<&str>, alt: &str) -> Element {
    let col = column();
    match src {
        Some(src) => col.child(image(src, alt)),
        None => col,
    }
}

fn linked_title(href: &str, text: &str) -> Element {
    strong(link(href, text))
}

// ── Products ──

pub fn cards_product(products: &[Product]) -> Block {
    products.iter().fold(Block::new(CARDS_PRODUCT), |block, product| {
        let alt = product.image_alt.as_deref().unwrap_or(&product.title);
        block.row([
            image_column(product.image.as_deref(), alt),
            product_content(product),
        ])
    })
}

fn product_content(product: &Product) -> Element {
    let mut col = column().child(paragraph(linked_title(&product.link, &product.title)));
    if let Some(details) = &product.details {
        col = col.child(paragraph(details.as_str()));
    }
    if let Some(price) = &product.price {
        col = col.child(paragraph(price.as_str()));
    }
    if let Some(badge) = &product.badge {
        col = col.child(paragraph(emphasis(badge)));
    }
    col
}

// ── Categories ──

pub fn cards_category(categories: &[Category]) -> Block {
    categories.iter().fold(Block::new(CARDS_CATEGORY), |block, category| {
        let alt = category.image_alt.as_deref().unwrap_or(&category.title);
        block.row([
            image_column(category.image.as_deref(), alt),
            column().child(linked_title(&category.link, &category.title)),
        ])
    })
}

// ── Resources ──

pub fn cards_resource(resources: &[Resource]) -> Block {
    resources.iter().fold(Block::new(CARDS_RESOURCE), |block, resource| {
        let alt = resource
            .image_alt
            .as_deref()
            .or(resource.title.as_deref())
            .or(resource.heading.as_deref())
            .unwrap_or("");
        block.row([
            image_column(resource.image.as_deref(), alt),
            resource_content(resource),
        ])
    })
}

fn resource_content(resource: &Resource) -> Element {
    let mut col = column();
    if let Some(eyebrow) = &resource.eyebrow {
        col = col.child(paragraph(eyebrow.as_str()));
    }
    let text = resource.heading_text();
    col = match &resource.link {
        Some(href) => col.child(paragraph(linked_title(href, text))),
        None => col.child(heading(3, text)),
    };
    if let Some(description) = &resource.description {
        col = col.child(paragraph(description.as_str()));
    }
    col
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::testing::{cell, tags};

    fn product() -> Product {
        Product {
            image: Some("./images/p.png".into()),
            image_alt: None,
            title: "IronWolf Pro".into(),
            link: "https://example.com/ironwolf".into(),
            details: Some("Capacity: 2TB - 32TB".into()),
            price: Some("From: $219.99".into()),
            badge: Some("15% Off".into()),
        }
    }

    #[test]
    fn product_full_card() {
        let block = cards_product(&[product()]);
        assert_eq!(block.name(), CARDS_PRODUCT);
        assert_eq!(cell(&block, 0, 0).elements().next().unwrap().get_attr("alt"), Some("IronWolf Pro"));
        assert_eq!(
            cell(&block, 0, 1).to_html(),
            concat!(
                r#"<div><p><strong><a href="https://example.com/ironwolf">IronWolf Pro</a></strong></p>"#,
                "<p>Capacity: 2TB - 32TB</p><p>From: $219.99</p><p><em>15% Off</em></p></div>"
            )
        );
    }

    #[test]
    fn product_missing_fields_are_omitted() {
        let p = Product {
            details: None,
            price: None,
            badge: None,
            image: None,
            ..product()
        };
        let block = cards_product(&[p]);
        assert_eq!(cell(&block, 0, 0).to_html(), "<div></div>");
        assert_eq!(tags(cell(&block, 0, 1)), ["p"]);
    }

    #[test]
    fn product_price_without_details_keeps_order() {
        let p = Product { details: None, ..product() };
        let content = cell(&cards_product(&[p]), 0, 1).text_content();
        assert_eq!(content, "IronWolf ProFrom: $219.9915% Off");
    }

    #[test]
    fn category_title_is_bold_link_without_paragraph() {
        let block = cards_category(&[Category {
            image: Some("./c.jpg".into()),
            image_alt: None,
            title: "Creative Pro".into(),
            link: "https://example.com/creative".into(),
        }]);
        assert_eq!(block.name(), CARDS_CATEGORY);
        assert_eq!(
            cell(&block, 0, 1).to_html(),
            r#"<div><strong><a href="https://example.com/creative">Creative Pro</a></strong></div>"#
        );
    }

    #[test]
    fn resource_with_link_is_bold_paragraph() {
        let block = cards_resource(&[Resource {
            image: Some("./r.jpg".into()),
            eyebrow: Some("Report".into()),
            title: Some("Decarbonizing Data".into()),
            link: Some("https://example.com/report".into()),
            description: Some("Sustainability".into()),
            ..Default::default()
        }]);
        let content = cell(&block, 0, 1);
        assert_eq!(tags(content), ["p", "p", "p"]);
        assert!(content.to_html().contains(r#"<p><strong><a href="https://example.com/report">Decarbonizing Data</a></strong></p>"#));
        assert_eq!(
            cell(&block, 0, 0).elements().next().unwrap().get_attr("alt"),
            Some("Decarbonizing Data")
        );
    }

    #[test]
    fn resource_without_link_is_h3() {
        let block = cards_resource(&[Resource {
            heading: Some("AI needs storage".into()),
            title: Some("ignored".into()),
            ..Default::default()
        }]);
        let content = cell(&block, 0, 1);
        assert_eq!(content.to_html(), "<div><h3>AI needs storage</h3></div>");
    }
}
