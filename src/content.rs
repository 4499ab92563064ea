use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub bg_image: Option<String>,
    pub eyebrow: Option<String>,
    pub heading: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub ctas: Vec<Cta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub heading: String,
    pub level: Option<u8>,
    pub description: Option<String>,
    pub cta: Option<Cta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub title: String,
    pub link: String,
    pub details: Option<String>,
    pub price: Option<String>,
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub title: String,
    pub link: String,
}

/// Resource cards accept either `heading` or `title`; `heading` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub eyebrow: Option<String>,
    pub heading: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl Resource {
    pub fn heading_text(&self) -> &str {
        self.heading
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicColumns {
    pub left_column: MosaicLead,
    #[serde(default)]
    pub right_column: Vec<MosaicItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicLead {
    pub heading: String,
    pub level: Option<u8>,
    pub description: Option<String>,
    pub cta: Option<Cta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicItem {
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsColumns {
    pub left_column: StatsLead,
    #[serde(default)]
    pub right_column: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsLead {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub stat: String,
    pub label: String,
}

/// Heading plus optional lead-in link, placed ahead of the category cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreProducts {
    pub heading: String,
    pub see_more: Option<Cta>,
}

/// Freestanding heading and paragraph outside any block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub heading: String,
    pub description: Option<String>,
}

/// Every record the homepage sequence draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub hero_slides: Vec<Slide>,
    pub featured_products_heading: String,
    #[serde(default)]
    pub products: Vec<Product>,
    pub explore_products: ExploreProducts,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub value_proposition: Banner,
    #[serde(default)]
    pub ai_data_story: Vec<Resource>,
    pub mozaic_header: Banner,
    pub mozaic_details: MosaicColumns,
    pub capacity_statement: Statement,
    pub company_stats: StatsColumns,
    pub latest_resources_heading: String,
    #[serde(default)]
    pub latest_resources: Vec<Resource>,
    pub esg_banner: Banner,
    #[serde(default)]
    pub footnotes: Vec<String>,
}
