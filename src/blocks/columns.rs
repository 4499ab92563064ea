use crate::content::{MosaicColumns, StatsColumns};
use crate::table::Block;
use crate::tree::{column, heading, link, paragraph, strong, Element};

use super::banner::DEFAULT_HEADING_LEVEL;
use super::cta_paragraph;

pub const COLUMNS_MOZAIC: &str = "Columns-Mozaic";
pub const COLUMNS_STATS: &str = "Columns-Stats";

/// Single row: lead column, then a title/description pair per detail item.
pub fn columns_mozaic(content: &MosaicColumns) -> Block {
    let lead = &content.left_column;
    let mut left = column().child(heading(
        lead.level.unwrap_or(DEFAULT_HEADING_LEVEL),
        &lead.heading,
    ));
    if let Some(description) = &lead.description {
        left = left.child(paragraph(description.as_str()));
    }
    if let Some(cta) = &lead.cta {
        left = left.child(cta_paragraph(cta));
    }

    let right = content.right_column.iter().fold(column(), |col, item| {
        let title = match &item.link {
            Some(href) => strong(link(href, &item.title)),
            None => strong(item.title.as_str()),
        };
        let col = col.child(paragraph(title));
        match &item.description {
            Some(description) => col.child(paragraph(description.as_str())),
            None => col,
        }
    });

    Block::new(COLUMNS_MOZAIC).row([left, right])
}

pub fn columns_stats(content: &StatsColumns) -> Block {
    let left = match &content.left_column.description {
        Some(description) => column().child(paragraph(description.as_str())),
        None => column(),
    };

    let right: Element = content.right_column.iter().fold(column(), |col, item| {
        col.child(paragraph(strong(item.stat.as_str())))
            .child(paragraph(item.label.as_str()))
    });

    Block::new(COLUMNS_STATS).row([left, right])
}
