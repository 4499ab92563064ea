use serde::Serialize;

use crate::tree::{Element, Node};

pub type Cell = Vec<Node>;

/// A named block table. Row 0 is always the single header cell carrying the
/// block name; `rows` holds everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, N>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.rows
            .push(cells.into_iter().map(|n| vec![n.into()]).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content rows, header excluded.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Header row included.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn to_element(&self) -> Element {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(1);
        let mut th = Element::new("th");
        if width > 1 {
            th = th.attr("colspan", width.to_string());
        }
        let header = Element::new("tr").child(th.text(self.name.as_str()));

        let body = self.rows.iter().map(|cells| {
            Element::new("tr").children(
                cells
                    .iter()
                    .map(|cell| Element::new("td").children(cell.iter().cloned())),
            )
        });

        Element::new("table").child(header).children(body)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Element(block.to_element())
    }
}

pub fn section_metadata(style: &str) -> Block {
    Block::new("Section Metadata").row(["style", style])
}
