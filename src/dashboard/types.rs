//! Page model shared by the generator and the formatters.

use serde::{Deserialize, Serialize};

use crate::navigation::{Layout, Section};

/// A rendered UI primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Title(String),
    Header(String),
    Subheader(String),
    /// Markdown source, rendered by the formatter.
    Markdown(String),
    /// Styled insight card; `body` is markdown.
    Card { title: String, body: String },
    /// Side-by-side columns, one block per column.
    Columns(Vec<Block>),
    Image(ImagePanel),
    /// Non-fatal inline warning.
    Warning(String),
    Divider,
    Caption(String),
    /// In-page navigation target (single-page layout).
    Anchor(String),
}

/// An image asset that was found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePanel {
    /// Path as checked on disk (e.g. `images/sentiment_over_time.png`).
    pub path: String,
    pub file_name: String,
    pub caption: String,
    /// Fixed pixel width; `None` stretches to the container.
    pub width: Option<u32>,
}

/// One sidebar radio option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub slug: String,
    pub href: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page_title: String,
    pub layout: Layout,
    pub selected: Section,
    pub nav: Vec<NavItem>,
    pub blocks: Vec<Block>,
}

impl Page {
    /// All warning messages, in document order.
    pub fn warnings(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for block in &self.blocks {
            collect_warnings(block, &mut out);
        }
        out
    }

    /// All images that were found, in document order.
    pub fn images(&self) -> Vec<&ImagePanel> {
        let mut out = Vec::new();
        for block in &self.blocks {
            collect_images(block, &mut out);
        }
        out
    }

    /// `1` for each image slot that resolved, `0` for each missing one.
    ///
    /// Two renders of the same section differ only when this changes.
    pub fn asset_signature(&self) -> String {
        let mut sig = String::new();
        for block in &self.blocks {
            push_signature(block, &mut sig);
        }
        sig
    }
}

fn collect_warnings<'a>(block: &'a Block, out: &mut Vec<&'a str>) {
    match block {
        Block::Warning(msg) => out.push(msg),
        Block::Columns(cols) => cols.iter().for_each(|b| collect_warnings(b, out)),
        _ => {}
    }
}

fn collect_images<'a>(block: &'a Block, out: &mut Vec<&'a ImagePanel>) {
    match block {
        Block::Image(panel) => out.push(panel),
        Block::Columns(cols) => cols.iter().for_each(|b| collect_images(b, out)),
        _ => {}
    }
}

fn push_signature(block: &Block, sig: &mut String) {
    match block {
        Block::Image(_) => sig.push('1'),
        Block::Warning(_) => sig.push('0'),
        Block::Columns(cols) => cols.iter().for_each(|b| push_signature(b, sig)),
        _ => {}
    }
}
