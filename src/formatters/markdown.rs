use crate::dashboard::types::{Block, Page};
use crate::navigation::Layout;

/// Markdown formatter for dashboard pages
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    asset_base: String,
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::for_server()
    }
}

impl MarkdownFormatter {
    /// Image links become `<asset_base>/<file_name>`.
    pub fn new(asset_base: impl Into<String>) -> Self {
        let base: String = asset_base.into();
        Self {
            asset_base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Formatter for markdown served by the HTTP server (assets mounted at `/assets`).
    pub fn for_server() -> Self {
        Self::new("/assets")
    }

    /// Format page as markdown.
    ///
    /// Columns have no markdown equivalent; their cells are emitted one after another.
    pub fn format(&self, page: &Page) -> String {
        let mut md = String::with_capacity(4096);

        // Sidebar navigation as a single line, selected entry in bold
        if page.layout == Layout::Sidebar {
            let items: Vec<String> = page
                .nav
                .iter()
                .map(|item| {
                    if item.selected {
                        format!("**{}**", item.label)
                    } else {
                        format!("[{}]({})", item.label, item.href)
                    }
                })
                .collect();
            md.push_str(&format!("*Navigation:* {}\n\n", items.join(" · ")));
        }

        for block in &page.blocks {
            self.format_block(&mut md, block);
        }

        // Single trailing newline
        let trimmed = md.trim_end().len();
        md.truncate(trimmed);
        md.push('\n');
        md
    }

    fn format_block(&self, md: &mut String, block: &Block) {
        match block {
            Block::Title(text) => md.push_str(&format!("# {}\n\n", text)),
            Block::Header(text) => md.push_str(&format!("## {}\n\n", text)),
            Block::Subheader(text) => md.push_str(&format!("### {}\n\n", text)),
            Block::Markdown(text) => md.push_str(&format!("{}\n\n", text.trim())),
            Block::Card { title, body } => {
                md.push_str(&format!("> **{}**\n>\n", title));
                for line in body.trim().lines() {
                    md.push_str(&format!("> {}\n", line));
                }
                md.push('\n');
            }
            Block::Columns(cols) => {
                for col in cols {
                    self.format_block(md, col);
                }
            }
            Block::Image(panel) => {
                md.push_str(&format!(
                    "![{}]({}/{})\n",
                    panel.caption, self.asset_base, panel.file_name
                ));
                md.push_str(&format!("*{}*\n\n", panel.caption));
            }
            Block::Warning(msg) => md.push_str(&format!("> ⚠️ {}\n\n", msg)),
            Block::Divider => md.push_str("---\n\n"),
            Block::Caption(text) => md.push_str(&format!("*{}*\n\n", text)),
            Block::Anchor(slug) => md.push_str(&format!("<a id=\"{}\"></a>\n\n", slug)),
        }
    }
}
