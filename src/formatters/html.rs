use pulldown_cmark::{html, Options, Parser};

use crate::dashboard::types::{Block, ImagePanel, Page};
use crate::navigation::Layout;

/// Stylesheet shared by the standalone document and the server template.
pub const DASHBOARD_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #262730; line-height: 1.6; }
.app { display: flex; min-height: 100vh; }
.sidebar { width: 240px; flex-shrink: 0; background: #f0f2f6; padding: 24px 16px; }
.sidebar h2 { font-size: 1em; color: #555; margin-top: 0; }
.sidebar ul { list-style: none; padding: 0; margin: 0; }
.sidebar li a { display: block; padding: 6px 10px; border-radius: 6px; color: #262730; text-decoration: none; }
.sidebar li a:hover { background: #e3e6ec; }
.sidebar li.selected a { background: #ff4b4b; color: white; font-weight: 600; }
.main { flex: 1; max-width: 1200px; margin: 0 auto; padding: 32px 48px; }
h1 { color: #2c3e50; margin-bottom: 10px; }
h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 30px; }
h3 { color: #34495e; margin-top: 20px; }
.card { background: #ffffff; border: 1px solid #e6e9ef; border-left: 4px solid #ff5a5f; padding: 15px 20px; margin: 15px 0; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.06); }
.card h3 { margin-top: 0; }
.columns { display: flex; gap: 24px; margin: 16px 0; }
.columns > .column { flex: 1; min-width: 0; }
figure { margin: 0; }
figure img.stretch { width: 100%; height: auto; }
figcaption { color: #6c757d; font-size: 0.9em; text-align: center; }
.warning { background: #fff3cd; border-left: 4px solid #ffc107; padding: 15px; margin: 15px 0; border-radius: 4px; }
.caption { color: #6c757d; font-size: 0.9em; }
hr { border: none; border-top: 1px solid #e6e9ef; margin: 32px 0 16px; }
"#;

/// HTML formatter for dashboard pages
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    asset_base: String,
}

impl HtmlFormatter {
    /// Image `src` values become `<asset_base>/<file_name>`.
    pub fn new(asset_base: impl Into<String>) -> Self {
        let base: String = asset_base.into();
        Self {
            asset_base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Formatter for pages served by the HTTP server (assets mounted at `/assets`).
    pub fn for_server() -> Self {
        Self::new("/assets")
    }

    /// Page content as an HTML fragment (no navigation, no document shell).
    pub fn format_blocks(&self, page: &Page) -> String {
        let mut out = String::with_capacity(8192);
        for block in &page.blocks {
            self.format_block(&mut out, block);
        }
        out
    }

    /// Sidebar navigation as an HTML list.
    pub fn format_nav(&self, page: &Page) -> String {
        let mut out = String::with_capacity(1024);
        let heading = match page.layout {
            Layout::Sidebar => "Navigation",
            Layout::SinglePage => "On this page",
        };
        out.push_str(&format!("<h2>{}</h2>\n<ul>\n", heading));
        for item in &page.nav {
            let class = if item.selected { " class=\"selected\"" } else { "" };
            out.push_str(&format!(
                "<li{}><a href=\"{}\">{}</a></li>\n",
                class,
                escape_html(&item.href),
                escape_html(&item.label)
            ));
        }
        out.push_str("</ul>\n");
        out
    }

    /// Standalone HTML document with embedded CSS.
    pub fn format_document(&self, page: &Page) -> String {
        let mut out = String::with_capacity(12288);

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(&page.page_title)));
        out.push_str("<style>");
        out.push_str(DASHBOARD_CSS);
        out.push_str("</style>\n</head>\n<body>\n<div class=\"app\">\n");

        out.push_str("<nav class=\"sidebar\">\n");
        out.push_str(&self.format_nav(page));
        out.push_str("</nav>\n");

        out.push_str("<main class=\"main\" id=\"content\">\n");
        out.push_str(&self.format_blocks(page));
        out.push_str("</main>\n</div>\n</body>\n</html>\n");

        out
    }

    fn format_block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Title(text) => out.push_str(&format!("<h1>{}</h1>\n", escape_html(text))),
            Block::Header(text) => out.push_str(&format!("<h2>{}</h2>\n", escape_html(text))),
            Block::Subheader(text) => out.push_str(&format!("<h3>{}</h3>\n", escape_html(text))),
            Block::Markdown(text) => out.push_str(&render_markdown(text)),
            Block::Card { title, body } => {
                out.push_str("<div class=\"card\">\n");
                out.push_str(&format!("<h3>{}</h3>\n", escape_html(title)));
                out.push_str(&render_markdown(body));
                out.push_str("</div>\n");
            }
            Block::Columns(cols) => {
                out.push_str("<div class=\"columns\">\n");
                for col in cols {
                    out.push_str("<div class=\"column\">\n");
                    self.format_block(out, col);
                    out.push_str("</div>\n");
                }
                out.push_str("</div>\n");
            }
            Block::Image(panel) => self.format_image(out, panel),
            Block::Warning(msg) => {
                out.push_str("<div class=\"warning\" role=\"alert\">⚠️ ");
                out.push_str(&render_warning(msg));
                out.push_str("</div>\n");
            }
            Block::Divider => out.push_str("<hr>\n"),
            Block::Caption(text) => {
                out.push_str(&format!("<p class=\"caption\">{}</p>\n", escape_html(text)))
            }
            Block::Anchor(slug) => {
                out.push_str(&format!("<a id=\"{}\"></a>\n", escape_html(slug)))
            }
        }
    }

    fn format_image(&self, out: &mut String, panel: &ImagePanel) {
        let src = format!("{}/{}", self.asset_base, panel.file_name);
        let sizing = match panel.width {
            Some(w) => format!("width=\"{}\"", w),
            None => "class=\"stretch\"".to_string(),
        };
        out.push_str("<figure>\n");
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" {}>\n",
            escape_html(&src),
            escape_html(&panel.caption),
            sizing
        ));
        out.push_str(&format!("<figcaption>{}</figcaption>\n", escape_html(&panel.caption)));
        out.push_str("</figure>\n");
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::for_server()
    }
}

/// Render a markdown block to HTML.
pub fn render_markdown(md: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(md, options);
    let mut out = String::with_capacity(md.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Escape a warning message, wrapping the outermost backtick span in `<code>`.
///
/// The span is a file path and may itself contain backticks, so it is taken
/// from the first to the last backtick instead of being parsed as markdown.
fn render_warning(msg: &str) -> String {
    match (msg.find('`'), msg.rfind('`')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}<code>{}</code>{}",
            escape_html(&msg[..start]),
            escape_html(&msg[start + 1..end]),
            escape_html(&msg[end + 1..])
        ),
        _ => escape_html(msg),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
