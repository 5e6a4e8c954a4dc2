//! Static export of every navigation state.
//!
//! Writes `<name>.md` and `<name>.html` per page into an output directory and
//! copies the images that were found into `<out>/assets/`, so the HTML files
//! open without a server. Missing images stay as warnings in the export.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dashboard::{DashboardGenerator, LinkStyle, Page};
use crate::error::Result;
use crate::formatters::{HtmlFormatter, MarkdownFormatter};
use crate::navigation::{Layout, Section};

const EXPORT_ASSET_DIR: &str = "assets";

/// Files written by one export run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: Vec<PathBuf>,
    pub copied_assets: Vec<PathBuf>,
    pub warnings: usize,
}

/// Render every navigation state of the generator's layout into `out_dir`.
///
/// The single-page layout has one state and is written as `index`; the
/// sidebar layout writes one file pair per section.
pub fn export_dashboard(generator: &DashboardGenerator, out_dir: &Path) -> Result<ExportSummary> {
    let generator = generator.clone().with_link_style(LinkStyle::StaticFiles);
    let html = HtmlFormatter::new(EXPORT_ASSET_DIR);
    let markdown = MarkdownFormatter::new(EXPORT_ASSET_DIR);

    fs::create_dir_all(out_dir)?;
    let mut summary = ExportSummary::default();

    let states: Vec<(String, Page)> = match generator.layout() {
        Layout::SinglePage => vec![("index".to_string(), generator.generate(None))],
        Layout::Sidebar => Section::ALL
            .iter()
            .map(|s| (s.slug().to_string(), generator.generate(Some(*s))))
            .collect(),
    };

    for (name, page) in &states {
        summary.warnings += page.warnings().len();

        let md_path = out_dir.join(format!("{}.md", name));
        fs::write(&md_path, markdown.format(page))?;
        tracing::info!("Wrote {}", md_path.display());

        let html_path = out_dir.join(format!("{}.html", name));
        fs::write(&html_path, html.format_document(page))?;
        tracing::info!("Wrote {}", html_path.display());

        summary.pages.push(md_path);
        summary.pages.push(html_path);

        for panel in page.images() {
            let target_dir = out_dir.join(EXPORT_ASSET_DIR);
            let target = target_dir.join(&panel.file_name);
            if summary.copied_assets.contains(&target) {
                continue;
            }
            fs::create_dir_all(&target_dir)?;
            fs::copy(&panel.path, &target)?;
            tracing::debug!("Copied {} -> {}", panel.path, target.display());
            summary.copied_assets.push(target);
        }
    }

    if generator.layout() == Layout::Sidebar {
        // Entry point for the exported site is the first radio option
        let index = out_dir.join("index.html");
        fs::copy(out_dir.join(format!("{}.html", Section::default().slug())), &index)?;
        summary.pages.push(index);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::AssetResolver;
    use tempfile::TempDir;

    #[test]
    fn test_sidebar_export_writes_every_section() {
        let assets = TempDir::new().unwrap();
        std::fs::write(assets.path().join("sentiment_price_ranges.png"), b"png").unwrap();
        let out = TempDir::new().unwrap();

        let generator = DashboardGenerator::new(Layout::Sidebar, AssetResolver::new(assets.path()));
        let summary = export_dashboard(&generator, out.path()).unwrap();

        // 6 sections x (md + html) + index.html
        assert_eq!(summary.pages.len(), 13);
        for section in Section::ALL {
            assert!(out.path().join(format!("{}.md", section.slug())).is_file());
            assert!(out.path().join(format!("{}.html", section.slug())).is_file());
        }
        assert_eq!(summary.copied_assets, vec![out.path().join("assets/sentiment_price_ranges.png")]);
        assert_eq!(summary.warnings, 3);

        let results = std::fs::read_to_string(out.path().join("results.html")).unwrap();
        assert!(results.contains("src=\"assets/sentiment_price_ranges.png\""));
        assert!(results.contains("href=\"overview.html\""));

        // Markdown image links resolve inside the export directory
        let results_md = std::fs::read_to_string(out.path().join("results.md")).unwrap();
        assert!(results_md.contains("![Sentiment Distribution Across Price Ranges](assets/sentiment_price_ranges.png)"));
        for line in results_md.lines().filter(|l| l.starts_with("![")) {
            assert!(line.contains("](assets/"), "image link escapes the export: {}", line);
        }
    }

    #[test]
    fn test_single_page_export_is_one_document() {
        let out = TempDir::new().unwrap();
        let generator = DashboardGenerator::new(Layout::SinglePage, AssetResolver::new("missing"));
        let summary = export_dashboard(&generator, out.path()).unwrap();

        assert_eq!(summary.pages, vec![out.path().join("index.md"), out.path().join("index.html")]);
        assert!(summary.copied_assets.is_empty());
        assert_eq!(summary.warnings, 4);
        assert!(!out.path().join("assets").exists());
    }
}
