//! Dashboard Generator
//!
//! Main entry point for building a dashboard page. Orchestrates the section
//! modules for the configured layout.
//!
//! Public API (consumed by api_server.rs and the export binary):
//! - DashboardGenerator::new(layout, assets) -> Self
//! - DashboardGenerator::generate(selection) -> Page
//!
//! Generation is stateless: the only input besides the selection is whether
//! each image exists on disk at call time.

use crate::dashboard::assets::AssetResolver;
use crate::dashboard::sections::{
    footer, masthead, s1_overview, s2_data, s3_methodology, s4_results, s5_impact, s6_takeaways,
};
use crate::dashboard::types::{Block, NavItem, Page};
use crate::navigation::{Layout, Section};

/// How sidebar navigation links are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    /// `/?section=<slug>`, served by the HTTP server.
    #[default]
    Query,
    /// `<slug>.html`, for exported static files.
    StaticFiles,
}

#[derive(Debug, Clone)]
pub struct DashboardGenerator {
    layout: Layout,
    assets: AssetResolver,
    link_style: LinkStyle,
}

impl DashboardGenerator {
    pub fn new(layout: Layout, assets: AssetResolver) -> Self {
        Self {
            layout,
            assets,
            link_style: LinkStyle::default(),
        }
    }

    pub fn with_link_style(mut self, link_style: LinkStyle) -> Self {
        self.link_style = link_style;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    /// Build the page for a navigation selection (`None` selects the first option).
    ///
    /// The single-page layout renders every section regardless of selection;
    /// the selection only marks the active nav entry.
    pub fn generate(&self, selection: Option<Section>) -> Page {
        let selected = selection.unwrap_or_default();

        let mut blocks = masthead::generate();
        match self.layout {
            Layout::SinglePage => {
                for section in Section::ALL {
                    blocks.push(Block::Anchor(section.slug().to_string()));
                    blocks.extend(self.section_blocks(section));
                }
            }
            Layout::Sidebar => {
                blocks.extend(self.section_blocks(selected));
            }
        }
        blocks.extend(footer::generate());

        tracing::debug!(
            layout = %self.layout,
            section = selected.slug(),
            blocks = blocks.len(),
            "Generated dashboard page"
        );

        Page {
            page_title: masthead::PAGE_TITLE.to_string(),
            layout: self.layout,
            selected,
            nav: self.nav_items(selected),
            blocks,
        }
    }

    fn section_blocks(&self, section: Section) -> Vec<Block> {
        match section {
            Section::Overview => s1_overview::generate(),
            Section::Data => s2_data::generate(),
            Section::Methodology => s3_methodology::generate(),
            Section::Results => s4_results::generate(self.layout, &self.assets),
            Section::BusinessImpact => s5_impact::generate(),
            Section::Takeaways => s6_takeaways::generate(),
        }
    }

    fn nav_items(&self, selected: Section) -> Vec<NavItem> {
        Section::ALL
            .iter()
            .map(|section| {
                let href = match (self.layout, self.link_style) {
                    (Layout::SinglePage, _) => format!("#{}", section.slug()),
                    (Layout::Sidebar, LinkStyle::Query) => format!("/?section={}", section.slug()),
                    (Layout::Sidebar, LinkStyle::StaticFiles) => format!("{}.html", section.slug()),
                };
                NavItem {
                    label: section.label().to_string(),
                    slug: section.slug().to_string(),
                    href,
                    selected: *section == selected,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sidebar(dir: &std::path::Path) -> DashboardGenerator {
        DashboardGenerator::new(Layout::Sidebar, AssetResolver::new(dir))
    }

    #[test]
    fn test_every_sidebar_selection_is_distinct_and_non_empty() {
        let dir = TempDir::new().unwrap();
        let generator = sidebar(dir.path());
        let pages: Vec<Page> = Section::ALL.iter().map(|s| generator.generate(Some(*s))).collect();

        for page in &pages {
            // Masthead (2) + footer (2) + at least a header and a body
            assert!(page.blocks.len() >= 6, "section {:?} rendered too little", page.selected);
        }
        for (i, a) in pages.iter().enumerate() {
            for b in &pages[i + 1..] {
                assert_ne!(a.blocks, b.blocks, "{:?} and {:?} render identically", a.selected, b.selected);
            }
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sentiment_over_time.png"), b"png").unwrap();
        let generator = sidebar(dir.path());

        for section in Section::ALL {
            assert_eq!(generator.generate(Some(section)), generator.generate(Some(section)));
        }
    }

    #[test]
    fn test_single_page_renders_all_sections() {
        let generator = DashboardGenerator::new(Layout::SinglePage, AssetResolver::new("missing-images"));
        let page = generator.generate(Some(Section::Methodology));

        let anchors: Vec<&str> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Anchor(slug) => Some(slug.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(anchors, Section::ALL.iter().map(|s| s.slug()).collect::<Vec<_>>());

        assert_eq!(page.warnings().len(), 4);
        assert_eq!(page.asset_signature(), "0000");
        assert!(page.nav.iter().all(|n| n.href.starts_with('#')));
        assert!(page.nav.iter().find(|n| n.selected).map(|n| n.slug.as_str()) == Some("methodology"));
    }

    #[test]
    fn test_results_section_reports_missing_and_found_assets() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("positive_negative_words.png"), b"png").unwrap();
        std::fs::write(dir.path().join("predicted_vs_actual.png"), b"png").unwrap();

        let page = sidebar(dir.path()).generate(Some(Section::Results));
        assert_eq!(page.asset_signature(), "1001");

        let missing = dir.path().join("sentiment_over_time.png").display().to_string();
        assert!(page.warnings().iter().any(|w| w.contains(&missing)));
        assert!(page.images().iter().all(|p| !p.caption.is_empty()));
    }

    #[test]
    fn test_nav_links() {
        let generator = sidebar(std::path::Path::new("."));
        let page = generator.generate(None);
        assert_eq!(page.selected, Section::Overview);
        assert_eq!(page.nav[3].href, "/?section=results");
        assert_eq!(page.nav.iter().filter(|n| n.selected).count(), 1);

        let page = generator.with_link_style(LinkStyle::StaticFiles).generate(None);
        assert_eq!(page.nav[4].href, "business-impact.html");
    }
}
