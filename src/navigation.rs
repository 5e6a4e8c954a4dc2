//! Navigation: dashboard layouts and the sidebar section options.
//!
//! The sidebar radio sends the option label verbatim ("Results & Visuals"),
//! while links and the export tool use the slug ("results"). Both resolve to
//! the same `Section`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, Result};

/// How the dashboard arranges its sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Every section top to bottom on one page; images under `images/`.
    #[default]
    SinglePage,
    /// One section at a time, chosen from a sidebar radio; images in the working directory.
    Sidebar,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::SinglePage => "single_page",
            Layout::Sidebar => "sidebar",
        }
    }

    /// Directory the layout expects its image assets in.
    pub fn default_asset_dir(&self) -> &'static str {
        match self {
            Layout::SinglePage => "images",
            Layout::Sidebar => ".",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "single_page" | "single-page" | "single" => Ok(Layout::SinglePage),
            "sidebar" => Ok(Layout::Sidebar),
            _ => Err(DashboardError::UnknownLayout(s.to_string())),
        }
    }
}

/// Sidebar navigation options, in radio order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Overview,
    Data,
    Methodology,
    Results,
    BusinessImpact,
    Takeaways,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Data,
        Section::Methodology,
        Section::Results,
        Section::BusinessImpact,
        Section::Takeaways,
    ];

    /// Radio label as shown in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Data => "About the Data",
            Section::Methodology => "Methodology",
            Section::Results => "Results & Visuals",
            Section::BusinessImpact => "Business Impact",
            Section::Takeaways => "Key Takeaways",
        }
    }

    /// URL-safe identifier, also used as the in-page anchor.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Data => "data",
            Section::Methodology => "methodology",
            Section::Results => "results",
            Section::BusinessImpact => "business-impact",
            Section::Takeaways => "takeaways",
        }
    }

    /// Resolve a navigation selection given as a label or a slug.
    pub fn from_selection(selection: &str) -> Result<Self> {
        let wanted = selection.trim();
        Section::ALL
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(wanted) || s.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::UnknownSection(selection.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        Section::from_selection(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_by_label_and_slug() {
        assert_eq!(Section::from_selection("Results & Visuals").unwrap(), Section::Results);
        assert_eq!(Section::from_selection("results").unwrap(), Section::Results);
        assert_eq!(Section::from_selection("  about the data ").unwrap(), Section::Data);
        assert_eq!(Section::from_selection("business-impact").unwrap(), Section::BusinessImpact);
    }

    #[test]
    fn test_unknown_selection() {
        let err = Section::from_selection("Forecasting").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownSection(ref s) if s == "Forecasting"));
    }

    #[test]
    fn test_labels_and_slugs_unique() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.slug(), b.slug());
            }
        }
    }

    #[test]
    fn test_default_is_first_radio_option() {
        assert_eq!(Section::default(), Section::ALL[0]);
    }

    #[test]
    fn test_layout_parsing() {
        assert_eq!("sidebar".parse::<Layout>().unwrap(), Layout::Sidebar);
        assert_eq!("Single-Page".parse::<Layout>().unwrap(), Layout::SinglePage);
        assert!("tabs".parse::<Layout>().is_err());
        assert_eq!(Layout::SinglePage.default_asset_dir(), "images");
        assert_eq!(Layout::Sidebar.default_asset_dir(), ".");
    }
}
