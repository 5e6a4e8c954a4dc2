use crate::dashboard::types::Page;
use serde_json;

/// JSON formatter for dashboard pages
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format page as pretty-printed JSON
    pub fn format(page: &Page) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(page)
    }

    /// Format page as compact JSON (no whitespace)
    pub fn format_compact(page: &Page) -> Result<String, serde_json::Error> {
        serde_json::to_string(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{AssetResolver, DashboardGenerator};
    use crate::navigation::{Layout, Section};

    fn results_page() -> Page {
        DashboardGenerator::new(Layout::Sidebar, AssetResolver::new("no-such-dir"))
            .generate(Some(Section::Results))
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&results_page()).unwrap();

        assert!(json.contains("\"layout\": \"sidebar\""));
        assert!(json.contains("\"selected\": \"results\""));
        assert!(json.contains("\"kind\": \"warning\""));
        assert!(json.contains("no-such-dir/predicted_vs_actual.png"));
    }

    #[test]
    fn test_format_compact_round_trips() {
        let page = results_page();
        let json = JsonFormatter::format_compact(&page).unwrap();

        assert!(!json.contains("\n  "));
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }
}
