//! Image assets produced by the offline analysis, and the guarded display helper.
//!
//! Images are opaque: the dashboard only checks that they exist and links them.

use std::path::{Path, PathBuf};

use crate::dashboard::types::{Block, ImagePanel};

/// An expected image file and the caption it is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub file_name: &'static str,
    pub caption: &'static str,
}

pub const POSITIVE_NEGATIVE_WORDS: AssetSpec = AssetSpec {
    file_name: "positive_negative_words.png",
    caption: "Top Positive and Negative Words",
};

pub const SENTIMENT_OVER_TIME: AssetSpec = AssetSpec {
    file_name: "sentiment_over_time.png",
    caption: "Average Sentiment Over Time",
};

pub const SENTIMENT_PRICE_RANGES: AssetSpec = AssetSpec {
    file_name: "sentiment_price_ranges.png",
    caption: "Sentiment Distribution Across Price Ranges",
};

pub const PREDICTED_VS_ACTUAL: AssetSpec = AssetSpec {
    file_name: "predicted_vs_actual.png",
    caption: "Forecasting Ratings: Predicted vs Actual",
};

/// The four images, in grid order (row-major, two per row).
pub const ALL_ASSETS: [AssetSpec; 4] = [
    POSITIVE_NEGATIVE_WORDS,
    SENTIMENT_OVER_TIME,
    SENTIMENT_PRICE_RANGES,
    PREDICTED_VS_ACTUAL,
];

/// Resolves asset file names against the layout's asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an asset, as it will be checked and reported. The working
    /// directory root yields the bare file name.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        if self.root.as_os_str().is_empty() || self.root == Path::new(".") {
            PathBuf::from(file_name)
        } else {
            self.root.join(file_name)
        }
    }

    /// Resolve and display one of the known assets at container width.
    pub fn show(&self, asset: &AssetSpec) -> Block {
        show_image(&self.resolve(asset.file_name), asset.caption, None)
    }
}

/// Display an image if it exists on disk; otherwise a warning naming the path.
///
/// Never fails: a missing asset only changes which block is produced.
pub fn show_image(path: &Path, caption: &str, width: Option<u32>) -> Block {
    if path.exists() {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Block::Image(ImagePanel {
            path: path.display().to_string(),
            file_name,
            caption: caption.to_string(),
            width,
        })
    } else {
        tracing::warn!("Image not found: {}", path.display());
        Block::Warning(missing_image_message(path))
    }
}

pub fn missing_image_message(path: &Path) -> String {
    format!(
        "Image not found: `{}`. Please upload it to the repo and confirm the filename/path.",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path_warns_with_exact_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nowhere").join("sentiment_over_time.png");

        match show_image(&path, "Average Sentiment Over Time", None) {
            Block::Warning(msg) => assert!(msg.contains(&path.display().to_string())),
            other => panic!("expected warning, got {:?}", other),
        }
    }

    #[test]
    fn test_existing_path_renders_image_with_caption() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("predicted_vs_actual.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        match show_image(&path, "Forecasting Ratings: Predicted vs Actual", Some(480)) {
            Block::Image(panel) => {
                assert_eq!(panel.caption, "Forecasting Ratings: Predicted vs Actual");
                assert_eq!(panel.file_name, "predicted_vs_actual.png");
                assert_eq!(panel.path, path.display().to_string());
                assert_eq!(panel.width, Some(480));
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_against_roots() {
        assert_eq!(
            AssetResolver::new("images").resolve("a.png"),
            PathBuf::from("images/a.png")
        );
        assert_eq!(AssetResolver::new(".").resolve("a.png"), PathBuf::from("a.png"));
        assert_eq!(AssetResolver::new("").resolve("a.png"), PathBuf::from("a.png"));
    }

    #[test]
    fn test_asset_file_names_distinct() {
        for (i, a) in ALL_ASSETS.iter().enumerate() {
            for b in &ALL_ASSETS[i + 1..] {
                assert_ne!(a.file_name, b.file_name);
            }
        }
    }
}
