//! Results: key insights and the visuals grid
//!
//! The single-page layout shows insights and visuals under separate headers.
//! The sidebar layout merges them into one "Results & Visuals" section.

use crate::dashboard::assets::{
    AssetResolver, POSITIVE_NEGATIVE_WORDS, PREDICTED_VS_ACTUAL, SENTIMENT_OVER_TIME,
    SENTIMENT_PRICE_RANGES,
};
use crate::dashboard::types::Block;
use crate::navigation::Layout;

/// (title, body) for each insight card.
const INSIGHTS: [(&str, &str); 4] = [
    (
        "💰 Pricing vs Sentiment",
        "Prices cluster in affordable ranges with a small tail of extreme values. \
Positive sentiment dominates across all price bands, meaning higher prices do not consistently guarantee higher sentiment. \
High-priced listings with weaker sentiment indicate potential price–value mismatch risk.",
    ),
    (
        "🧩 Segment Differences",
        "Superhost listings show substantially more positive sentiment, supporting the Superhost badge as a quality signal. \
Entire homes/apartments tend to receive stronger sentiment than private rooms, suggesting privacy and professionalism shape satisfaction.",
    ),
    (
        "🗣️ Guest Experience Drivers",
        "Negative sentiment is driven mainly by operational and expectation gaps, especially cleanliness, communication, and check-in issues. \
These factors often matter more than amenities when reviews turn negative.",
    ),
    (
        "📈 Sentiment Over Time",
        "Sentiment stays consistently positive over a long horizon with occasional dips that can flag guest dissatisfaction events. \
Sentiment shifts can act as an early-warning signal before star ratings show meaningful change.",
    ),
];

pub fn generate(layout: Layout, assets: &AssetResolver) -> Vec<Block> {
    let mut blocks = Vec::new();

    match layout {
        Layout::SinglePage => {
            blocks.push(Block::Header("📊 Results & Key Insights".to_string()));
            blocks.extend(insight_cards());
            blocks.push(Block::Header("🖼️ Visuals Included in README".to_string()));
        }
        Layout::Sidebar => {
            blocks.push(Block::Header("📊 Results & Visuals".to_string()));
            blocks.extend(insight_cards());
            blocks.push(Block::Subheader("🖼️ Visuals".to_string()));
        }
    }

    blocks.extend(visuals_grid(assets));
    blocks
}

fn insight_cards() -> Vec<Block> {
    INSIGHTS
        .iter()
        .map(|(title, body)| Block::Card {
            title: title.to_string(),
            body: body.to_string(),
        })
        .collect()
}

/// Two rows of two image columns.
fn visuals_grid(assets: &AssetResolver) -> Vec<Block> {
    vec![
        Block::Columns(vec![
            assets.show(&POSITIVE_NEGATIVE_WORDS),
            assets.show(&SENTIMENT_OVER_TIME),
        ]),
        Block::Columns(vec![
            assets.show(&SENTIMENT_PRICE_RANGES),
            assets.show(&PREDICTED_VS_ACTUAL),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_grid_shows_four_distinct_slots() {
        let dir = TempDir::new().unwrap();
        for name in ["positive_negative_words.png", "sentiment_over_time.png", "sentiment_price_ranges.png", "predicted_vs_actual.png"] {
            std::fs::write(dir.path().join(name), b"png").unwrap();
        }
        let blocks = visuals_grid(&AssetResolver::new(dir.path()));

        let mut names = Vec::new();
        for block in &blocks {
            if let Block::Columns(cols) = block {
                assert_eq!(cols.len(), 2);
                for col in cols {
                    match col {
                        Block::Image(p) => names.push(p.file_name.clone()),
                        other => panic!("expected image, got {:?}", other),
                    }
                }
            }
        }
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_layout_headings() {
        let assets = AssetResolver::new("does-not-exist");
        let single = generate(Layout::SinglePage, &assets);
        let sidebar = generate(Layout::Sidebar, &assets);

        assert_eq!(single[0], Block::Header("📊 Results & Key Insights".to_string()));
        assert_eq!(sidebar[0], Block::Header("📊 Results & Visuals".to_string()));
        assert_eq!(single.iter().filter(|b| matches!(b, Block::Card { .. })).count(), 4);
    }
}
