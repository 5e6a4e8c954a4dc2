//! Title and introduction shown above every layout.

use crate::dashboard::types::Block;

pub const PAGE_TITLE: &str = "Airbnb Pricing vs Sentiment Analysis";

pub fn generate() -> Vec<Block> {
    vec![
        Block::Title(format!("🏠 {}", PAGE_TITLE)),
        Block::Markdown(
            "This app summarizes an AI-driven analysis of **Rhode Island Airbnb listings** by combining: \
**pricing + listing attributes** with **VADER sentiment scores** from guest reviews."
                .to_string(),
        ),
    ]
}
