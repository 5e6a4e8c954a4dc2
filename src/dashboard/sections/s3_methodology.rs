use crate::dashboard::types::Block;

pub fn generate() -> Vec<Block> {
    vec![
        Block::Header("🧰 Methodology".to_string()),
        Block::Markdown(
            r#"- **EDA + Cleaning**: price standardization, missing value handling, outlier control
- **VADER Sentiment**: compound score per review and sentiment labeling
- **Aggregation + Join**: listing-level average sentiment merged with listing attributes
- **Comparative Analysis**: sentiment trends across price ranges and listing segments"#
                .to_string(),
        ),
    ]
}
