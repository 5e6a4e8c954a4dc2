//! Business Impact

use crate::dashboard::types::Block;

pub fn generate() -> Vec<Block> {
    vec![
        Block::Header("💼 Business Impact".to_string()),
        Block::Markdown(
            r#"- Enables early detection of declining guest experience
- Helps hosts align pricing with perceived value
- Highlights operational pain points (cleanliness, check-in, communication)
- Supports proactive improvements before ratings decline"#
                .to_string(),
        ),
    ]
}
