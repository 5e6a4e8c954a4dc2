//! About the Data
//!
//! Describes the two source datasets and the variables engineered from them.

use crate::dashboard::types::Block;

pub fn generate() -> Vec<Block> {
    vec![
        Block::Header("📂 About the Data".to_string()),
        Block::Markdown(
            r#"**Listings Dataset**
- Price, room type, bedrooms, bathrooms, amenities, neighborhood
- Host attributes including Superhost status

**Reviews Dataset**
- Guest review comments and timestamps
- Processed using VADER sentiment analysis

**Engineered Variables**
- Average sentiment per listing
- Most common sentiment label per listing
- Price range bands for comparison"#
                .to_string(),
        ),
    ]
}
