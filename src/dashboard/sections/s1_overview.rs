//! Project Overview

use crate::dashboard::types::Block;

pub fn generate() -> Vec<Block> {
    vec![
        Block::Header("🔍 Project Overview".to_string()),
        Block::Markdown(
            "The objective is to analyze the relationship between Airbnb listing prices and customer sentiment \
extracted from review text. By converting unstructured reviews into measurable sentiment scores and \
joining them with structured listing data, we uncover patterns related to guest satisfaction and \
price–value alignment."
                .to_string(),
        ),
    ]
}
