use crate::dashboard::types::Block;

pub const FOOTER_CAPTION: &str =
    "📊 AI & Analytics Project | Rhode Island Airbnb | Pricing vs Sentiment (VADER)";

pub fn generate() -> Vec<Block> {
    vec![Block::Divider, Block::Caption(FOOTER_CAPTION.to_string())]
}
