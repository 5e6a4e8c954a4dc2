use crate::dashboard::types::Block;

pub fn generate() -> Vec<Block> {
    vec![
        Block::Header("📌 Key Takeaways".to_string()),
        Block::Markdown(
            r#"- VADER provides a fast and interpretable sentiment signal at scale
- Joining review sentiment with listing attributes enables price–value insights
- Price does not automatically predict satisfaction
- Monitoring sentiment trends helps prioritize operational fixes"#
                .to_string(),
        ),
    ]
}
