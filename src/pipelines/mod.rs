pub mod ner;
pub mod sentiment;
pub mod stats;
pub mod summarization;
pub mod utils;
pub mod zero_shot;
