pub mod app;
pub mod config;
pub mod core;
pub mod detection;
pub mod table;

pub use detection::{counting_detection, ngram_detection, Detection, Method};
pub use table::{LanguageTable, ScoreMap};
