//! Recommendation pipeline and the library operations built on it

pub mod engine;
pub mod inference;
pub mod library;
pub mod library_filter;
pub mod normalizer;
pub mod reasoning;
pub mod recommendations;
pub mod scorer;

pub use engine::RecommendationEngine;
pub use library_filter::{filter_library, matches_master_mood, LibraryFilter};
pub use recommendations::{get_recommendations, Recommendation};
