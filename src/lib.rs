pub mod catalog;
pub mod config;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;
pub mod ui;

pub use catalog::MarkerCatalog;
pub use engines::recommendation::{derive_recommendations, RecommendationEngine};
pub use types::{GenotypeState, Recommendation, RecommendationLevel};
