pub mod engine;
pub mod rules;

pub use engine::{derive_recommendations, RecommendationEngine};
pub use rules::{Drug, MarkerRule, Outcome, Tier};
