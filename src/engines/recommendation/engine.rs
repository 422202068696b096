use super::rules::{standard_rules, MarkerRule};
use crate::types::{GenotypeState, Recommendation};
use std::sync::OnceLock;

/// Evaluates an ordered rule table against a genotype state.
pub struct RecommendationEngine {
    rules: Vec<MarkerRule>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    /// Output follows rule order, not severity.
    pub fn derive(&self, state: &GenotypeState) -> Vec<Recommendation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(state))
            .collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive recommendations with the standard rule table.
pub fn derive_recommendations(state: &GenotypeState) -> Vec<Recommendation> {
    static ENGINE: OnceLock<RecommendationEngine> = OnceLock::new();
    ENGINE.get_or_init(RecommendationEngine::new).derive(state)
}
