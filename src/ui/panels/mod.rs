pub mod genotype_panel;
pub mod recommendation_panel;

pub use genotype_panel::GenotypePanel;
pub use recommendation_panel::RecommendationPanel;
