pub mod gene_group_card;
pub mod recommendation_card;

pub use gene_group_card::GeneGroupCard;
pub use recommendation_card::RecommendationCard;
