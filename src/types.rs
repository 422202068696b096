use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Two-letter genotype code, e.g. `CT`
pub type Genotype = String;

/// Severity of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationLevel {
    Info,
    Warning,
    Danger,
}

impl RecommendationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationLevel::Info => "info",
            RecommendationLevel::Warning => "warning",
            RecommendationLevel::Danger => "danger",
        }
    }

    /// Short tag shown on recommendation cards
    pub fn tag_label(&self) -> &'static str {
        match self {
            RecommendationLevel::Info => "Notice",
            RecommendationLevel::Warning => "Monitor",
            RecommendationLevel::Danger => "High Risk",
        }
    }
}

impl std::fmt::Display for RecommendationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dosing advice derived from a genotype combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub drug: String,
    pub finding: String,
    pub suggestion: String,
    pub level: RecommendationLevel,
}

/// Currently selected genotype per SNP identifier.
///
/// A missing key means no result has been entered for that SNP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenotypeState {
    values: BTreeMap<String, Genotype>,
}

impl GenotypeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, snp_id: &str) -> Option<&str> {
        self.values.get(snp_id).map(String::as_str)
    }

    /// True when `snp_id` is present and equals `genotype`
    pub fn is(&self, snp_id: &str, genotype: &str) -> bool {
        self.get(snp_id) == Some(genotype)
    }

    /// Unchecked write; use `MarkerCatalog::select` for user input.
    pub fn set(&mut self, snp_id: impl Into<String>, genotype: impl Into<Genotype>) -> Option<Genotype> {
        self.values.insert(snp_id.into(), genotype.into())
    }

    pub fn remove(&mut self, snp_id: &str) -> Option<Genotype> {
        self.values.remove(snp_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for GenotypeState
where
    K: Into<String>,
    V: Into<Genotype>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
