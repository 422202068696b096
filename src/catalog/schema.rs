use serde::{Deserialize, Serialize};

/// Accent colour used when a gene group is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Blue,
    Indigo,
    Cyan,
    Violet,
    Pink,
    Rose,
}

/// A single genotyped position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnpDefinition {
    pub id: String,
    pub name: String,
    pub options: Vec<String>,
    pub default_value: String,
}

impl SnpDefinition {
    pub fn new(id: &str, name: &str, options: &[&str], default_value: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            default_value: default_value.to_string(),
        }
    }

    pub fn allows(&self, genotype: &str) -> bool {
        self.options.iter().any(|o| o == genotype)
    }
}

/// SNPs grouped under their gene symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneGroup {
    pub gene: String,
    pub description: String,
    #[serde(default)]
    pub theme: ThemeColor,
    pub snps: Vec<SnpDefinition>,
}
