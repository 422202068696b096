use super::markers::builtin_genes;
use super::schema::{GeneGroup, SnpDefinition};
use crate::error::{PgxError, Result};
use crate::types::GenotypeState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Read-only table of gene groups and their SNPs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerCatalog {
    genes: Vec<GeneGroup>,
}

impl MarkerCatalog {
    /// Builds a catalog and checks its integrity before handing it out.
    pub fn new(genes: Vec<GeneGroup>) -> Result<Self> {
        let catalog = Self { genes };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        Self {
            genes: builtin_genes(),
        }
    }

    /// Load a catalog from a `.json` or `.toml` file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PgxError::Catalog(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;

        let catalog: MarkerCatalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            _ => toml::from_str(&contents)?,
        };

        catalog.validate()?;
        log::info!(
            "Loaded marker catalog from {} ({} genes, {} SNPs)",
            path.display(),
            catalog.genes.len(),
            catalog.snps().count()
        );
        Ok(catalog)
    }

    /// Check unique ids, non-empty option sets and defaults drawn from options.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for snp in self.snps() {
            let problem = if !seen.insert(snp.id.as_str()) {
                Some(format!("duplicate SNP identifier '{}'", snp.id))
            } else if snp.options.is_empty() {
                Some(format!("SNP '{}' has no genotype options", snp.id))
            } else if !snp.allows(&snp.default_value) {
                Some(format!(
                    "default '{}' of SNP '{}' is not one of {:?}",
                    snp.default_value, snp.id, snp.options
                ))
            } else {
                None
            };

            if let Some(message) = problem {
                log::error!("Rejecting marker catalog: {}", message);
                return Err(PgxError::Catalog(message));
            }
        }

        Ok(())
    }

    pub fn genes(&self) -> &[GeneGroup] {
        &self.genes
    }

    pub fn snps(&self) -> impl Iterator<Item = &SnpDefinition> {
        self.genes.iter().flat_map(|g| g.snps.iter())
    }

    pub fn snp_ids(&self) -> Vec<&str> {
        self.snps().map(|s| s.id.as_str()).collect()
    }

    pub fn snp(&self, id: &str) -> Option<&SnpDefinition> {
        self.snps().find(|s| s.id == id)
    }

    pub fn default_state(&self) -> GenotypeState {
        self.snps()
            .map(|s| (s.id.clone(), s.default_value.clone()))
            .collect()
    }

    pub fn is_legal(&self, snp_id: &str, genotype: &str) -> bool {
        self.snp(snp_id).is_some_and(|s| s.allows(genotype))
    }

    pub fn validate_selection(&self, snp_id: &str, genotype: &str) -> Result<()> {
        let snp = self
            .snp(snp_id)
            .ok_or_else(|| PgxError::UnknownSnp(snp_id.to_string()))?;

        if !snp.allows(genotype) {
            return Err(PgxError::IllegalGenotype {
                snp: snp_id.to_string(),
                genotype: genotype.to_string(),
            });
        }
        Ok(())
    }

    /// Validated write of a user-selected genotype into `state`.
    ///
    /// Returns whether the stored value changed.
    pub fn select(&self, state: &mut GenotypeState, snp_id: &str, genotype: &str) -> Result<bool> {
        self.validate_selection(snp_id, genotype)?;
        let previous = state.set(snp_id, genotype);
        let changed = previous.as_deref() != Some(genotype);
        if changed {
            log::debug!("{} -> {}", snp_id, genotype);
        }
        Ok(changed)
    }
}

impl Default for MarkerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schema::ThemeColor;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(MarkerCatalog::builtin().validate().is_ok());
    }

    #[test]
    fn test_snp_lookup() {
        let catalog = MarkerCatalog::builtin();
        let snp = catalog.snp("tpmt_460").unwrap();
        assert_eq!(snp.name, "G460A (*3B)");
        assert!(catalog.snp("NonExistent").is_none());
    }

    #[test]
    fn test_default_outside_options_rejected() {
        let genes = vec![GeneGroup {
            gene: "X".to_string(),
            description: String::new(),
            theme: ThemeColor::Blue,
            snps: vec![SnpDefinition::new("x_1", "X1", &["AA", "AG"], "GG")],
        }];
        assert!(matches!(MarkerCatalog::new(genes), Err(PgxError::Catalog(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let snp = SnpDefinition::new("x_1", "X1", &["AA"], "AA");
        let genes = vec![GeneGroup {
            gene: "X".to_string(),
            description: String::new(),
            theme: ThemeColor::Blue,
            snps: vec![snp.clone(), snp],
        }];
        assert!(MarkerCatalog::new(genes).is_err());
    }

    #[test]
    fn test_select_reports_change() {
        let catalog = MarkerCatalog::builtin();
        let mut state = catalog.default_state();
        assert!(!catalog.select(&mut state, "mthfr_677", "CC").unwrap());
        assert!(catalog.select(&mut state, "mthfr_677", "TT").unwrap());
        assert_eq!(state.get("mthfr_677"), Some("TT"));
    }

    #[test]
    fn test_select_rejects_illegal_value() {
        let catalog = MarkerCatalog::builtin();
        let mut state = catalog.default_state();
        let err = catalog.select(&mut state, "tpmt_238", "AA").unwrap_err();
        assert!(matches!(err, PgxError::IllegalGenotype { .. }));
        assert_eq!(state.get("tpmt_238"), Some("GG"));
    }
}
