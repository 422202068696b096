use crate::catalog::MarkerCatalog;
use crate::config::ReportConfig;
use crate::engines::recommendation::RecommendationEngine;
use crate::error::Result;
use crate::report::ClinicalReport;
use crate::types::{GenotypeState, Recommendation};

/// Central application state for the UI
pub struct AppState {
    pub catalog: MarkerCatalog,
    pub genotypes: GenotypeState,
    pub recommendations: Vec<Recommendation>,

    pub report_config: ReportConfig,
    pub show_disclaimer: bool,
    pub status_message: String,

    engine: RecommendationEngine,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MarkerCatalog::builtin(), ReportConfig::default(), true)
    }
}

impl AppState {
    pub fn new(catalog: MarkerCatalog, report_config: ReportConfig, show_disclaimer: bool) -> Self {
        let engine = RecommendationEngine::new();
        let genotypes = catalog.default_state();
        let recommendations = engine.derive(&genotypes);

        Self {
            catalog,
            genotypes,
            recommendations,
            report_config,
            show_disclaimer,
            status_message: "Ready".to_string(),
            engine,
        }
    }

    /// Write a user edit; recommendations are rebuilt only when the value changed.
    pub fn select(&mut self, snp_id: &str, genotype: &str) -> Result<bool> {
        let changed = self.catalog.select(&mut self.genotypes, snp_id, genotype)?;
        if changed {
            self.recompute();
        }
        Ok(changed)
    }

    pub fn reset(&mut self) {
        self.genotypes = self.catalog.default_state();
        self.recompute();
        self.status_message = "Reset to default genotypes".to_string();
    }

    pub fn report(&self) -> ClinicalReport {
        ClinicalReport::new(&self.genotypes, &self.recommendations)
    }

    fn recompute(&mut self) {
        self.recommendations = self.engine.derive(&self.genotypes);
        log::debug!("Derived {} recommendation(s)", self.recommendations.len());
    }
}
