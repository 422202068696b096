use super::traits::ConfigSection;
use crate::catalog::MarkerCatalog;
use crate::error::{PgxError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogSource {
    #[default]
    Builtin,
    File { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: CatalogSource,
}

impl CatalogConfig {
    /// Resolve the configured source into a validated catalog.
    pub fn load(&self) -> Result<MarkerCatalog> {
        match &self.source {
            CatalogSource::Builtin => {
                let catalog = MarkerCatalog::builtin();
                catalog.validate()?;
                Ok(catalog)
            }
            CatalogSource::File { path } => MarkerCatalog::load_from_file(path),
        }
    }
}

impl ConfigSection for CatalogConfig {
    fn section_name() -> &'static str {
        "catalog"
    }

    fn validate(&self) -> Result<()> {
        if let CatalogSource::File { path } = &self.source {
            if path.as_os_str().is_empty() {
                return Err(PgxError::Configuration(
                    "Catalog file path must not be empty".to_string()
                ));
            }
        }
        Ok(())
    }
}
