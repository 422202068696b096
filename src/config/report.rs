use super::traits::ConfigSection;
use crate::error::PgxError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Text => "txt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub export_dir: Option<PathBuf>,
    pub file_stem: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            export_dir: None,
            file_stem: "pgx_report".to_string(),
        }
    }
}

impl ConfigSection for ReportConfig {
    fn section_name() -> &'static str {
        "report"
    }

    fn validate(&self) -> Result<(), PgxError> {
        if self.file_stem.trim().is_empty() {
            return Err(PgxError::Configuration(
                "Report file stem must not be empty".to_string()
            ));
        }
        if self.file_stem.contains(['/', '\\']) {
            return Err(PgxError::Configuration(
                "Report file stem must not contain path separators".to_string()
            ));
        }
        Ok(())
    }
}
