use crate::config::ReportFormat;
use crate::error::{PgxError, Result};
use crate::types::{GenotypeState, Recommendation, RecommendationLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Shown when every marker is wild type or a normal metabolizer
pub const NO_ADJUSTMENT_MESSAGE: &str = "所有检测项均为野生型或正常代谢，无需特殊剂量调整。";

/// Snapshot of entered genotypes and the advice derived from them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalReport {
    pub generated_at: DateTime<Utc>,
    pub genotypes: BTreeMap<String, String>,
    pub recommendations: Vec<Recommendation>,
    pub highest_level: Option<RecommendationLevel>,
    pub summary: String,
}

impl ClinicalReport {
    pub fn new(state: &GenotypeState, recommendations: &[Recommendation]) -> Self {
        Self::at(Utc::now(), state, recommendations)
    }

    pub fn at(
        generated_at: DateTime<Utc>,
        state: &GenotypeState,
        recommendations: &[Recommendation],
    ) -> Self {
        let highest_level = recommendations.iter().map(|r| r.level).max();
        let count = |level: RecommendationLevel| recommendations.iter().filter(|r| r.level == level).count();

        let summary = if recommendations.is_empty() {
            NO_ADJUSTMENT_MESSAGE.to_string()
        } else {
            format!(
                "{} recommendation{}: {} high risk, {} monitor, {} notice",
                recommendations.len(),
                if recommendations.len() == 1 { "" } else { "s" },
                count(RecommendationLevel::Danger),
                count(RecommendationLevel::Warning),
                count(RecommendationLevel::Info),
            )
        };

        Self {
            generated_at,
            genotypes: state
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            recommendations: recommendations.to_vec(),
            highest_level,
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            "PGx Clinical Support Report".to_string(),
            format!("Generated: {}", self.generated_at.to_rfc3339()),
            String::new(),
            "Genotypes:".to_string(),
        ];
        lines.extend(
            self.genotypes
                .iter()
                .map(|(snp, genotype)| format!("  {:<16} {}", snp, genotype)),
        );
        lines.push(String::new());
        lines.push("Recommendations:".to_string());
        for (i, rec) in self.recommendations.iter().enumerate() {
            lines.push(format!("  {}. [{}] {}", i + 1, rec.level.tag_label(), rec.drug));
            lines.push(format!("     基因型发现: {}", rec.finding));
            lines.push(format!("     调整方案: {}", rec.suggestion));
        }
        lines.push(String::new());
        lines.push(self.summary.clone());
        lines.join("\n") + "\n"
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Text => Ok(self.to_text()),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> Result<()> {
        let path = path.as_ref();
        let contents = self.render(format)?;
        std::fs::write(path, contents).map_err(|e| {
            PgxError::Report(format!("Failed to write report {}: {}", path.display(), e))
        })?;
        log::info!(
            "Exported {} recommendation(s) to {}",
            self.recommendations.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(level: RecommendationLevel) -> Recommendation {
        Recommendation {
            drug: "D".to_string(),
            finding: "F".to_string(),
            suggestion: "S".to_string(),
            level,
        }
    }

    #[test]
    fn test_highest_level_ignores_order() {
        let recs = vec![
            rec(RecommendationLevel::Warning),
            rec(RecommendationLevel::Danger),
            rec(RecommendationLevel::Info),
        ];
        let report = ClinicalReport::new(&GenotypeState::new(), &recs);
        assert_eq!(report.highest_level, Some(RecommendationLevel::Danger));
        assert_eq!(report.recommendations, recs);
        assert_eq!(report.summary, "3 recommendations: 1 high risk, 1 monitor, 1 notice");
    }

    #[test]
    fn test_empty_report() {
        let report = ClinicalReport::new(&GenotypeState::new(), &[]);
        assert_eq!(report.highest_level, None);
        assert!(report.summary.contains("无需特殊剂量调整"));
    }

    #[test]
    fn test_text_lists_tags() {
        let report = ClinicalReport::new(&GenotypeState::new(), &[rec(RecommendationLevel::Danger)]);
        assert!(report.to_text().contains("1. [High Risk] D"));
    }
}
