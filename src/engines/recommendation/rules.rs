use crate::catalog::markers::{
    CEP72_RS924607, MTHFR_1298, MTHFR_677, NUDT15_415, SLCO1B1_521, TPMT_238, TPMT_460, TPMT_719,
};
use crate::types::{GenotypeState, Recommendation, RecommendationLevel};

/// Drug a rule gives advice for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drug {
    Methotrexate,
    Vincristine,
    Thiopurine,
}

impl Drug {
    pub fn display_name(&self) -> &'static str {
        match self {
            Drug::Methotrexate => "甲氨蝶呤 (MTX)",
            Drug::Vincristine => "长春新碱 (VCR)",
            Drug::Thiopurine => "巯嘌呤 (6-MP/6-TG)",
        }
    }
}

/// Severity tier a marker resolves to for one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    None,
    Heterozygous,
    HomozygousVariant,
}

/// `(snp_id, genotype)` pairs; a tier matches when any pair is present in state.
pub type GenotypeMatch = &'static [(&'static str, &'static str)];

#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub level: RecommendationLevel,
    /// `{snp_id}` placeholders are replaced with the state's genotype
    pub finding: &'static str,
    pub suggestion: &'static str,
}

/// One sub-rule: at most one recommendation per evaluation.
#[derive(Debug, Clone, Copy)]
pub struct MarkerRule {
    pub name: &'static str,
    pub drug: Drug,
    pub homozygous: GenotypeMatch,
    pub heterozygous: GenotypeMatch,
    pub on_homozygous: Outcome,
    pub on_heterozygous: Outcome,
}

impl MarkerRule {
    /// The homozygous-variant tier is tested first and wins.
    pub fn classify(&self, state: &GenotypeState) -> Tier {
        if matches_any(state, self.homozygous) {
            Tier::HomozygousVariant
        } else if matches_any(state, self.heterozygous) {
            Tier::Heterozygous
        } else {
            Tier::None
        }
    }

    pub fn evaluate(&self, state: &GenotypeState) -> Option<Recommendation> {
        let outcome = match self.classify(state) {
            Tier::HomozygousVariant => &self.on_homozygous,
            Tier::Heterozygous => &self.on_heterozygous,
            Tier::None => return None,
        };

        Some(Recommendation {
            drug: self.drug.display_name().to_string(),
            finding: render_finding(outcome.finding, state),
            suggestion: outcome.suggestion.to_string(),
            level: outcome.level,
        })
    }
}

fn matches_any(state: &GenotypeState, pairs: GenotypeMatch) -> bool {
    pairs.iter().any(|(snp, genotype)| state.is(snp, genotype))
}

const MISSING_GENOTYPE: &str = "-";

/// Expand `{snp_id}` placeholders. Unknown ids render as `-`.
fn render_finding(template: &str, state: &GenotypeState) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let key = &rest[start + 1..start + len];
        out.push_str(state.get(key).unwrap_or(MISSING_GENOTYPE));
        rest = &rest[start + len + 1..];
    }

    out.push_str(rest);
    out
}

/// Methotrexate, vincristine and thiopurine rules in evaluation order.
pub fn standard_rules() -> Vec<MarkerRule> {
    vec![
        MarkerRule {
            name: "mthfr",
            drug: Drug::Methotrexate,
            homozygous: &[(MTHFR_677, "TT"), (MTHFR_1298, "CC")],
            heterozygous: &[(MTHFR_677, "CT"), (MTHFR_1298, "AC")],
            on_homozygous: Outcome {
                level: RecommendationLevel::Warning,
                finding: "MTHFR {mthfr_677}/{mthfr_1298} 变异导致叶酸代谢减弱。",
                suggestion: "可能增加 MTX 毒性风险，需密切监测血药浓度及毒性反应。建议关注低钾血症。",
            },
            on_heterozygous: Outcome {
                level: RecommendationLevel::Info,
                finding: "MTHFR 位点存在杂合变异。",
                suggestion: "建议根据临床表现监测相关毒性。",
            },
        },
        MarkerRule {
            name: "slco1b1",
            drug: Drug::Methotrexate,
            homozygous: &[(SLCO1B1_521, "CC")],
            heterozygous: &[(SLCO1B1_521, "TC")],
            on_homozygous: Outcome {
                level: RecommendationLevel::Danger,
                finding: "SLCO1B1 T521C 纯合突变型。",
                suggestion: "显著降低 MTX 清除率，血药浓度最高，全身毒性显著增加。需高度警惕并可能需要减量。",
            },
            on_heterozygous: Outcome {
                level: RecommendationLevel::Warning,
                finding: "SLCO1B1 T521C 杂合突变型。",
                suggestion: "MTX 清除率降低，毒性风险增加。建议个体化给药，监测毒性。",
            },
        },
        MarkerRule {
            name: "cep72",
            drug: Drug::Vincristine,
            homozygous: &[(CEP72_RS924607, "TT")],
            heterozygous: &[(CEP72_RS924607, "CT")],
            on_homozygous: Outcome {
                level: RecommendationLevel::Danger,
                finding: "CEP72 rs924607 T/T 基因型。",
                suggestion: "极高风险发生周围神经病变（神经毒性更早、更严重）。建议调整剂量。",
            },
            on_heterozygous: Outcome {
                level: RecommendationLevel::Warning,
                finding: "CEP72 rs924607 C/T 基因型。",
                suggestion: "存在发生周围神经病变的风险，优于 T/T 型，但仍需监测。",
            },
        },
        MarkerRule {
            name: "nudt15",
            drug: Drug::Thiopurine,
            homozygous: &[(NUDT15_415, "TT")],
            heterozygous: &[(NUDT15_415, "CT")],
            on_homozygous: Outcome {
                level: RecommendationLevel::Danger,
                finding: "NUDT15 C415T 纯合突变型 (慢代谢型)。",
                suggestion: "极高风险发生严重骨髓抑制。剂量至少减少 90% (或起始 10mg/m²/day)，建议换药或极大减量。",
            },
            on_heterozygous: Outcome {
                level: RecommendationLevel::Warning,
                finding: "NUDT15 C415T 杂合突变型 (中间代谢型)。",
                suggestion: "骨髓抑制风险高。建议起始剂量减少 30-80%，2-4周达稳态后根据耐受性调整。",
            },
        },
        // Contradictory TPMT calls across SNPs are not rejected.
        MarkerRule {
            name: "tpmt",
            drug: Drug::Thiopurine,
            homozygous: &[(TPMT_238, "CC"), (TPMT_460, "AA"), (TPMT_719, "GG")],
            heterozygous: &[(TPMT_238, "GC"), (TPMT_460, "GA"), (TPMT_719, "AG")],
            on_homozygous: Outcome {
                level: RecommendationLevel::Danger,
                finding: "TPMT 纯合变异型 (慢代谢型)。",
                suggestion: "TPMT 活性极低或缺失，极易发生致死性中性粒细胞减少。恶性肿瘤时剂量建议减少 10 倍以上。",
            },
            on_heterozygous: Outcome {
                level: RecommendationLevel::Warning,
                finding: "TPMT 杂合变异型 (中间代谢型)。",
                suggestion: "TPMT 活性中等。起始剂量减少 30-80%，严密监测血象。",
            },
        },
    ]
}
