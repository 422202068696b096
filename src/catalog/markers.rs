use super::schema::{GeneGroup, SnpDefinition, ThemeColor};

pub const MTHFR_677: &str = "mthfr_677";
pub const MTHFR_1298: &str = "mthfr_1298";
pub const SLCO1B1_521: &str = "slco1b1_521";
pub const CEP72_RS924607: &str = "cep72_rs924607";
pub const NUDT15_415: &str = "nudt15_415";
pub const TPMT_238: &str = "tpmt_238";
pub const TPMT_460: &str = "tpmt_460";
pub const TPMT_719: &str = "tpmt_719";

/// The compiled-in marker panel, in display order
pub fn builtin_genes() -> Vec<GeneGroup> {
    vec![
        GeneGroup {
            gene: "MTHFR".to_string(),
            description: "叶酸代谢相关，关联 MTX 相关的黏膜炎及骨髓抑制风险".to_string(),
            theme: ThemeColor::Blue,
            snps: vec![
                SnpDefinition::new(MTHFR_677, "C677T", &["CC", "CT", "TT"], "CC"),
                SnpDefinition::new(MTHFR_1298, "A1298C", &["AA", "AC", "CC"], "AA"),
            ],
        },
        GeneGroup {
            gene: "SLCO1B1".to_string(),
            description: "药物转运相关，影响 MTX 排泄延迟及全身毒性风险".to_string(),
            theme: ThemeColor::Indigo,
            snps: vec![SnpDefinition::new(SLCO1B1_521, "T521C", &["TT", "TC", "CC"], "TT")],
        },
        GeneGroup {
            gene: "CEP72".to_string(),
            description: "关联长春新碱 (VCR) 诱导的周围神经病变风险".to_string(),
            theme: ThemeColor::Cyan,
            snps: vec![SnpDefinition::new(CEP72_RS924607, "rs924607", &["CC", "CT", "TT"], "CC")],
        },
        GeneGroup {
            gene: "NUDT15".to_string(),
            description: "关联巯嘌呤 (6-MP/6-TG) 诱导的严重骨髓抑制及脱发".to_string(),
            theme: ThemeColor::Violet,
            snps: vec![SnpDefinition::new(NUDT15_415, "C415T (*3)", &["CC", "CT", "TT"], "CC")],
        },
        GeneGroup {
            gene: "TPMT".to_string(),
            description: "关联巯嘌呤代谢，影响中性粒细胞减少及骨髓毒性".to_string(),
            theme: ThemeColor::Pink,
            snps: vec![
                SnpDefinition::new(TPMT_238, "G238C (*2)", &["GG", "GC", "CC"], "GG"),
                SnpDefinition::new(TPMT_460, "G460A (*3B)", &["GG", "GA", "AA"], "GG"),
                SnpDefinition::new(TPMT_719, "A719G (*3C)", &["AA", "AG", "GG"], "AA"),
            ],
        },
    ]
}
