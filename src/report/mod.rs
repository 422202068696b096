mod clinical_report;

pub use clinical_report::{ClinicalReport, NO_ADJUSTMENT_MESSAGE};
