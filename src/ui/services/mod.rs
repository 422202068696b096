pub mod report_exporter;

pub use report_exporter::ReportExporter;
