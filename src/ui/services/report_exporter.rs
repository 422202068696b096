use crate::config::{ReportConfig, ReportFormat};
use crate::ui::state::AppState;
use chrono::{DateTime, Utc};

pub struct ReportExporter;

impl ReportExporter {
    /// Ask for a destination and write the current report there.
    pub fn export(state: &mut AppState) {
        let config = &state.report_config;
        let report_format = config.format;
        let label = match report_format {
            ReportFormat::Json => "JSON Files",
            ReportFormat::Text => "Text Files",
        };

        let mut dialog = rfd::FileDialog::new()
            .add_filter(label, &[report_format.extension()])
            .set_file_name(Self::default_file_name(config, Utc::now()));
        if let Some(dir) = &config.export_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return;
        };

        state.status_message = match state.report().save(&path, report_format) {
            Ok(()) => format!("Report saved to {}", path.display()),
            Err(e) => {
                log::error!("Report export failed: {}", e);
                format!("Error exporting report: {}", e)
            }
        };
    }

    pub fn default_file_name(config: &ReportConfig, now: DateTime<Utc>) -> String {
        format!(
            "{}_{}.{}",
            config.file_stem,
            now.format("%Y%m%d_%H%M%S"),
            config.format.extension()
        )
    }
}
