mod app;
mod panels;
mod state;
mod theme;
mod widgets;
mod services;

pub use app::PgxAdvisorApp;
pub use services::ReportExporter;
pub use state::AppState;
