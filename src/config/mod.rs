pub mod traits;
pub mod display;
pub mod catalog;
pub mod report;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use display::DisplayConfig;
pub use catalog::{CatalogConfig, CatalogSource};
pub use report::{ReportConfig, ReportFormat};
