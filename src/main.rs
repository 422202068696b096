use anyhow::Context;
use eframe::NativeOptions;
use pgx_advisor::config::ConfigManager;
use pgx_advisor::ui::PgxAdvisorApp;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional config file as the first argument; PGX__* variables override it
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let manager = ConfigManager::new();
    manager
        .load(config_path.as_deref())
        .context("failed to load configuration")?;
    let config = manager.get();

    let catalog = config
        .catalog
        .load()
        .context("failed to load marker catalog")?;
    log::info!(
        "Marker catalog ready: {} genes, {} SNPs",
        catalog.genes().len(),
        catalog.snp_ids().len()
    );

    let display = &config.display;
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([display.window_width, display.window_height])
            .with_min_inner_size([display.min_width, display.min_height])
            .with_title(display.title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        "PGx Advisor",
        native_options,
        Box::new(move |cc| Ok(Box::new(PgxAdvisorApp::new(cc, &config, catalog)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))
}
