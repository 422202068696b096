use pgx_advisor::config::{AppConfig, CatalogSource, ConfigManager, ReportFormat};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

// `load` reads the process environment; tests that call it are serialized
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn set_env(vars: &[(&str, &str)]) {
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
}

fn clear_env(vars: &[(&str, &str)]) {
    for (key, _) in vars {
        std::env::remove_var(key);
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pgx_advisor_cfg_{}_{}", std::process::id(), name))
}

#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.catalog.source, CatalogSource::Builtin);
    assert!(config.display.show_disclaimer);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let _guard = env_lock();
    let path = temp_path("partial.toml");
    std::fs::write(
        &path,
        r#"
[display]
dark_mode = true

[report]
format = "text"
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get();
    assert!(config.display.dark_mode);
    assert_eq!(config.display.window_width, 820.0);
    assert_eq!(config.report.format, ReportFormat::Text);
    assert_eq!(config.report.file_stem, "pgx_report");
    std::fs::remove_file(path).ok();
}

#[test]
fn test_file_catalog_source() {
    let _guard = env_lock();
    let path = temp_path("catalog_source.toml");
    std::fs::write(
        &path,
        r#"
[catalog.source]
kind = "file"
path = "/etc/pgx/catalog.toml"
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    assert_eq!(
        manager.get().catalog.source,
        CatalogSource::File {
            path: PathBuf::from("/etc/pgx/catalog.toml")
        }
    );
    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_file_is_rejected() {
    let _guard = env_lock();
    let path = temp_path("invalid.toml");
    std::fs::write(
        &path,
        r#"
[display]
window_width = 100.0
min_width = 400.0
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    assert!(manager.load_from_file(&path).is_err());
    assert_eq!(manager.get(), AppConfig::default());
    std::fs::remove_file(path).ok();
}

#[test]
fn test_save_and_reload() {
    let _guard = env_lock();
    let path = temp_path("roundtrip.toml");
    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.display.dark_mode = true;
            c.report.file_stem = "ward_7".to_string();
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.get(), manager.get());
    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_update_is_discarded() {
    let manager = ConfigManager::new();
    let result = manager.update(|c| c.report.file_stem = "a/b".to_string());
    assert!(result.is_err());
    assert_eq!(manager.get().report.file_stem, "pgx_report");
}

#[test]
fn test_builtin_catalog_source_loads() {
    let catalog = AppConfig::default().catalog.load().unwrap();
    assert_eq!(catalog.snp_ids().len(), 8);
}

#[test]
fn test_environment_overrides_defaults() {
    let _guard = env_lock();
    let vars = [
        ("PGX__DISPLAY__DARK_MODE", "true"),
        ("PGX__DISPLAY__WINDOW_WIDTH", "1000"),
        ("PGX__REPORT__FILE_STEM", "ward"),
    ];
    set_env(&vars);
    let manager = ConfigManager::new();
    let result = manager.load(None);
    clear_env(&vars);

    result.unwrap();
    let config = manager.get();
    assert!(config.display.dark_mode);
    assert_eq!(config.display.window_width, 1000.0);
    assert_eq!(config.report.file_stem, "ward");
    assert_eq!(config.report.format, ReportFormat::Json);
}

#[test]
fn test_environment_overrides_file() {
    let _guard = env_lock();
    let path = temp_path("env_over_file.toml");
    std::fs::write(
        &path,
        r#"
[display]
dark_mode = false
window_height = 950.0

[report]
file_stem = "from_file"
"#,
    )
    .unwrap();

    let vars = [("PGX__REPORT__FILE_STEM", "ward")];
    set_env(&vars);
    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    clear_env(&vars);
    std::fs::remove_file(path).ok();

    result.unwrap();
    let config = manager.get();
    assert_eq!(config.report.file_stem, "ward");
    assert!(!config.display.dark_mode);
    assert_eq!(config.display.window_height, 950.0);
}
