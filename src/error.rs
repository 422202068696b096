use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgxError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Unknown SNP identifier: {0}")]
    UnknownSnp(String),

    #[error("Illegal genotype {genotype} for {snp}")]
    IllegalGenotype { snp: String, genotype: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PgxError>;
