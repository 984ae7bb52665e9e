use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Config Read Error: Path '{path}', Error: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML Parsing Error: Path '{path}', Error: {source}")]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("TOML Parsing Error: Path '{path}', Error: {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Walk Error: Cannot start traversal at '{path}': {message}")]
    WalkStart { path: PathBuf, message: String },

    #[error("Output Creation Error: Path '{path}', Error: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File Write Error: Path '{path}', Error: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// True for failures in loading or validating the configuration document.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AppError::Config(_)
                | AppError::ConfigRead { .. }
                | AppError::YamlParse { .. }
                | AppError::TomlParse { .. }
        )
    }
}
