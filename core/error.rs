use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    #[error("Config Read Error: Path '{path}', Error: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Format Error: Path '{path}', Error: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("YAML Serialization Error: {0}")]
    ConfigSerialize(#[from] serde_yml::Error),

    #[error("Config Write Error: Path '{path}', Error: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output Create Error: Path '{path}', Error: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Traversal Error: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("File Read Error: Path '{path}', Error: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output Write Error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for every error raised while walking or reading the source tree.
    pub fn is_traversal(&self) -> bool {
        matches!(self, AppError::Traversal(_) | AppError::FileRead { .. })
    }
}
