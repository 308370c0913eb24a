//! Error types for facet operations.
//!
//! Encoding and decoding are total; only the surroundings (JSON input,
//! config files, metadata documents) can fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config already exists at {0}")]
    ConfigExists(PathBuf),

    #[error("Invalid filter parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, Error>;
