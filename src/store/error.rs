// ABOUTME: Error types for template stores
// ABOUTME: Distinguishes identifier lookup failures from store construction failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No template with identifier '{identifier}'")]
    NotFound { identifier: String },

    #[error("Failed to read template '{identifier}': {source}")]
    Io {
        identifier: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read template source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse HTML document: {0}")]
    Parse(String),

    #[error("Template directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
