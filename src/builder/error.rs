// ABOUTME: Error types for batch page building
// ABOUTME: Separates batch-fatal filesystem errors from per-page template failures

use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse template {page}: {source}")]
    Parse { page: String, source: TemplateError },

    #[error("Failed to execute template {page}: {source}")]
    Execute { page: String, source: TemplateError },

    #[error("Invalid template extension {0:?}: it must name a file suffix")]
    InvalidExtension(String),
}

pub type Result<T> = std::result::Result<T, BuildError>;
