// ABOUTME: Error types for template engine operations
// ABOUTME: Defines specific error types for template compilation, rendering and helper calls

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template syntax error: {0}")]
    SyntaxError(#[from] handlebars::TemplateError),

    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Invalid helper argument: {0}")]
    InvalidArgument(String),

    #[error("System information error: {0}")]
    SystemError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
