//! Error types for tapegen

use thiserror::Error;

use crate::compile::CompileFailure;
use crate::format::FormatError;
use crate::tape::RuntimeError;
use crate::templates::TemplateError;
use crate::validate::StructuralError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// tapegen errors
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Compile(#[from] CompileFailure),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Host error: {0}")]
    Host(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
