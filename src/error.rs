// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions of a run. The tag/gender core never produces these;
/// they come from loading sources, resolving columns and writing outputs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("column '{column}' not found in the header of '{source_name}'")]
    MissingColumn { column: String, source_name: String },
    #[error("'{0}' has no header row")]
    EmptySource(String),
    #[error("unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("no search terms provided")]
    NoSearchTerms,
    #[error("invalid column reference '{0}'")]
    InvalidColumnRef(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Spreadsheet(#[from] calamine::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("could not finalize {}: {cause}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
