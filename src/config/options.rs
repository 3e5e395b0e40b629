// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::columns::ColumnRef;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub columns: ColumnOptions,
    pub export: ExportOptions,
}

/// Which header each stage reads. Every entry is resolved against the
/// source header once per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnOptions {
    pub handle: ColumnRef,
    pub brand: ColumnRef,
    pub tags: ColumnRef,
    pub gender: ColumnRef,
    /// extract-handles: column searched for the terms
    pub search: ColumnRef,
    /// extract-handles: column copied next to the match
    pub extract: ColumnRef,
    /// segment: handle column of the reference list
    pub reference_handle: ColumnRef,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            handle: ColumnRef::name(HANDLE_COLUMN),
            brand: ColumnRef::name(BRAND_COLUMN),
            tags: ColumnRef::name(TAGS_COLUMN),
            gender: ColumnRef::name(GENDER_COLUMN),
            search: ColumnRef::name(SEARCH_COLUMN),
            extract: ColumnRef::name(COLLECTION_HANDLE_COLUMN),
            reference_handle: ColumnRef::name(REFERENCE_HANDLE_COLUMN),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
