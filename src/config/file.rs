// src/config/file.rs
//! Optional `catalog_prep.conf` in `key = value` form:
//!
//! ```text
//! # columns by header text, or by letter with '@'
//! gender_column = @CQ
//! brand_column  = Vendor
//! format        = tsv
//! out_dir       = data/phase-2
//! ```

use std::{fs, path::{Path, PathBuf}};

use super::options::{AppOptions, ExportFormat};
use crate::columns::ColumnRef;
use crate::error::{CatalogError, Result};

/// Defaults overlaid with `path` if it exists. A missing file is not an error.
pub fn load(path: &Path) -> Result<AppOptions> {
    let mut opts = AppOptions::default();
    if !path.exists() {
        logd!("no config at {}, using defaults", path.display());
        return Ok(opts);
    }
    let text = fs::read_to_string(path)?;
    apply(&mut opts, &text)?;
    logf!("config loaded from {}", path.display());
    Ok(opts)
}

/// Apply `key = value` lines onto `opts`. Unknown keys are skipped.
pub fn apply(opts: &mut AppOptions, text: &str) -> Result<()> {
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            return Err(CatalogError::Config(format!("line {}: expected key = value", n + 1)));
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        let cols = &mut opts.columns;
        match key {
            "handle_column" => cols.handle = ColumnRef::parse(val)?,
            "brand_column" => cols.brand = ColumnRef::parse(val)?,
            "tags_column" => cols.tags = ColumnRef::parse(val)?,
            "gender_column" => cols.gender = ColumnRef::parse(val)?,
            "search_column" => cols.search = ColumnRef::parse(val)?,
            "extract_column" => cols.extract = ColumnRef::parse(val)?,
            "reference_handle_column" => cols.reference_handle = ColumnRef::parse(val)?,
            "format" => {
                opts.export.format = ExportFormat::parse(val).ok_or_else(|| {
                    CatalogError::Config(format!("line {}: unknown format '{val}'", n + 1))
                })?;
            }
            "out_dir" => opts.export.out_dir = PathBuf::from(val),
            other => logw!("config line {}: unknown key '{other}'", n + 1),
        }
    }
    Ok(())
}
