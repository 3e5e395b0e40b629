// src/sheet.rs
//! Loading a one-sheet tabular source (header row + data rows).

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{CatalogError, Result};

/// A loaded grid. `name` is the source file stem and is used for output
/// names and error messages. Every cell is text; an empty string is the
/// absent cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Split an in-memory grid into header + rows. Fails on an empty grid.
    pub fn from_grid(name: &str, mut grid: Vec<Vec<String>>) -> Result<Self> {
        if grid.is_empty() {
            return Err(CatalogError::EmptySource(name.to_string()));
        }
        let headers = grid.remove(0);
        Ok(Self { name: name.to_string(), headers, rows: grid })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cell text at `ix`, empty when the row is shorter.
pub fn cell(row: &[String], ix: usize) -> &str {
    row.get(ix).map(String::as_str).unwrap_or("")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SourceKind {
    Workbook,
    Delimited(char),
}

fn source_kind(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceKind::Workbook),
        "csv" => Some(SourceKind::Delimited(',')),
        "tsv" | "tab" => Some(SourceKind::Delimited('\t')),
        _ => None,
    }
}

/// Load the first sheet of a workbook, or a CSV/TSV file.
pub fn load(path: &Path) -> Result<DataSet> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let kind = source_kind(path).ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
    let grid = match kind {
        SourceKind::Workbook => read_workbook(path)?,
        SourceKind::Delimited(sep) => {
            let text = std::fs::read_to_string(path)?;
            crate::csv::parse_rows(&text, sep)
        }
    };

    let ds = DataSet::from_grid(&name, grid)?;
    if ds.is_empty() {
        logw!("'{}' has a header row but no data rows", ds.name);
    }
    logf!("loaded '{}': {} columns, {} rows", ds.name, ds.headers.len(), ds.len());
    Ok(ds)
}

fn read_workbook(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r?,
        None => return Ok(Vec::new()),
    };

    // The used range may not start at A1; keep cells at their sheet columns.
    let lead = range.start().map(|(_, c)| c as usize).unwrap_or(0);

    let mut grid = Vec::with_capacity(range.height());
    for row in range.rows() {
        let mut cells = vec![s!(); lead];
        cells.extend(row.iter().map(cell_text));
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        grid.push(cells);
    }
    Ok(grid)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        Data::String(s) => s.clone(),
        Data::Float(f) => float_text(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { s!("TRUE") } else { s!("FALSE") },
        Data::Error(e) => format!("#ERR:{e:?}"),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Whole floats print without a fraction (`12.0` → `12`).
fn float_text(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
