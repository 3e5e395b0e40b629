// src/stages/extract.rs
//! Handle extraction from a collection export: rows whose search column
//! contains any of the terms (case-insensitive) yield `[search, handle]`.

use crate::columns::ColumnRef;
use crate::error::{CatalogError, Result};
use crate::file::clean_stem;
use crate::progress::Progress;
use crate::sheet::{DataSet, cell};

use super::OutputTable;

#[derive(Clone, Debug)]
pub struct ExtractParams {
    pub terms: Vec<String>,
    pub search: ColumnRef,
    pub extract: ColumnRef,
}

#[derive(Clone, Debug)]
pub struct ExtractReport {
    pub table: OutputTable,
    pub processed: usize,
    pub matches: usize,
}

impl ExtractReport {
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Rows checked", self.processed.to_string()),
            ("Matches found", self.matches.to_string()),
        ]
    }
}

/// `"socks, Gift Box"` → `["socks", "Gift Box"]`. Fails when nothing is left.
pub fn parse_terms(input: &str) -> Result<Vec<String>> {
    let terms: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if terms.is_empty() {
        return Err(CatalogError::NoSearchTerms);
    }
    Ok(terms)
}

/// `["socks"]` → `socks-handles`, `["a b", "c"]` → `ab-c-handles`.
pub fn output_stem(terms: &[String]) -> String {
    let joined = terms.join("-");
    join!(&clean_stem(&joined), "-handles")
}

pub fn extract_handles(
    ds: &DataSet,
    params: &ExtractParams,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ExtractReport> {
    if params.terms.is_empty() {
        return Err(CatalogError::NoSearchTerms);
    }
    let search_ix = params.search.resolve(&ds.headers, &ds.name)?;
    let extract_ix = params.extract.resolve(&ds.headers, &ds.name)?;

    let needles: Vec<String> = params.terms.iter().map(|t| t.to_lowercase()).collect();
    let headers = vec![
        cell(&ds.headers, search_ix).to_string(),
        cell(&ds.headers, extract_ix).to_string(),
    ];
    let mut table = OutputTable::new(output_stem(&params.terms), headers);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ds.len());
    }

    let mut processed = 0usize;
    for row in &ds.rows {
        processed += 1;
        let hay = cell(row, search_ix).trim();
        if !hay.is_empty() {
            let hay_lc = hay.to_lowercase();
            // one output row per source row, however many terms hit
            if needles.iter().any(|n| hay_lc.contains(n.as_str())) {
                table.rows.push(vec![
                    cell(row, search_ix).to_string(),
                    cell(row, extract_ix).to_string(),
                ]);
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.row_done(processed);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let matches = table.rows.len();
    logf!("extract: {} of {} rows matched {:?}", matches, processed, params.terms);
    Ok(ExtractReport { table, processed, matches })
}
