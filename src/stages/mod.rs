// src/stages/mod.rs
//! # Pipeline stages
//!
//! One module per step of the catalog preparation pipeline:
//!
//! ```text
//! extract  → segment → size_tags → gender_update / gender_split → unisex
//! (handles)  (join)    (audit)     (tag genders)                  (complete)
//! ```
//!
//! ## What lives here
//! - **Row selection** for one stage: which rows of the source survive.
//! - **Cell overrides** on surviving rows (gender column, joined handle).
//! - **Counters** for the stage summary.
//!
//! ## What does **not** live here
//! - Loading or writing files. Stages take a loaded `sheet::DataSet` and
//!   return output tables; `runner` does the I/O.
//! - Tag parsing and merge rules. Those are in `core`.
//!
//! ## Conventions & invariants
//! - Columns are resolved from the header once, before the row loop.
//! - Header rows are copied verbatim.
//! - Computed product-level cells are written on the first row of each
//!   handle only (one `LeaderTracker` per output table); later rows of the
//!   same handle get a blank cell.
//! - Zero matching rows is a normal outcome, reported through the counters.

pub mod extract;
pub mod gender_split;
pub mod gender_update;
pub mod segment;
pub mod size_tags;
pub mod unisex;

/// A derived table ready for the writer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputTable {
    /// File stem, sanitized, no extension.
    pub stem: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    pub fn new(stem: String, headers: Vec<String>) -> Self {
        Self { stem, headers, rows: Vec::new() }
    }
}

/// Copy of `row` with cell `ix` replaced, padded with blanks if short.
pub(crate) fn with_cell(row: &[String], ix: usize, value: String) -> Vec<String> {
    let mut out = row.to_vec();
    if out.len() <= ix {
        out.resize(ix + 1, s!());
    }
    out[ix] = value;
    out
}
