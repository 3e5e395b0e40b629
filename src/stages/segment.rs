// src/stages/segment.rs
//! Join a reference handle list against the master catalog.
//!
//! Handles are compared by their normalized key, so `Brand™ Socks` in the
//! master matches `brand socks` in the reference. Matched master rows are
//! emitted whole, with the handle cell replaced by the reference original.

use crate::columns::ColumnRef;
use crate::core::handle::{Collision, HandleIndex};
use crate::error::Result;
use crate::file::clean_stem;
use crate::progress::Progress;
use crate::sheet::{DataSet, cell};

use super::{OutputTable, with_cell};

#[derive(Clone, Debug)]
pub struct SegmentReport {
    pub table: OutputTable,
    pub unique_handles: usize,
    pub collisions: Vec<Collision>,
    pub processed: usize,
    pub matched: usize,
}

impl SegmentReport {
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Unique handles", self.unique_handles.to_string()),
            ("Handle collisions", self.collisions.len().to_string()),
            ("Master rows checked", self.processed.to_string()),
            ("Matching rows found", self.matched.to_string()),
        ]
    }
}

/// Index the non-blank handles of `reference`.
pub fn build_index(reference: &DataSet, column: &ColumnRef) -> Result<HandleIndex> {
    let ix = column.resolve(&reference.headers, &reference.name)?;
    let mut index = HandleIndex::new();
    for row in &reference.rows {
        let h = cell(row, ix).trim();
        if !h.is_empty() {
            index.insert(h);
        }
    }
    if index.is_empty() {
        logw!("'{}' has no usable handles in column '{}'", reference.name, column);
    }
    for c in index.collisions() {
        logw!("reference handles '{}' and '{}' share key '{}'; keeping the first", c.kept, c.ignored, c.key);
    }
    Ok(index)
}

pub fn output_stem(reference_name: &str) -> String {
    join!(&clean_stem(reference_name), "-extracted-products")
}

pub fn segment(
    reference: &DataSet,
    reference_column: &ColumnRef,
    master: &DataSet,
    master_column: &ColumnRef,
    mut progress: Option<&mut dyn Progress>,
) -> Result<SegmentReport> {
    let index = build_index(reference, reference_column)?;
    let handle_ix = master_column.resolve(&master.headers, &master.name)?;

    let mut table = OutputTable::new(output_stem(&reference.name), master.headers.clone());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(master.len());
    }

    let mut processed = 0usize;
    for row in &master.rows {
        processed += 1;
        if let Some(original) = index.lookup(cell(row, handle_ix)) {
            table.rows.push(with_cell(row, handle_ix, original.to_string()));
        }
        if let Some(p) = progress.as_deref_mut() {
            p.row_done(processed);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let matched = table.rows.len();
    logf!("segment: {} handles, {} of {} master rows matched", index.len(), matched, processed);
    Ok(SegmentReport {
        table,
        unique_handles: index.len(),
        collisions: index.collisions().to_vec(),
        processed,
        matched,
    })
}
