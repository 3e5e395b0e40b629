// src/stages/size_tags.rs
//! Inventory of the size tags in use, to pick labels for the gender stages.

use std::collections::BTreeSet;

use crate::columns::ColumnRef;
use crate::core::tags::decode_comma;
use crate::error::Result;
use crate::progress::Progress;
use crate::sheet::{DataSet, cell};

#[derive(Clone, Debug)]
pub struct SizeTagReport {
    /// Sorted, deduplicated.
    pub tags: Vec<String>,
    pub processed: usize,
    pub rows_with_size_tags: usize,
}

impl SizeTagReport {
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Rows checked", self.processed.to_string()),
            ("Rows with size tags", self.rows_with_size_tags.to_string()),
            ("Unique size tags", self.tags.len().to_string()),
        ]
    }
}

pub fn collect_size_tags(
    ds: &DataSet,
    tags_column: &ColumnRef,
    prefix: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<SizeTagReport> {
    let tags_ix = tags_column.resolve(&ds.headers, &ds.name)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ds.len());
    }

    let mut found: BTreeSet<String> = BTreeSet::new();
    let mut processed = 0usize;
    let mut rows_with_size_tags = 0usize;
    for row in &ds.rows {
        processed += 1;
        let mut hit = false;
        for tag in decode_comma(cell(row, tags_ix)) {
            if tag.starts_with(prefix) {
                hit = true;
                found.insert(tag);
            }
        }
        if hit {
            rows_with_size_tags += 1;
        }
        if let Some(p) = progress.as_deref_mut() {
            p.row_done(processed);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(SizeTagReport { tags: found.into_iter().collect(), processed, rows_with_size_tags })
}
