// src/stages/unisex.rs
//! Complete gender lists: a product tagged both Male and Female also gets
//! Unisex. All rows are kept; only leader rows carry a gender cell.

use crate::columns::ColumnRef;
use crate::core::gender::add_unisex_if_complete;
use crate::core::leader::LeaderTracker;
use crate::core::tags::{decode_json, encode};
use crate::error::Result;
use crate::file::clean_stem;
use crate::progress::Progress;
use crate::sheet::{DataSet, cell};

use super::{OutputTable, with_cell};

#[derive(Clone, Debug, Default)]
pub struct UnisexReport {
    pub table: OutputTable,
    pub processed: usize,
    pub unique_handles: usize,
    pub added: usize,
    pub unchanged: usize,
}

impl UnisexReport {
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total rows processed", self.processed.to_string()),
            ("Unique handles", self.unique_handles.to_string()),
            ("Unisex added", self.added.to_string()),
            ("Unchanged", self.unchanged.to_string()),
        ]
    }
}

pub fn output_stem(input_name: &str) -> String {
    join!(&clean_stem(input_name), "-with-unisex")
}

pub fn add_unisex(
    ds: &DataSet,
    handle: &ColumnRef,
    gender: &ColumnRef,
    mut progress: Option<&mut dyn Progress>,
) -> Result<UnisexReport> {
    let handle_ix = handle.resolve(&ds.headers, &ds.name)?;
    let gender_ix = gender.resolve(&ds.headers, &ds.name)?;

    let mut report = UnisexReport {
        table: OutputTable::new(output_stem(&ds.name), ds.headers.clone()),
        ..Default::default()
    };
    let mut leaders = LeaderTracker::new();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ds.len());
    }

    for row in &ds.rows {
        report.processed += 1;

        let value = if leaders.is_leader(cell(row, handle_ix)) {
            let (genders, added) = add_unisex_if_complete(&decode_json(cell(row, gender_ix)));
            if added { report.added += 1; } else { report.unchanged += 1; }
            // a leader without genders stays blank rather than "[]"
            if genders.is_empty() { s!() } else { encode(&genders) }
        } else {
            s!()
        };
        report.table.rows.push(with_cell(row, gender_ix, value));

        if let Some(p) = progress.as_deref_mut() {
            p.row_done(report.processed);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    report.unique_handles = leaders.len();
    logf!("add-unisex: {} of {} handles completed", report.added, report.unique_handles);
    Ok(report)
}
