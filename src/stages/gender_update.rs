// src/stages/gender_update.rs
//! Tag one brand + size label with a gender.
//!
//! Only rows whose brand matches exactly and whose comma-separated tags
//! contain the size label exactly are kept. The first kept row of each
//! handle gets the merged gender list; its other rows get a blank cell.

use crate::columns::ColumnRef;
use crate::core::gender::{MergeRule, merge};
use crate::core::leader::LeaderTracker;
use crate::core::tags::{decode_comma, decode_json, encode};
use crate::error::Result;
use crate::file::slug;
use crate::progress::Progress;
use crate::sheet::{DataSet, cell};

use super::{OutputTable, with_cell};

#[derive(Clone, Debug)]
pub struct GenderUpdateParams {
    pub brand: String,
    pub size_label: String,
    pub gender: String,
    pub handle: ColumnRef,
    pub brand_column: ColumnRef,
    pub tags: ColumnRef,
    pub gender_column: ColumnRef,
}

#[derive(Clone, Debug, Default)]
pub struct GenderUpdateReport {
    pub table: OutputTable,
    pub processed: usize,
    pub matched: usize,
    /// Leader rows whose gender list changed.
    pub updated: usize,
    /// Leader rows that already carried the gender.
    pub unchanged: usize,
    pub replaced_opposite: usize,
    pub unique_handles: usize,
}

impl GenderUpdateReport {
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total rows processed", self.processed.to_string()),
            ("Rows matched criteria", self.matched.to_string()),
            ("Rows updated", self.updated.to_string()),
            ("  of which opposite replaced", self.replaced_opposite.to_string()),
            ("Rows unchanged", self.unchanged.to_string()),
            ("Unique handles", self.unique_handles.to_string()),
        ]
    }
}

/// `products-updated-happy-socks-size_36-40` style stem.
pub fn output_stem(brand: &str, size_label: &str) -> String {
    format!("products-updated-{}-{}", slug(brand), size_label.replace('/', "-"))
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

pub fn update_gender(
    ds: &DataSet,
    params: &GenderUpdateParams,
    mut progress: Option<&mut dyn Progress>,
) -> Result<GenderUpdateReport> {
    let handle_ix = params.handle.resolve(&ds.headers, &ds.name)?;
    let brand_ix = params.brand_column.resolve(&ds.headers, &ds.name)?;
    let tags_ix = params.tags.resolve(&ds.headers, &ds.name)?;
    let gender_ix = params.gender_column.resolve(&ds.headers, &ds.name)?;

    let mut report = GenderUpdateReport {
        table: OutputTable::new(output_stem(&params.brand, &params.size_label), ds.headers.clone()),
        ..Default::default()
    };
    let mut leaders = LeaderTracker::new();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ds.len());
    }

    for row in &ds.rows {
        report.processed += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.row_done(report.processed);
        }

        // brand and size label are exact-case
        if cell(row, brand_ix) != params.brand {
            continue;
        }
        if !decode_comma(cell(row, tags_ix)).iter().any(|t| *t == params.size_label) {
            continue;
        }
        report.matched += 1;

        let value = if leaders.is_leader(cell(row, handle_ix)) {
            let current = decode_json(cell(row, gender_ix));
            let (genders, rule) = merge(&current, &params.gender);
            if rule.changed() { report.updated += 1; } else { report.unchanged += 1; }
            if rule == MergeRule::ReplacedOpposite { report.replaced_opposite += 1; }
            encode(&genders)
        } else {
            s!()
        };
        report.table.rows.push(with_cell(row, gender_ix, value));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    report.unique_handles = leaders.len();
    logf!(
        "update-gender: {} matched, {} updated, {} unchanged",
        report.matched, report.updated, report.unchanged
    );
    Ok(report)
}
