// src/stages/gender_split.rs
//! Split one brand into per-bucket tables by size tags.
//!
//! Every bucket of the rule set gets its own table and its own leader
//! tracker, so a handle whose variants land in one bucket leads there and
//! nowhere else. Rows matching no rule are counted as skipped.

use std::collections::HashMap;

use crate::columns::ColumnRef;
use crate::core::classify::{Bucket, RuleSet};
use crate::core::leader::LeaderTracker;
use crate::core::tags::{TagList, decode_comma, encode};
use crate::error::Result;
use crate::file::slug;
use crate::progress::Progress;
use crate::sheet::{DataSet, cell};

use super::{OutputTable, with_cell};

#[derive(Clone, Debug)]
pub struct SplitParams {
    pub brand: String,
    pub rules: RuleSet,
    pub handle: ColumnRef,
    pub brand_column: ColumnRef,
    pub tags: ColumnRef,
    pub gender_column: ColumnRef,
}

#[derive(Clone, Debug)]
pub struct BucketOutput {
    pub bucket: Bucket,
    /// Gender list of the first rule naming this bucket.
    pub genders: TagList,
    pub table: OutputTable,
    pub unique_handles: usize,
}

#[derive(Clone, Debug, Default)]
pub struct SplitReport {
    pub buckets: Vec<BucketOutput>,
    pub processed: usize,
    pub brand_rows: usize,
    pub skipped: usize,
}

impl SplitReport {
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total rows processed", self.processed.to_string()),
            ("Brand rows found", self.brand_rows.to_string()),
            ("Skipped (no rule matched)", self.skipped.to_string()),
        ]
    }

    pub fn bucket(&self, name: &str) -> Option<&BucketOutput> {
        self.buckets.iter().find(|b| b.bucket.as_str() == name)
    }
}

/// `Happy Socks` + `female_only` → `happy-socks-female-only`.
pub fn output_stem(brand: &str, bucket: &Bucket) -> String {
    format!("{}-{}", slug(brand), slug(&bucket.as_str().replace('_', "-")))
}

struct Target {
    out: BucketOutput,
    leaders: LeaderTracker,
}

pub fn split_by_gender(
    ds: &DataSet,
    params: &SplitParams,
    mut progress: Option<&mut dyn Progress>,
) -> Result<SplitReport> {
    let handle_ix = params.handle.resolve(&ds.headers, &ds.name)?;
    let brand_ix = params.brand_column.resolve(&ds.headers, &ds.name)?;
    let tags_ix = params.tags.resolve(&ds.headers, &ds.name)?;
    let gender_ix = params.gender_column.resolve(&ds.headers, &ds.name)?;

    let mut targets: Vec<Target> = Vec::new();
    let mut by_bucket: HashMap<Bucket, usize> = HashMap::new();
    for rule in &params.rules.rules {
        if by_bucket.contains_key(&rule.bucket) {
            continue;
        }
        let bucket = &rule.bucket;
        by_bucket.insert(bucket.clone(), targets.len());
        targets.push(Target {
            out: BucketOutput {
                bucket: bucket.clone(),
                genders: rule.genders.clone(),
                table: OutputTable::new(output_stem(&params.brand, bucket), ds.headers.clone()),
                unique_handles: 0,
            },
            leaders: LeaderTracker::new(),
        });
    }

    let mut report = SplitReport::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ds.len());
    }

    for row in &ds.rows {
        report.processed += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.row_done(report.processed);
        }

        if cell(row, brand_ix) != params.brand {
            continue;
        }
        report.brand_rows += 1;

        let tags = decode_comma(cell(row, tags_ix));
        let class = params.rules.classify(&tags);
        let Some(&slot) = by_bucket.get(&class.bucket) else {
            report.skipped += 1;
            continue;
        };

        let target = &mut targets[slot];
        let value = if target.leaders.is_leader(cell(row, handle_ix)) {
            encode(&class.genders)
        } else {
            s!()
        };
        target.out.table.rows.push(with_cell(row, gender_ix, value));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    report.buckets = targets
        .into_iter()
        .map(|mut t| {
            t.out.unique_handles = t.leaders.len();
            t.out
        })
        .collect();

    for b in &report.buckets {
        logf!("split-gender: bucket '{}' {} rows, {} handles", b.bucket, b.table.rows.len(), b.unique_handles);
    }
    Ok(report)
}
