// src/runner.rs
//! Load → stage → write. The only place where stages meet the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{
    config::{consts::{SIZE_TAG_PREFIX, SIZE_TAGS_FILE}, options::AppOptions},
    core::classify::RuleSet,
    error::Result,
    file::{resolve_output_filename, write_lines, write_table},
    progress::Progress,
    sheet,
    stages::{
        OutputTable,
        extract::{self, ExtractParams, ExtractReport},
        gender_split::{self, SplitParams, SplitReport},
        gender_update::{self, GenderUpdateParams, GenderUpdateReport},
        segment::{self, SegmentReport},
        size_tags::{self, SizeTagReport},
        unisex::{self, UnisexReport},
    },
};

/// One pipeline step with its inputs.
#[derive(Clone, Debug)]
pub enum Job {
    ExtractHandles { input: PathBuf, terms: Vec<String> },
    Segment { reference: PathBuf, master: PathBuf },
    SizeTags { input: PathBuf },
    UpdateGender { input: PathBuf, brand: String, size_label: String, gender: String },
    SplitGender { input: PathBuf, brand: String, rules: RuleSet },
    AddUnisex { input: PathBuf },
}

#[derive(Clone, Debug)]
pub enum Outcome {
    Extract(ExtractReport),
    Segment(SegmentReport),
    SizeTags(SizeTagReport),
    UpdateGender(GenderUpdateReport),
    SplitGender(SplitReport),
    AddUnisex(UnisexReport),
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub files_written: Vec<PathBuf>,
}

impl RunSummary {
    /// Data rows (or lines) written across all outputs.
    pub fn rows_emitted(&self) -> usize {
        match &self.outcome {
            Outcome::Extract(r) => r.table.rows.len(),
            Outcome::Segment(r) => r.table.rows.len(),
            Outcome::SizeTags(r) => r.tags.len(),
            Outcome::UpdateGender(r) => r.table.rows.len(),
            Outcome::SplitGender(r) => r.buckets.iter().map(|b| b.table.rows.len()).sum(),
            Outcome::AddUnisex(r) => r.table.rows.len(),
        }
    }

    pub fn summary(&self) -> Vec<(&'static str, String)> {
        match &self.outcome {
            Outcome::Extract(r) => r.summary(),
            Outcome::Segment(r) => r.summary(),
            Outcome::SizeTags(r) => r.summary(),
            Outcome::UpdateGender(r) => r.summary(),
            Outcome::SplitGender(r) => r.summary(),
            Outcome::AddUnisex(r) => r.summary(),
        }
    }
}

/// Run one job. `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    job: &Job,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let cols = &opts.columns;
    let mut writer = Writer::new(opts);

    let outcome = match job {
        Job::ExtractHandles { input, terms } => {
            let ds = load(input, &mut progress)?;
            let params = ExtractParams {
                terms: terms.clone(),
                search: cols.search.clone(),
                extract: cols.extract.clone(),
            };
            let report = extract::extract_handles(&ds, &params, progress)?;
            writer.table(&report.table)?;
            Outcome::Extract(report)
        }
        Job::Segment { reference, master } => {
            let reference = load(reference, &mut progress)?;
            let master = load(master, &mut progress)?;
            let report = segment::segment(&reference, &cols.reference_handle, &master, &cols.handle, progress)?;
            writer.table(&report.table)?;
            Outcome::Segment(report)
        }
        Job::SizeTags { input } => {
            let ds = load(input, &mut progress)?;
            let report = size_tags::collect_size_tags(&ds, &cols.tags, SIZE_TAG_PREFIX, progress)?;
            writer.lines(SIZE_TAGS_FILE, &report.tags)?;
            Outcome::SizeTags(report)
        }
        Job::UpdateGender { input, brand, size_label, gender } => {
            let ds = load(input, &mut progress)?;
            let params = GenderUpdateParams {
                brand: brand.clone(),
                size_label: size_label.clone(),
                gender: gender.clone(),
                handle: cols.handle.clone(),
                brand_column: cols.brand.clone(),
                tags: cols.tags.clone(),
                gender_column: cols.gender.clone(),
            };
            let report = gender_update::update_gender(&ds, &params, progress)?;
            writer.table(&report.table)?;
            Outcome::UpdateGender(report)
        }
        Job::SplitGender { input, brand, rules } => {
            let ds = load(input, &mut progress)?;
            let params = SplitParams {
                brand: brand.clone(),
                rules: rules.clone(),
                handle: cols.handle.clone(),
                brand_column: cols.brand.clone(),
                tags: cols.tags.clone(),
                gender_column: cols.gender.clone(),
            };
            let report = gender_split::split_by_gender(&ds, &params, progress)?;
            for b in &report.buckets {
                writer.table(&b.table)?;
            }
            Outcome::SplitGender(report)
        }
        Job::AddUnisex { input } => {
            let ds = load(input, &mut progress)?;
            let report = unisex::add_unisex(&ds, &cols.handle, &cols.gender, progress)?;
            writer.table(&report.table)?;
            Outcome::AddUnisex(report)
        }
    };

    Ok(RunSummary { outcome, files_written: writer.written })
}

fn load(path: &Path, progress: &mut Option<&mut dyn Progress>) -> Result<sheet::DataSet> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Reading {}", path.display()));
    }
    sheet::load(path)
}

/// Resolves output names (deduplicated within the run) and writes them.
struct Writer<'a> {
    opts: &'a AppOptions,
    seen: HashMap<String, usize>,
    written: Vec<PathBuf>,
}

impl<'a> Writer<'a> {
    fn new(opts: &'a AppOptions) -> Self {
        Self { opts, seen: HashMap::new(), written: Vec::new() }
    }

    fn table(&mut self, table: &OutputTable) -> Result<()> {
        let opts = self.opts;
        let format = opts.export.format;
        let path = resolve_output_filename(&opts.export.out_dir, &table.stem, &mut self.seen, format.ext());
        write_table(&path, &table.headers, &table.rows, format.delim())?;
        self.written.push(path);
        Ok(())
    }

    fn lines(&mut self, stem: &str, lines: &[String]) -> Result<()> {
        let opts = self.opts;
        let path = resolve_output_filename(&opts.export.out_dir, stem, &mut self.seen, "txt");
        write_lines(&path, lines)?;
        self.written.push(path);
        Ok(())
    }
}
