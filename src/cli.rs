// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::columns::ColumnRef;
use crate::config::{
    consts::{CONFIG_FILE, PROGRESS_EVERY, SPLIT_BRAND},
    file as config_file,
    options::{AppOptions, ExportFormat},
};
use crate::core::classify::RuleSet;
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, Job, RunSummary};
use crate::stages::extract::parse_terms;

#[derive(Parser, Debug)]
#[command(
    name = "catalog_prep",
    version,
    about = "Product catalog tag and gender preparation",
    long_about = "Product catalog tag and gender preparation.\n\n\
        Reads the first sheet of .xlsx/.xlsm/.xlsb/.xls/.ods workbooks, or .csv/.tsv files.\n\
        Writes CSV (default) or TSV only, never .xlsx: re-import the output as CSV, or \
        open it in a spreadsheet and save as .xlsx if the next tool needs a workbook. \
        Handles, tags and gender lists are written as plain text cells."
)]
pub struct Cli {
    /// key = value config file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory
    #[arg(short = 'o', long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Output format: csv | tsv (workbooks are input only)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<ExportFormat>,

    /// Log at info level (CATALOG_PREP_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub columns: ColumnArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Column overrides, by header text or by letter (`@CQ`).
#[derive(Args, Debug, Default)]
pub struct ColumnArgs {
    #[arg(long, global = true, value_parser = parse_column)]
    pub handle_column: Option<ColumnRef>,
    #[arg(long, global = true, value_parser = parse_column)]
    pub brand_column: Option<ColumnRef>,
    #[arg(long, global = true, value_parser = parse_column)]
    pub tags_column: Option<ColumnRef>,
    #[arg(long, global = true, value_parser = parse_column)]
    pub gender_column: Option<ColumnRef>,
    #[arg(long, global = true, value_parser = parse_column)]
    pub search_column: Option<ColumnRef>,
    #[arg(long, global = true, value_parser = parse_column)]
    pub extract_column: Option<ColumnRef>,
    #[arg(long, global = true, value_parser = parse_column)]
    pub reference_handle_column: Option<ColumnRef>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pull handles of collection rows whose search column contains a term
    ExtractHandles {
        input: PathBuf,
        /// Comma-separated search terms
        #[arg(short, long)]
        terms: String,
    },
    /// Keep master catalog rows whose handle appears in the reference list
    Segment {
        reference: PathBuf,
        #[arg(short, long)]
        master: PathBuf,
    },
    /// List the distinct size_ tags
    SizeTags { input: PathBuf },
    /// Merge a gender into the rows of one brand and size
    UpdateGender {
        input: PathBuf,
        #[arg(short, long)]
        brand: String,
        #[arg(short, long)]
        size: String,
        #[arg(short, long)]
        gender: String,
    },
    /// Split a brand into gender buckets by its size tags
    SplitGender {
        input: PathBuf,
        #[arg(short, long, default_value = SPLIT_BRAND)]
        brand: String,
        /// JSON rule set; the two-size sock rules when omitted
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Add Unisex where both Male and Female are present
    AddUnisex { input: PathBuf },
}

fn parse_column(s: &str) -> std::result::Result<ColumnRef, String> {
    ColumnRef::parse(s).map_err(|e| e.to_string())
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("Unknown format: {s} (csv | tsv)"))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(if cli.verbose { "info" } else { "warn" });

    let opts = options(&cli)?;
    let job = job(cli.command)?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&job, &opts, Some(&mut progress as &mut dyn Progress))?;
    print_summary(&summary);
    Ok(())
}

/// Config file, then command-line overrides.
pub fn options(cli: &Cli) -> Result<AppOptions> {
    let mut opts = config_file::load(&cli.config)?;
    if let Some(dir) = &cli.out_dir { opts.export.out_dir = dir.clone(); }
    if let Some(fmt) = cli.format { opts.export.format = fmt; }

    let c = &cli.columns;
    let cols = &mut opts.columns;
    let overrides = [
        (&c.handle_column, &mut cols.handle),
        (&c.brand_column, &mut cols.brand),
        (&c.tags_column, &mut cols.tags),
        (&c.gender_column, &mut cols.gender),
        (&c.search_column, &mut cols.search),
        (&c.extract_column, &mut cols.extract),
        (&c.reference_handle_column, &mut cols.reference_handle),
    ];
    for (given, slot) in overrides {
        if let Some(col) = given { *slot = col.clone(); }
    }
    Ok(opts)
}

pub fn job(command: Command) -> Result<Job> {
    Ok(match command {
        Command::ExtractHandles { input, terms } => Job::ExtractHandles { input, terms: parse_terms(&terms)? },
        Command::Segment { reference, master } => Job::Segment { reference, master },
        Command::SizeTags { input } => Job::SizeTags { input },
        Command::UpdateGender { input, brand, size, gender } => Job::UpdateGender {
            input,
            brand,
            size_label: size,
            gender,
        },
        Command::SplitGender { input, brand, rules } => Job::SplitGender {
            input,
            brand,
            rules: load_rules(rules.as_deref())?,
        },
        Command::AddUnisex { input } => Job::AddUnisex { input },
    })
}

fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(p) => RuleSet::load(p),
        None => Ok(RuleSet::default()),
    }
}

fn print_summary(summary: &RunSummary) {
    println!("{}", "=".repeat(50));
    for (label, value) in summary.summary() {
        println!("{label}: {value}");
    }
    println!("{}", "=".repeat(50));
    for path in &summary.files_written {
        println!("Saved: {}", path.display());
    }
    if summary.rows_emitted() == 0 {
        eprintln!("Warning: no matching rows; outputs contain headers only.");
    }
}

/// Prints a row count every `PROGRESS_EVERY` rows.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Processing {total} rows...");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn row_done(&mut self, processed: usize) {
        if processed % PROGRESS_EVERY == 0 {
            println!("  Processed {processed}/{} rows...", self.total);
        }
    }
}
