// tests/cli_args.rs
#![cfg(feature = "cli")]

use clap::{CommandFactory, Parser};

use catalog_prep::cli::{job, options, Cli};
use catalog_prep::columns::ColumnRef;
use catalog_prep::config::options::ExportFormat;
use catalog_prep::runner::Job;

#[test]
fn help_states_output_formats() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("Writes CSV (default) or TSV only, never .xlsx"), "{help}");
    assert!(help.contains("workbooks are input only"), "{help}");
}

#[test]
fn flags_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let conf = dir.path().join("none.conf");
    let cli = Cli::try_parse_from([
        "catalog_prep",
        "--config", conf.to_str().unwrap(),
        "--format", "tsv",
        "-o", "out",
        "--gender-column", "@CQ",
        "update-gender", "products.xlsx", "--brand", "Corgi", "--size", "size_6_7", "--gender", "Male",
    ])
    .unwrap();

    let opts = options(&cli).unwrap();
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert_eq!(opts.export.out_dir, std::path::PathBuf::from("out"));
    assert_eq!(opts.columns.gender, ColumnRef::Index(94));

    match job(cli.command).unwrap() {
        Job::UpdateGender { brand, size_label, gender, .. } => {
            assert_eq!((brand.as_str(), size_label.as_str(), gender.as_str()), ("Corgi", "size_6_7", "Male"));
        }
        other => panic!("unexpected job {other:?}"),
    }
}

#[test]
fn xlsx_is_not_an_output_format() {
    assert!(Cli::try_parse_from(["catalog_prep", "--format", "xlsx", "size-tags", "p.csv"]).is_err());
}
