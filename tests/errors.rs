// tests/errors.rs
use std::error::Error;
use std::io;
use std::path::PathBuf;

use catalog_prep::CatalogError;

fn persist_failure() -> CatalogError {
    CatalogError::Persist {
        path: PathBuf::from("data/out.csv"),
        cause: io::Error::new(io::ErrorKind::PermissionDenied, "read-only directory"),
    }
}

#[test]
fn persist_error_keeps_its_cause() {
    let err = persist_failure();
    assert!(err.to_string().contains("data/out.csv"));
    let cause = err.source().unwrap();
    assert_eq!(cause.to_string(), "read-only directory");
}

#[cfg(feature = "cli")]
#[test]
fn report_carries_the_source_chain() {
    let report = color_eyre::Report::new(persist_failure());
    let chain: Vec<String> = report.chain().map(|e| e.to_string()).collect();
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[1], "read-only directory");
}
