// tests/columns.rs
use catalog_prep::columns::{index_to_letter, letter_to_index, ColumnRef};
use catalog_prep::CatalogError;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn letters_to_indices() {
    assert_eq!(letter_to_index("A"), Some(0));
    assert_eq!(letter_to_index("D"), Some(3));
    assert_eq!(letter_to_index("Z"), Some(25));
    assert_eq!(letter_to_index("AA"), Some(26));
    assert_eq!(letter_to_index("CQ"), Some(94));
    assert_eq!(letter_to_index("cq"), Some(94));
    assert_eq!(letter_to_index(""), None);
    assert_eq!(letter_to_index("A1"), None);

    for ix in [0, 25, 26, 94, 701, 702] {
        assert_eq!(letter_to_index(&index_to_letter(ix)), Some(ix));
    }
    assert_eq!(index_to_letter(94), "CQ");
}

#[test]
fn parse_names_and_letters() {
    assert_eq!(ColumnRef::parse("Tags").unwrap(), ColumnRef::name("Tags"));
    assert_eq!(ColumnRef::parse(" @CQ ").unwrap(), ColumnRef::Index(94));
    assert_eq!("@d".parse::<ColumnRef>().unwrap(), ColumnRef::Index(3));
    assert!(matches!(ColumnRef::parse("  "), Err(CatalogError::InvalidColumnRef(_))));
    assert!(matches!(ColumnRef::parse("@1"), Err(CatalogError::InvalidColumnRef(_))));
    assert_eq!(ColumnRef::Index(94).to_string(), "@CQ");
}

#[test]
fn names_match_exactly_then_ignoring_case() {
    let h = headers(&["Handle", " Tags ", "tags", "Vendor"]);
    assert_eq!(ColumnRef::name("Tags").find(&h), Some(1));
    assert_eq!(ColumnRef::name("tags").find(&h), Some(2));
    assert_eq!(ColumnRef::name("VENDOR").find(&h), Some(3));
    assert_eq!(ColumnRef::name("Title").find(&h), None);
}

#[test]
fn resolve_reports_missing_column() {
    let h = headers(&["Handle", "Vendor"]);
    assert_eq!(ColumnRef::Index(1).resolve(&h, "products").unwrap(), 1);

    let err = ColumnRef::name("Tags").resolve(&h, "products").unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumn { .. }));
    let msg = err.to_string();
    assert!(msg.contains("Tags") && msg.contains("products"), "{msg}");

    // a letter past the header is missing too
    assert!(ColumnRef::Index(5).resolve(&h, "products").is_err());
}
