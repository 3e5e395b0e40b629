// tests/stages_e2e.rs
//
// Stage functions over in-memory data sets, no files involved.
//
use catalog_prep::config::consts::{GENDER_COLUMN, SIZE_TAG_PREFIX, SPLIT_BRAND};
use catalog_prep::config::options::ColumnOptions;
use catalog_prep::core::classify::RuleSet;
use catalog_prep::progress::Progress;
use catalog_prep::sheet::DataSet;
use catalog_prep::stages::{extract, gender_split, gender_update, segment, size_tags, unisex};
use catalog_prep::CatalogError;

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
}

fn products(rows: &[&[&str]]) -> DataSet {
    let header: &[&str] = &["Handle", "Vendor", "Tags", GENDER_COLUMN];
    let mut all = vec![header];
    all.extend_from_slice(rows);
    DataSet::from_grid("products", grid(&all)).unwrap()
}

#[derive(Default)]
struct Counting {
    total: usize,
    rows: usize,
    finished: bool,
}

impl Progress for Counting {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn row_done(&mut self, processed: usize) { self.rows = processed; }
    fn finish(&mut self) { self.finished = true; }
}

fn split_params(rules: RuleSet) -> gender_split::SplitParams {
    let cols = ColumnOptions::default();
    gender_split::SplitParams {
        brand: SPLIT_BRAND.to_string(),
        rules,
        handle: cols.handle,
        brand_column: cols.brand,
        tags: cols.tags,
        gender_column: cols.gender,
    }
}

#[test]
fn split_sock_line_into_buckets() {
    let ds = products(&[
        &["Sock-A", "Happy Socks", "size_36_40", ""],
        &["Sock-A", "Happy Socks", "size_36_40", ""],
        &["Sock-B", "Happy Socks", "size_41_46", ""],
        &["Other", "Acme", "size_36_40", ""],
        &["Sock-C", "Happy Socks", "kids", ""],
    ]);
    let mut progress = Counting::default();
    let report = gender_split::split_by_gender(&ds, &split_params(RuleSet::default()), Some(&mut progress)).unwrap();

    assert_eq!(report.processed, 5);
    assert_eq!(report.brand_rows, 4);
    assert_eq!(report.skipped, 1);
    assert_eq!((progress.total, progress.rows, progress.finished), (5, 5, true));

    let female = report.bucket("female_only").unwrap();
    assert_eq!(female.table.stem, "happy-socks-female-only");
    assert_eq!(female.table.headers, ds.headers);
    assert_eq!(female.table.rows.len(), 2);
    assert_eq!(female.table.rows[0][3], r#"["Female"]"#);
    assert_eq!(female.table.rows[1][3], "");
    assert_eq!(female.table.rows[1][0], "Sock-A");
    assert_eq!(female.unique_handles, 1);

    let male = report.bucket("male_only").unwrap();
    assert_eq!(male.table.rows.len(), 1);
    assert_eq!(male.table.rows[0][0], "Sock-B");
    assert_eq!(male.table.rows[0][3], r#"["Male"]"#);

    let both = report.bucket("unisex").unwrap();
    assert!(both.table.rows.is_empty());
    assert_eq!(both.genders, vec!["Female", "Male", "Unisex"]);
}

#[test]
fn split_leaders_are_per_bucket() {
    let ds = products(&[
        &["Sock-A", "Happy Socks", "size_36_40", ""],
        &["Sock-A", "Happy Socks", "size_41_46", ""],
        &["Sock-A", "Happy Socks", "size_41_46", ""],
    ]);
    let report = gender_split::split_by_gender(&ds, &split_params(RuleSet::default()), None).unwrap();
    assert_eq!(report.bucket("female_only").unwrap().table.rows[0][3], r#"["Female"]"#);
    let male = &report.bucket("male_only").unwrap().table.rows;
    assert_eq!(male[0][3], r#"["Male"]"#);
    assert_eq!(male[1][3], "");
}

#[test]
fn split_pads_short_rows() {
    let ds = products(&[&["Sock-A", "Happy Socks", "size_41_46"]]);
    let report = gender_split::split_by_gender(&ds, &split_params(RuleSet::default()), None).unwrap();
    let row = &report.bucket("male_only").unwrap().table.rows[0];
    assert_eq!(row.len(), 4);
    assert_eq!(row[3], r#"["Male"]"#);
}

#[test]
fn split_missing_column_is_fatal() {
    let ds = DataSet::from_grid("products", grid(&[&["Handle", "Vendor", "Tags"]])).unwrap();
    let err = gender_split::split_by_gender(&ds, &split_params(RuleSet::default()), None).unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumn { .. }));
}

fn update_params(brand: &str, size: &str, gender: &str) -> gender_update::GenderUpdateParams {
    let cols = ColumnOptions::default();
    gender_update::GenderUpdateParams {
        brand: brand.to_string(),
        size_label: size.to_string(),
        gender: gender.to_string(),
        handle: cols.handle,
        brand_column: cols.brand,
        tags: cols.tags,
        gender_column: cols.gender,
    }
}

#[test]
fn update_gender_merges_on_leader_rows() {
    let ds = products(&[
        &["Sock-X", "Corgi", "size_6_7, wool", r#"["Female"]"#],
        &["Sock-X", "Corgi", "size_6_7", r#"["Female"]"#],
        &["Sock-Y", "Corgi", "size_6_7", r#"["Male"]"#],
        &["Sock-Z", "Corgi", "size_8_9", ""],
        &["Sock-W", "corgi", "size_6_7", ""],
        &["Sock-V", "Corgi", "size_6_7", ""],
    ]);
    let report = gender_update::update_gender(&ds, &update_params("Corgi", "size_6_7", "Male"), None).unwrap();

    assert_eq!(report.processed, 6);
    assert_eq!(report.matched, 4);
    assert_eq!(report.updated, 2);
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.replaced_opposite, 1);
    assert_eq!(report.unique_handles, 3);
    assert_eq!(report.table.stem, "products-updated-corgi-size_6_7");

    let genders: Vec<&str> = report.table.rows.iter().map(|r| r[3].as_str()).collect();
    assert_eq!(genders, vec![r#"["Male"]"#, "", r#"["Male"]"#, r#"["Male"]"#]);
    let handles: Vec<&str> = report.table.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(handles, vec!["Sock-X", "Sock-X", "Sock-Y", "Sock-V"]);
}

#[test]
fn update_gender_stem_replaces_slashes() {
    assert_eq!(gender_update::output_stem("Happy Socks", "36/40"), "products-updated-happy-socks-36-40");
}

#[test]
fn update_gender_without_matches_is_empty() {
    let ds = products(&[&["Sock-X", "Corgi", "size_6_7", ""]]);
    let report = gender_update::update_gender(&ds, &update_params("Acme", "size_6_7", "Male"), None).unwrap();
    assert_eq!(report.matched, 0);
    assert!(report.table.rows.is_empty());
    assert_eq!(report.table.headers, ds.headers);
}

#[test]
fn unisex_completes_leader_rows() {
    let ds = products(&[
        &["A", "Happy Socks", "", r#"["Female","Male"]"#],
        &["A", "Happy Socks", "", r#"["Female","Male"]"#],
        &["B", "Happy Socks", "", ""],
        &["C", "Happy Socks", "", r#"["Male"]"#],
    ]);
    let cols = ColumnOptions::default();
    let report = unisex::add_unisex(&ds, &cols.handle, &cols.gender, None).unwrap();

    assert_eq!(report.processed, 4);
    assert_eq!(report.unique_handles, 3);
    assert_eq!(report.added, 1);
    assert_eq!(report.unchanged, 2);
    assert_eq!(report.table.stem, "products-with-unisex");

    let genders: Vec<&str> = report.table.rows.iter().map(|r| r[3].as_str()).collect();
    assert_eq!(genders, vec![r#"["Female","Male","Unisex"]"#, "", "", r#"["Male"]"#]);
}

#[test]
fn size_tags_sorted_and_unique() {
    let ds = products(&[
        &["A", "V", "size_41_46, size_36_40, wool", ""],
        &["B", "V", "size_36_40", ""],
        &["C", "V", "", ""],
    ]);
    let cols = ColumnOptions::default();
    let report = size_tags::collect_size_tags(&ds, &cols.tags, SIZE_TAG_PREFIX, None).unwrap();
    assert_eq!(report.tags, vec!["size_36_40", "size_41_46"]);
    assert_eq!(report.rows_with_size_tags, 2);
    assert_eq!(report.processed, 3);
}

#[test]
fn extract_rows_matching_any_term() {
    let ds = DataSet::from_grid(
        "collections",
        grid(&[
            &["ID", "Type", "Collection", "Title", "Product: Handle"],
            &["1", "smart", "x", "Happy Socks Gift Box", "gift-box"],
            &["2", "smart", "x", "Wool SOCKS", "wool-socks"],
            &["3", "smart", "x", "Hat", "hat"],
            &["4", "smart", "x", "", "blank"],
        ]),
    )
    .unwrap();
    let cols = ColumnOptions::default();
    let params = extract::ExtractParams {
        terms: extract::parse_terms("socks, gift").unwrap(),
        search: cols.search,
        extract: cols.extract,
    };
    let report = extract::extract_handles(&ds, &params, None).unwrap();

    assert_eq!(report.processed, 4);
    assert_eq!(report.matches, 2);
    assert_eq!(report.table.stem, "socks-gift-handles");
    assert_eq!(report.table.headers, vec!["Title", "Product: Handle"]);
    assert_eq!(report.table.rows[0], vec!["Happy Socks Gift Box", "gift-box"]);
    assert_eq!(report.table.rows[1], vec!["Wool SOCKS", "wool-socks"]);
}

#[test]
fn extract_needs_terms() {
    assert!(matches!(extract::parse_terms(" , "), Err(CatalogError::NoSearchTerms)));
    assert_eq!(extract::parse_terms(" a ,b,").unwrap(), vec!["a", "b"]);
}

#[test]
fn segment_joins_on_normalized_handle() {
    let reference = DataSet::from_grid(
        "socks-handles",
        grid(&[
            &["Title", "Product: Handle"],
            &["x", "Brand™ Socks"],
            &["y", "BRAND SOCKS"],
            &["z", ""],
            &["w", "Café-Mug"],
        ]),
    )
    .unwrap();
    let master = DataSet::from_grid(
        "master",
        grid(&[
            &["Handle", "Vendor"],
            &["brand socks", "V1"],
            &["brandsocks", "V2"],
            &["other", "V3"],
            &["cafe-mug", "V4"],
        ]),
    )
    .unwrap();
    let cols = ColumnOptions::default();
    let report = segment::segment(&reference, &cols.reference_handle, &master, &cols.handle, None).unwrap();

    assert_eq!(report.unique_handles, 2);
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.processed, 4);
    assert_eq!(report.matched, 3);
    assert_eq!(report.table.stem, "socks-handles-extracted-products");
    assert_eq!(report.table.headers, master.headers);
    assert_eq!(report.table.rows[0], vec!["Brand™ Socks", "V1"]);
    assert_eq!(report.table.rows[1], vec!["Brand™ Socks", "V2"]);
    assert_eq!(report.table.rows[2], vec!["Café-Mug", "V4"]);
}

#[test]
fn segment_with_empty_reference_matches_nothing() {
    let reference = DataSet::from_grid("empty", grid(&[&["Product: Handle"]])).unwrap();
    let master = DataSet::from_grid("master", grid(&[&["Handle"], &["a"]])).unwrap();
    let cols = ColumnOptions::default();
    let report = segment::segment(&reference, &cols.reference_handle, &master, &cols.handle, None).unwrap();
    assert_eq!(report.unique_handles, 0);
    assert_eq!(report.matched, 0);
    assert!(report.table.rows.is_empty());
}

#[test]
fn empty_grid_is_an_error() {
    assert!(matches!(DataSet::from_grid("x", Vec::new()), Err(CatalogError::EmptySource(_))));
}
