// src/config/consts.rs

// Column headers (Matrixify product export)
pub const HANDLE_COLUMN: &str = "Handle";
pub const BRAND_COLUMN: &str = "Vendor";
pub const TAGS_COLUMN: &str = "Tags";
pub const GENDER_COLUMN: &str = "Metafield: custom.gender [list.single_line_text_field]";

// Column headers (Matrixify smart collection export)
pub const SEARCH_COLUMN: &str = "Title";
pub const COLLECTION_HANDLE_COLUMN: &str = "Product: Handle";

// Reference list produced by extract-handles
pub const REFERENCE_HANDLE_COLUMN: &str = COLLECTION_HANDLE_COLUMN;

// Split
pub const SPLIT_BRAND: &str = "Happy Socks";
pub const SIZE_TAG_PREFIX: &str = "size_";

// Output
pub const DEFAULT_OUT_DIR: &str = "data";
pub const SIZE_TAGS_FILE: &str = "size_tags";
pub const CONFIG_FILE: &str = "catalog_prep.conf";

// Console
pub const PROGRESS_EVERY: usize = 1000;
