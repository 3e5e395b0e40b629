// src/core/classify.rs
//! Size-based product bucketing.
//!
//! A `RuleSet` is an ordered list of predicate → outcome pairs evaluated
//! against the set of tags on a row; the first matching rule wins. The
//! built-in set covers the two-size sock line, other size schemes are
//! loaded from JSON:
//!
//! ```json
//! { "rules": [
//!     { "bucket": "unisex", "all_of": ["size_36_40", "size_41_46"],
//!       "genders": ["Female", "Male", "Unisex"] },
//!     { "bucket": "female_only", "all_of": ["size_36_40"], "none_of": ["size_41_46"],
//!       "genders": ["Female"] }
//! ] }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::gender::{FEMALE, MALE, UNISEX};
use super::tags::TagList;
use crate::error::{CatalogError, Result};

const NONE_BUCKET: &str = "none";

pub const SIZE_36_40: &str = "size_36_40";
pub const SIZE_41_46: &str = "size_41_46";

/// Classification outcome name. `none` is reserved for "no rule matched".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bucket(String);

impl Bucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn none() -> Self {
        Self(s!(NONE_BUCKET))
    }

    pub fn is_none(&self) -> bool {
        self.0 == NONE_BUCKET
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub bucket: Bucket,
    /// Every tag listed here must be present.
    #[serde(default)]
    pub all_of: Vec<String>,
    /// None of the tags listed here may be present.
    #[serde(default)]
    pub none_of: Vec<String>,
    /// Gender list written for rows in this bucket.
    pub genders: TagList,
}

impl Rule {
    pub fn new(bucket: &str, all_of: &[&str], none_of: &[&str], genders: &[&str]) -> Self {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            bucket: Bucket::new(bucket),
            all_of: owned(all_of),
            none_of: owned(none_of),
            genders: owned(genders),
        }
    }

    pub fn matches(&self, tags: &HashSet<&str>) -> bool {
        self.all_of.iter().all(|t| tags.contains(t.as_str()))
            && !self.none_of.iter().any(|t| tags.contains(t.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub bucket: Bucket,
    pub genders: TagList,
}

impl Classification {
    pub fn is_none(&self) -> bool {
        self.bucket.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::two_size_socks()
    }
}

impl RuleSet {
    /// 36–40 only → female, 41–46 only → male, both → unisex.
    pub fn two_size_socks() -> Self {
        Self {
            rules: vec![
                Rule::new("unisex", &[SIZE_36_40, SIZE_41_46], &[], &[FEMALE, MALE, UNISEX]),
                Rule::new("female_only", &[SIZE_36_40], &[SIZE_41_46], &[FEMALE]),
                Rule::new("male_only", &[SIZE_41_46], &[SIZE_36_40], &[MALE]),
            ],
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let set: RuleSet = serde_json::from_str(text)?;
        set.validate()?;
        Ok(set)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(CatalogError::Config(s!("rule set has no rules")));
        }
        for rule in &self.rules {
            let name = rule.bucket.as_str();
            if name.trim().is_empty() {
                return Err(CatalogError::Config(s!("rule with an empty bucket name")));
            }
            if rule.bucket.is_none() {
                return Err(CatalogError::Config(format!("bucket name '{NONE_BUCKET}' is reserved")));
            }
        }
        Ok(())
    }

    /// First rule matching the tag set, or the `none` bucket with no genders.
    /// Tag order and repeats in `tags` are irrelevant.
    pub fn classify<S: AsRef<str>>(&self, tags: &[S]) -> Classification {
        let set: HashSet<&str> = tags.iter().map(AsRef::as_ref).collect();
        self.rules
            .iter()
            .find(|r| r.matches(&set))
            .map(|r| Classification { bucket: r.bucket.clone(), genders: r.genders.clone() })
            .unwrap_or(Classification { bucket: Bucket::none(), genders: Vec::new() })
    }

    /// Distinct buckets in rule order.
    pub fn buckets(&self) -> Vec<&Bucket> {
        let mut out: Vec<&Bucket> = Vec::new();
        for r in &self.rules {
            if !out.contains(&&r.bucket) {
                out.push(&r.bucket);
            }
        }
        out
    }
}
