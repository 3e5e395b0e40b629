// src/core/gender.rs
//! Gender tag merge rules.
//!
//! Stored values and the "already present" check are case-sensitive;
//! the unisex completion check is case-insensitive. Downstream imports
//! match on the exact `Male`/`Female`/`Unisex` spelling, so the two checks
//! are kept as they are.

use super::tags::TagList;

pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";
pub const UNISEX: &str = "Unisex";

/// Which merge rule applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Incoming gender was already in the list.
    AlreadyPresent,
    /// The opposite gender was replaced in place.
    ReplacedOpposite,
    /// Appended next to an existing `Unisex`.
    AppendedToUnisex,
    /// Appended (or started an empty list).
    Appended,
}

impl MergeRule {
    pub fn changed(self) -> bool {
        !matches!(self, MergeRule::AlreadyPresent)
    }
}

/// Male ↔ Female. Anything else, `Unisex` included, has no opposite.
pub fn opposite(gender: &str) -> Option<&'static str> {
    if gender.eq_ignore_ascii_case("male") {
        Some(FEMALE)
    } else if gender.eq_ignore_ascii_case("female") {
        Some(MALE)
    } else {
        None
    }
}

/// Merge `incoming` into `current`.
///
/// Rules, first match wins:
/// 1. present already → unchanged
/// 2. opposite present → replaced at its position
/// 3. `Unisex` present → appended
/// 4. otherwise → appended
pub fn merge<S: AsRef<str>>(current: &[S], incoming: &str) -> (TagList, MergeRule) {
    let mut genders: TagList = current.iter().map(|g| g.as_ref().to_string()).collect();

    if genders.iter().any(|g| g == incoming) {
        return (genders, MergeRule::AlreadyPresent);
    }

    if let Some(opp) = opposite(incoming) {
        if let Some(pos) = genders.iter().position(|g| g == opp) {
            genders[pos] = incoming.to_string();
            // a repeated opposite would otherwise become a repeated incoming
            let mut ix = pos + 1;
            while ix < genders.len() {
                if genders[ix] == opp { genders.remove(ix); } else { ix += 1; }
            }
            return (genders, MergeRule::ReplacedOpposite);
        }
    }

    let rule = if genders.iter().any(|g| g == UNISEX) {
        MergeRule::AppendedToUnisex
    } else {
        MergeRule::Appended
    };
    genders.push(incoming.to_string());
    (genders, rule)
}

/// Append `Unisex` when both male and female are present and no unisex
/// entry exists yet (all case-insensitive). Repeat calls are no-ops.
pub fn add_unisex_if_complete<S: AsRef<str>>(current: &[S]) -> (TagList, bool) {
    let mut genders: TagList = current.iter().map(|g| g.as_ref().to_string()).collect();

    let has = |want: &str| genders.iter().any(|g| g.eq_ignore_ascii_case(want));
    let complete = has(MALE) && has(FEMALE) && !has(UNISEX);

    if complete {
        genders.push(UNISEX.to_string());
    }
    (genders, complete)
}
