// src/core/mod.rs
//! Tag normalization and row classification. No I/O lives here: callers
//! hand in cell text and get back computed values.

pub mod classify;
pub mod gender;
pub mod handle;
pub mod leader;
pub mod tags;

pub use classify::{Bucket, Classification, Rule, RuleSet};
pub use handle::{HandleIndex, normalize};
pub use leader::LeaderTracker;
pub use tags::TagList;
