// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod columns;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod runner;
pub mod sheet;
pub mod stages;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{CatalogError, Result};
