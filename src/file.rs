// src/file.rs

use std::{
    collections::HashMap,
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::csv::write_row;
use crate::error::{CatalogError, Result};

/// Write header + rows to `path` as CSV/TSV. The content goes to a temp file
/// in the same directory first and is renamed into place on success, so an
/// aborted run never leaves a complete-looking output behind.
pub fn write_table(
    path: &Path,
    headers: &[String],
    rows: &[Vec<String>],
    sep: char,
) -> Result<()> {
    write_atomic(path, |out| {
        write_row(&mut *out, headers, sep)?;
        for row in rows {
            write_row(&mut *out, row, sep)?;
        }
        Ok(())
    })
}

/// Write one line per entry, atomically.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    write_atomic(path, |out| {
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    })
}

fn write_atomic<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> std::io::Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_directory(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    {
        let mut out = BufWriter::new(&mut tmp);
        fill(&mut out)?;
        out.flush()?;
    }
    tmp.persist(path).map_err(|e| {
        loge!("could not move finished output into {}: {}", path.display(), e.error);
        CatalogError::Persist { path: path.to_path_buf(), cause: e.error }
    })?;
    logd!("wrote {}", path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CatalogError::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Keep ASCII alphanumerics, `-` and `_`; drop everything else.
/// `"Sock's Top/Line"` → `"SocksTopLine"`.
pub fn clean_stem(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Lowercase slug: whitespace runs become one `-`, other characters as
/// in [`clean_stem`]. `"Happy Socks"` → `"happy-socks"`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || ch == '-' {
            if !last_dash { out.push('-'); last_dash = true; }
        }
    }
    out.trim_matches('-').to_string()
}

/// Duplicate handling **only within this run**
pub fn resolve_output_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv" | "txt"
) -> PathBuf {
    let stem = if stem.is_empty() { "output" } else { stem };
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        join!(stem, ".", ext)
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
