// src/core/handle.rs
//! Handle normalization for cross-file matching.
//!
//! A normalized handle is a matching key only: ASCII lowercase letters,
//! digits and single hyphens, no leading/trailing hyphen. Output rows always
//! carry an original handle, never the key.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use unicode_normalization::UnicodeNormalization;

/// Symbols whose compatibility decomposition yields ASCII letters
/// (™ → "TM", ℠ → "SM"). Removed before decomposition.
const DECOMPOSING_SYMBOLS: [char; 4] = [
    '\u{2122}', // ™ TRADE MARK SIGN
    '\u{00AE}', // ® REGISTERED SIGN
    '\u{00A9}', // © COPYRIGHT SIGN
    '\u{2120}', // ℠ SERVICE MARK
];

/// Canonical matching key for a handle.
///
/// `"Brand™ Socks"` and `"brand socks"` map to the same key, `"Café"` maps to
/// `"cafe"`, and `"a -- b"` to `"a-b"`. Empty input gives an empty key.
pub fn normalize(handle: &str) -> String {
    if handle.is_empty() {
        return s!();
    }

    let lowered: String = handle
        .to_lowercase()
        .chars()
        .filter(|c| !DECOMPOSING_SYMBOLS.contains(c))
        .collect();

    let mut out = String::with_capacity(lowered.len());
    let mut last_hyphen = false;
    for ch in lowered.nfkd() {
        if ch.is_ascii_alphanumeric() {
            // NFKD can still surface uppercase ASCII (e.g. ℌ → H)
            out.push(ch.to_ascii_lowercase());
            last_hyphen = false;
        } else if ch == '-' {
            if !last_hyphen {
                out.push('-');
            }
            last_hyphen = true;
        }
    }

    out.trim_matches('-').to_string()
}

/// A reference handle that normalized onto a key already taken by a
/// differently written original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub key: String,
    pub kept: String,
    pub ignored: String,
}

/// Normalized key → original reference handle. Built once per reference
/// source; the first original seen for a key wins.
#[derive(Debug, Default, Clone)]
pub struct HandleIndex {
    by_key: HashMap<String, String>,
    collisions: Vec<Collision>,
}

impl HandleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_handles<I, S>(handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for h in handles {
            index.insert(h.as_ref());
        }
        index
    }

    /// Index one original handle (trimmed). Returns `true` when it introduced
    /// a new key. Blank handles and handles without any key characters are
    /// ignored.
    pub fn insert(&mut self, original: &str) -> bool {
        let original = original.trim();
        let key = normalize(original);
        if key.is_empty() {
            return false;
        }
        match self.by_key.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(original.to_string());
                true
            }
            Entry::Occupied(slot) => {
                if slot.get() != original {
                    logd!("handle collision on '{}': keeping '{}', ignoring '{}'", slot.key(), slot.get(), original);
                    self.collisions.push(Collision {
                        key: slot.key().clone(),
                        kept: slot.get().clone(),
                        ignored: original.to_string(),
                    });
                }
                false
            }
        }
    }

    /// Original reference handle matching `handle` after normalization.
    pub fn lookup(&self, handle: &str) -> Option<&str> {
        let key = normalize(handle.trim());
        if key.is_empty() {
            return None;
        }
        self.by_key.get(&key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}
