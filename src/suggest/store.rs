//! On-disk suggestion stores.
//!
//! Three recency-ordered lists live under the platform data directory as
//! JSON arrays of strings, one file per key. Each list holds at most
//! [`MAX_ENTRIES`] unique values, most recent first.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Cap per list; the oldest entry falls off on overflow.
pub const MAX_ENTRIES: usize = 20;

const STORE_DIR: &str = "dbchat";

/// The three suggestion lists the UI feeds from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Usernames,
    DbNames,
    Queries,
}

impl StoreKey {
    pub fn file_name(self) -> &'static str {
        match self {
            StoreKey::Usernames => "usernames.json",
            StoreKey::DbNames => "dbnames.json",
            StoreKey::Queries => "queries.json",
        }
    }
}

/// Handle to the store directory.
///
/// `root` is `None` when no platform data directory could be resolved; the
/// store then degrades to an always-empty, write-discarding store so the
/// rest of the UI keeps working.
///
/// No file locking - last writer wins if multiple instances run
/// simultaneously.
#[derive(Debug, Clone)]
pub struct SuggestionStore {
    root: Option<PathBuf>,
}

impl SuggestionStore {
    /// Store under `dirs::data_dir()/dbchat/`.
    pub fn open_default() -> Self {
        Self {
            root: dirs::data_dir().map(|p| p.join(STORE_DIR)),
        }
    }

    /// Store rooted at an explicit directory (tests use a tempdir).
    pub fn open_at(root: PathBuf) -> Self {
        Self { root: Some(root) }
    }

    /// Load the list for `key`. Absent or unreadable files and invalid JSON
    /// all read as an empty list.
    pub fn load(&self, key: StoreKey) -> Vec<String> {
        let Some(root) = &self.root else {
            return Vec::new();
        };

        let contents = match fs::read_to_string(root.join(key.file_name())) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Record `value` into the list for `key`: remove any existing equal
    /// entry, prepend, truncate to [`MAX_ENTRIES`], write back.
    ///
    /// Empty values are a no-op.
    pub fn record(&self, key: StoreKey, value: &str) -> io::Result<()> {
        if value.is_empty() {
            return Ok(());
        }

        let Some(root) = &self.root else {
            return Ok(());
        };

        let mut entries = self.load(key);
        entries.retain(|e| e != value);
        entries.insert(0, value.to_string());
        entries.truncate(MAX_ENTRIES);

        fs::create_dir_all(root)?;
        let json = serde_json::to_string(&entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(root.join(key.file_name()), json)
    }
}
