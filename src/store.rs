use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::record::ProfileRecord;

// ── Profile Store (data/profiles.json) ──────────────────────────────────────
//
// The profiles document is one JSON object mapping username to profile
// record, rewritten wholesale on every save.  There is no locking and no
// atomic rename: two racing writers lose one update, which is accepted at
// this scale.  Loading never fails; a missing or unparsable file degrades to
// an empty document so the page can always render.

/// Where the profiles document lives, relative to the deployment root.
pub const DEFAULT_STORE_PATH: &str = "data/profiles.json";

/// Result of a load: the parsed records plus whether an unparsable file was
/// replaced with an empty document.  Callers surface `recovered` to the user
/// as a warning since the old content is gone on the next save.
#[derive(Debug, Default)]
pub struct LoadedProfiles {
    pub records: HashMap<String, ProfileRecord>,
    pub recovered: bool,
}

/// Storage capability for the profiles document.  The page controller only
/// sees this trait, so tests run against [`MemoryStore`] and production
/// binds a [`FileStore`].
pub trait ProfileStore {
    /// Reads the whole document.  Never fails: missing → empty, corrupt →
    /// empty with `recovered` set.
    fn load(&self) -> LoadedProfiles;

    /// Overwrites the whole document.  A failed write is fatal for the
    /// calling page operation.
    fn save(&self, records: &HashMap<String, ProfileRecord>) -> Result<(), String>;
}

// ── File-backed store ────────────────────────────────────────────────────────

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        Self::at(DEFAULT_STORE_PATH)
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        FileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for FileStore {
    fn load(&self) -> LoadedProfiles {
        if !self.path.exists() {
            return LoadedProfiles::default();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!(
                    "[hostbook] could not read {}: {}; starting empty",
                    self.path.display(),
                    e
                );
                return LoadedProfiles {
                    records: HashMap::new(),
                    recovered: true,
                };
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => LoadedProfiles {
                records,
                recovered: false,
            },
            Err(e) => {
                eprintln!(
                    "[hostbook] profile data in {} is corrupted or empty ({}); starting empty",
                    self.path.display(),
                    e
                );
                LoadedProfiles {
                    records: HashMap::new(),
                    recovered: true,
                }
            }
        }
    }

    fn save(&self, records: &HashMap<String, ProfileRecord>) -> Result<(), String> {
        let raw = serde_json::to_string_pretty(records).map_err(|e| e.to_string())?;
        fs::write(&self.path, raw)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }
}

// ── In-memory store ──────────────────────────────────────────────────────────

/// Test double holding the document in memory.  `poisoned` makes every save
/// fail, to exercise the fatal write path.
#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<String, ProfileRecord>>,
    corrupt: bool,
    poisoned: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: HashMap<String, ProfileRecord>) -> Self {
        MemoryStore {
            records: RefCell::new(records),
            corrupt: false,
            poisoned: false,
        }
    }

    /// Behaves like a store whose backing file failed to parse.
    pub fn corrupt() -> Self {
        MemoryStore {
            corrupt: true,
            ..Self::default()
        }
    }

    /// Behaves like a store whose backing file cannot be written.
    pub fn poisoned() -> Self {
        MemoryStore {
            poisoned: true,
            ..Self::default()
        }
    }

    pub fn record(&self, username: &str) -> Option<ProfileRecord> {
        self.records.borrow().get(username).cloned()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> LoadedProfiles {
        LoadedProfiles {
            records: self.records.borrow().clone(),
            recovered: self.corrupt,
        }
    }

    fn save(&self, records: &HashMap<String, ProfileRecord>) -> Result<(), String> {
        if self.poisoned {
            return Err("Failed to write profile data: storage unavailable".to_string());
        }
        *self.records.borrow_mut() = records.clone();
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
