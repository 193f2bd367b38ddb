use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

/// Flat-file backing store for the plan collection.
pub const DATA_FILE: &str = "data.json";
/// Flat-file backing store for annual goals.
pub const GOALS_FILE: &str = "goals.json";
/// Document served for `/`.
pub const DEFAULT_DOCUMENT: &str = "index.html";

pub const DEFAULT_PORT: u16 = 3000;

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn data_path(root: &Path) -> PathBuf {
    root.join(DATA_FILE)
}

pub fn goals_path(root: &Path) -> PathBuf {
    root.join(GOALS_FILE)
}
