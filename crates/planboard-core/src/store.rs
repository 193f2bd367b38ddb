use crate::error::Result;
use crate::io;
use crate::plan::Plan;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// PlanStore
// ---------------------------------------------------------------------------

/// Whole-collection persistence. Implementations load and store the entire
/// plan list in one shot; callers own the read-modify-write cycle and its
/// serialization.
pub trait PlanStore: Send + Sync {
    fn read_all(&self) -> Result<Vec<Plan>>;
    fn write_all(&self, plans: &[Plan]) -> Result<()>;
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// Flat-file store: one pretty-printed JSON array per collection.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`, seeding an empty collection if the file is
    /// missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        io::write_if_missing(&path, b"[]")?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanStore for JsonFileStore {
    /// An unreadable or unparseable file degrades to an empty collection;
    /// the next write overwrites whatever was there. Callers cannot tell
    /// "no data" from "store unreadable".
    fn read_all(&self) -> Result<Vec<Plan>> {
        let Ok(data) = std::fs::read(&self.path) else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_slice(&data).unwrap_or_default())
    }

    fn write_all(&self, plans: &[Plan]) -> Result<()> {
        let data = serde_json::to_vec_pretty(plans)?;
        io::atomic_write(&self.path, &data)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store, used as a test double for the router and handlers.
#[derive(Default)]
pub struct MemoryStore {
    plans: Mutex<Vec<Plan>>,
}

impl PlanStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<Plan>> {
        Ok(self.plans.lock().expect("plan store lock poisoned").clone())
    }

    fn write_all(&self, plans: &[Plan]) -> Result<()> {
        *self.plans.lock().expect("plan store lock poisoned") = plans.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample(title: &str) -> Plan {
        let mut fields = serde_json::Map::new();
        fields.insert("title".into(), json!(title));
        Plan::create(fields)
    }

    #[test]
    fn open_seeds_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn open_leaves_existing_data_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"[{"id":"a1","completed":true,"title":"kept"}]"#).unwrap();
        let store = JsonFileStore::open(&path).unwrap();
        let plans = store.read_all().unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, "a1");
        assert!(plans[0].completed);
    }

    #[test]
    fn write_then_read_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("data.json")).unwrap();
        let plans = vec![sample("first"), sample("second"), sample("third")];
        store.write_all(&plans).unwrap();
        let loaded = store.read_all().unwrap();
        let titles: Vec<&str> = loaded.iter().map(|p| p.title()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn writes_are_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.write_all(&[sample("indented")]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {"), "expected 2-space indent: {content}");
    }

    #[test]
    fn garbage_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let store = JsonFileStore::open(&path).unwrap();
        std::fs::write(&path, b"not json at all {{{").unwrap();
        assert!(store.read_all().unwrap().is_empty());
        // A write recovers the file.
        store.write_all(&[sample("recovered")]).unwrap();
        assert_eq!(store.read_all().unwrap().len(), 1);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let store = JsonFileStore::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        assert!(store.read_all().unwrap().is_empty());
        store.write_all(&[sample("in memory")]).unwrap();
        assert_eq!(store.read_all().unwrap()[0].title(), "in memory");
    }
}
