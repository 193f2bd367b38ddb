use planboard_core::store::{JsonFileStore, PlanStore};
use planboard_core::{io, paths};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Static site root; the data files live directly under it.
    pub root: PathBuf,
    pub plans: Arc<dyn PlanStore>,
    /// Serializes read-modify-write cycles against the backing files so two
    /// concurrent mutations cannot drop each other's effect.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Open the flat-file store under `root`, seeding both backing files if
    /// absent.
    pub fn new(root: PathBuf) -> planboard_core::Result<Self> {
        let store = JsonFileStore::open(paths::data_path(&root))?;
        io::write_if_missing(&paths::goals_path(&root), b"{}")?;
        Ok(Self::with_store(root, Arc::new(store)))
    }

    /// Inject a custom store (tests use `MemoryStore`).
    pub fn with_store(root: PathBuf, plans: Arc<dyn PlanStore>) -> Self {
        Self {
            root,
            plans,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
