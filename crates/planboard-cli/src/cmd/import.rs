use anyhow::{bail, Result};
use planboard_core::paths;
use planboard_core::plan::Plan;
use planboard_core::store::{JsonFileStore, PlanStore};
use std::path::Path;

/// CLI counterpart of the bulk PUT: replace the whole collection with the
/// contents of a JSON file.
pub fn run(root: &Path, file: &Path) -> Result<()> {
    let data = std::fs::read(file)?;
    let value: serde_json::Value = serde_json::from_slice(&data)?;
    if !value.is_array() {
        bail!("import file must contain a JSON array of plans");
    }
    let plans: Vec<Plan> = serde_json::from_value(value)?;

    let store = JsonFileStore::open(paths::data_path(root))?;
    store.write_all(&plans)?;

    println!(
        "Imported {} plans into {}",
        plans.len(),
        store.path().display()
    );
    Ok(())
}
