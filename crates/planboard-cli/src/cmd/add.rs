use crate::output::print_json;
use anyhow::Result;
use planboard_core::paths;
use planboard_core::plan::Plan;
use planboard_core::store::{JsonFileStore, PlanStore};
use std::path::Path;

pub fn run(root: &Path, title: &str, json: bool) -> Result<()> {
    let store = JsonFileStore::open(paths::data_path(root))?;
    let mut plans = store.read_all()?;

    let mut fields = serde_json::Map::new();
    fields.insert("title".into(), serde_json::Value::String(title.to_string()));
    let plan = Plan::create(fields);

    plans.push(plan.clone());
    store.write_all(&plans)?;

    if json {
        print_json(&plan)?;
    } else {
        println!("Added '{}' ({})", plan.title(), plan.id);
    }
    Ok(())
}
