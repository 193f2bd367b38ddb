use crate::output::{print_json, print_table};
use anyhow::Result;
use planboard_core::paths;
use planboard_core::store::{JsonFileStore, PlanStore};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> Result<()> {
    let store = JsonFileStore::open(paths::data_path(root))?;
    let plans = store.read_all()?;

    if json {
        return print_json(&plans);
    }

    if plans.is_empty() {
        println!("No plans yet.");
        return Ok(());
    }

    let headers = &["ID", "DONE", "TITLE"];
    let rows: Vec<Vec<String>> = plans
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                if p.completed { "x" } else { "-" }.to_string(),
                p.title().to_string(),
            ]
        })
        .collect();
    print_table(headers, rows);
    Ok(())
}
