use crate::error::Result;
use crate::io;
use serde_json::{Map, Value};
use std::path::Path;

/// Annual goals: one JSON object keyed by year (`"2025"` → free-form value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Goals(pub Map<String, Value>);

impl Goals {
    /// A missing or unreadable file degrades to an empty document, the same
    /// policy as the plan collection.
    pub fn load(path: &Path) -> Self {
        let Ok(data) = std::fs::read(path) else {
            return Self::default();
        };
        serde_json::from_slice::<Map<String, Value>>(&data)
            .map(Self)
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_vec_pretty(&self.0)?;
        io::atomic_write(path, &data)
    }

    /// Replace one year's entry wholesale.
    pub fn set_year(&mut self, year: impl Into<String>, value: Value) {
        self.0.insert(year.into(), value);
    }
}
