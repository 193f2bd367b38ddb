use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// A single to-do/calendar record.
///
/// Clients send arbitrary fields (title, month, type, ...) which round-trip
/// untouched through the flattened map. `id` and `completed` are owned by the
/// server: assigned at creation, and only changed through [`Plan::merge`] and
/// [`Plan::toggle`]. The serde defaults let foreign records that lack either
/// field still load during bulk import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Plan {
    /// Build a new record from client-supplied fields with a fresh id and
    /// `completed = false`, whatever the client sent. Reserved keys are
    /// stripped from the map so serialization never emits duplicates.
    pub fn create(mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        fields.remove("completed");
        Self {
            id: generate_id(),
            completed: false,
            fields,
        }
    }

    /// Shallow merge: keys present in `patch` overwrite or insert, absent
    /// keys keep their prior values. `id` is never reassigned; `completed`
    /// only accepts a boolean replacement.
    pub fn merge(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            match key.as_str() {
                "id" => {}
                "completed" => {
                    if let Value::Bool(done) = value {
                        self.completed = *done;
                    }
                }
                _ => {
                    self.fields.insert(key.clone(), value.clone());
                }
            }
        }
    }

    /// Flip the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Display name for log lines; falls back to the id when the record has
    /// no string `title`.
    pub fn title(&self) -> &str {
        self.fields
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(&self.id)
    }
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

const ID_SUFFIX_LEN: usize = 9;
const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Millisecond Unix timestamp plus a 9-character random `[a-z0-9]` suffix.
/// A collision would need two creations in the same millisecond drawing the
/// same suffix.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let mut id = chrono::Utc::now().timestamp_millis().to_string();
    for _ in 0..ID_SUFFIX_LEN {
        id.push(ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char);
    }
    id
}
