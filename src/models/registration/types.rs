use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A student's sign-up for an event. Form fields beyond the known ones are
/// kept in `extra` and stored alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub event_id: String,
    pub student_id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Registration {
    pub fn new(event_id: &str, student_id: &str, name: &str) -> Self {
        Self {
            event_id: event_id.to_string(),
            student_id: student_id.to_string(),
            name: name.to_string(),
            extra: Map::new(),
        }
    }
}
