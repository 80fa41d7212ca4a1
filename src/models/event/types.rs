use serde::{Deserialize, Serialize};

/// Prefix of generated event ids.
pub const ID_PREFIX: &str = "e";

/// A campus event. The description is stored under `desc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub date: String,
}

impl Event {
    /// An event without an id; `create` assigns one.
    pub fn new(title: &str, description: &str, date: &str) -> Self {
        Self {
            id: String::new(),
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
        }
    }
}
