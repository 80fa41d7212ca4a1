use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Feedback left for an event. The rating is kept as submitted, number or
/// text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feedback {
    pub event_id: String,
    pub student_id: String,
    pub rating: Value,
    pub comment: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
