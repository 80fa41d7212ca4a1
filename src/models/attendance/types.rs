use serde::{Deserialize, Serialize};

/// Prefix of generated attendance record ids.
pub const ID_PREFIX: &str = "a";

/// One student's attendance at one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub event_id: String,
    pub student_id: String,
    pub status: String,
}
