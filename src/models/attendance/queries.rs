use serde_json::Value;

use crate::errors::AppError;
use crate::ids::IdGenerator;
use crate::store::{self, KeyValueStore, keys};

use super::types::{AttendanceRecord, ID_PREFIX};

pub fn find_all(store: &impl KeyValueStore) -> Vec<AttendanceRecord> {
    store::read_collection(store, keys::ATTENDANCE)
}

/// Record `status` for (event, student). An existing record for the pair is
/// updated in place; otherwise a new one is appended.
pub fn set(
    store: &mut impl KeyValueStore,
    ids: &mut impl IdGenerator,
    event_id: &str,
    student_id: &str,
    status: &str,
) -> Result<AttendanceRecord, AppError> {
    let mut records = store::read_records(store, keys::ATTENDANCE);

    let existing = records.iter_mut().find(|a| {
        store::field(a, "eventId") == Some(event_id)
            && store::field(a, "studentId") == Some(student_id)
    });
    let record = match existing {
        Some(existing) => {
            let id = store::field(existing, "id").unwrap_or_default().to_string();
            log::debug!("Attendance {id} for {student_id} -> {status}");
            existing["status"] = Value::from(status);
            AttendanceRecord {
                id,
                event_id: event_id.to_string(),
                student_id: student_id.to_string(),
                status: status.to_string(),
            }
        }
        None => {
            let record = AttendanceRecord {
                id: ids.next_id(ID_PREFIX),
                event_id: event_id.to_string(),
                student_id: student_id.to_string(),
                status: status.to_string(),
            };
            records.push(serde_json::to_value(&record)?);
            record
        }
    };

    store::write(store, keys::ATTENDANCE, &records)?;
    log::info!("Marked {student_id} {status} at event {event_id}");
    Ok(record)
}

pub fn list_for_event(store: &impl KeyValueStore, event_id: &str) -> Vec<AttendanceRecord> {
    find_all(store)
        .into_iter()
        .filter(|a| a.event_id == event_id)
        .collect()
}

/// Drop every attendance record for `event_id`, returning how many were
/// removed.
pub(crate) fn delete_for_event(
    store: &mut impl KeyValueStore,
    event_id: &str,
) -> Result<usize, AppError> {
    store::retain_records(store, keys::ATTENDANCE, |a| {
        store::field(a, "eventId") != Some(event_id)
    })
}
