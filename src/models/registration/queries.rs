use crate::errors::AppError;
use crate::store::{self, KeyValueStore, keys};

use super::types::Registration;

pub fn find_all(store: &impl KeyValueStore) -> Vec<Registration> {
    store::read_collection(store, keys::REGISTRATIONS)
}

/// Append a registration. Repeat sign-ups are not detected.
pub fn create(store: &mut impl KeyValueStore, registration: Registration) -> Result<(), AppError> {
    log::info!(
        "Student {} registered for event {}",
        registration.student_id,
        registration.event_id
    );
    store::append(store, keys::REGISTRATIONS, &registration)
}

pub fn list_for_event(store: &impl KeyValueStore, event_id: &str) -> Vec<Registration> {
    find_all(store)
        .into_iter()
        .filter(|r| r.event_id == event_id)
        .collect()
}

/// Drop every registration for `event_id`, returning how many were removed.
pub(crate) fn delete_for_event(
    store: &mut impl KeyValueStore,
    event_id: &str,
) -> Result<usize, AppError> {
    store::retain_records(store, keys::REGISTRATIONS, |r| {
        store::field(r, "eventId") != Some(event_id)
    })
}
