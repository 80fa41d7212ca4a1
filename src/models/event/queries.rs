use crate::errors::AppError;
use crate::ids::IdGenerator;
use crate::models::{attendance, registration};
use crate::store::{self, KeyValueStore, keys};
use crate::validate::{ensure, validate_required};

use super::types::{Event, ID_PREFIX};

/// All events in storage order. No date filter is applied.
pub fn list_upcoming(store: &impl KeyValueStore) -> Vec<Event> {
    store::read_collection(store, keys::EVENTS)
}

pub fn find_by_id(store: &impl KeyValueStore, id: &str) -> Option<Event> {
    list_upcoming(store).into_iter().find(|e| e.id == id)
}

/// Append an event. A blank id is replaced by a generated one; a caller
/// supplied id is kept as-is.
pub fn create(
    store: &mut impl KeyValueStore,
    ids: &mut impl IdGenerator,
    mut event: Event,
) -> Result<Event, AppError> {
    ensure([validate_required(&event.title, "Title")])?;

    if event.id.trim().is_empty() {
        event.id = ids.next_id(ID_PREFIX);
    }

    store::append(store, keys::EVENTS, &event)?;

    log::info!("Created event {} ({})", event.id, event.title);
    Ok(event)
}

/// Remove an event together with its registrations and attendance records.
/// Feedback for the event is kept.
pub fn delete(store: &mut impl KeyValueStore, event_id: &str) -> Result<(), AppError> {
    let removed = store::retain_records(store, keys::EVENTS, |e| {
        store::field(e, "id") != Some(event_id)
    })?;
    if removed == 0 {
        log::debug!("Delete of unknown event {event_id}");
    }

    let registrations = registration::delete_for_event(store, event_id)?;
    let marks = attendance::delete_for_event(store, event_id)?;

    log::info!(
        "Deleted event {event_id}: {registrations} registrations, {marks} attendance records"
    );
    Ok(())
}
