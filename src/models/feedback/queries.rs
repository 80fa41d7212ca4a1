use crate::errors::AppError;
use crate::store::{self, KeyValueStore, keys};

use super::types::Feedback;

pub fn find_all(store: &impl KeyValueStore) -> Vec<Feedback> {
    store::read_collection(store, keys::FEEDBACK)
}

pub fn submit(store: &mut impl KeyValueStore, feedback: Feedback) -> Result<(), AppError> {
    log::info!("Feedback submitted for event {}", feedback.event_id);
    store::append(store, keys::FEEDBACK, &feedback)
}

/// Feedback survives deletion of its event, so this may return entries for
/// an event that no longer exists.
pub fn list_for_event(store: &impl KeyValueStore, event_id: &str) -> Vec<Feedback> {
    find_all(store)
        .into_iter()
        .filter(|f| f.event_id == event_id)
        .collect()
}
