use serde_json::Map;

use crate::errors::AppError;
use crate::ids::IdGenerator;
use crate::models::event::{self, Event};
use crate::models::user::{self, Role, User};
use crate::store::{self, KeyValueStore, keys};

pub const ADMIN_NAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@campus.com";
pub const ADMIN_PASSWORD: &str = "admin";

/// (title, description, date) of the events a fresh portal starts with.
pub const SAMPLE_EVENTS: [(&str, &str, &str); 3] = [
    ("AI Workshop", "Intro to ML and hands-on labs", "2025-11-10"),
    ("Hackathon", "24-hour coding sprint", "2025-12-05"),
    ("Tech Talk: Cloud", "Industry panel on cloud careers", "2025-11-20"),
];

/// Which collections `ensure_seed_data` filled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub events: bool,
    pub admin: bool,
}

/// Fill the event and user collections when they are empty. Collections that
/// already hold records are left alone, so repeated calls are no-ops.
pub fn ensure_seed_data(
    store: &mut impl KeyValueStore,
    ids: &mut impl IdGenerator,
) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    if store::read_records(store, keys::EVENTS).is_empty() {
        let sample: Vec<Event> = SAMPLE_EVENTS
            .iter()
            .map(|(title, description, date)| Event {
                id: ids.next_id(event::ID_PREFIX),
                ..Event::new(title, description, date)
            })
            .collect();
        store::write(store, keys::EVENTS, &sample)?;
        log::info!("Seeded {} sample events", sample.len());
        report.events = true;
    } else {
        log::info!("Events already present, skipping event seed");
    }

    if store::read_records(store, keys::USERS).is_empty() {
        let admin = User {
            id: ids.next_id(user::ID_PREFIX),
            name: ADMIN_NAME.to_string(),
            email: ADMIN_EMAIL.to_string(),
            role: Role::Admin,
            password: ADMIN_PASSWORD.to_string(),
            extra: Map::new(),
        };
        store::write(store, keys::USERS, &[admin])?;
        log::info!("Seeded admin account {ADMIN_EMAIL}");
        report.admin = true;
    } else {
        log::info!("Users already present, skipping admin seed");
    }

    Ok(report)
}
