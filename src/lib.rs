//! Campus event portal: accounts with student/faculty/admin roles, events,
//! registrations, feedback and attendance, all kept as JSON collections in a
//! local key-value store.
//!
//! Every operation takes the store (and, where records get ids, an
//! [`ids::IdGenerator`]) explicitly:
//!
//! | Operation | Function |
//! |---|---|
//! | seed | [`seed::ensure_seed_data`] |
//! | list upcoming events | [`models::event::list_upcoming`], [`render::upcoming_events`] |
//! | register user | [`models::user::register`] |
//! | login | [`models::user::login`] |
//! | navigate for role | [`nav::navigate_for_role`] |
//! | events for selection | [`render::event_options`] |
//! | register for event | [`models::registration::create`] |
//! | submit feedback | [`models::feedback::submit`] |
//! | registrations for event | [`models::registration::list_for_event`] |
//! | set attendance | [`models::attendance::set`] |
//! | create event | [`models::event::create`] |
//! | delete event | [`models::event::delete`] |
//! | raw storage read | [`store::read_raw`] |

pub mod config;
pub mod errors;
pub mod ids;
pub mod models;
pub mod nav;
pub mod render;
pub mod seed;
pub mod store;
pub mod validate;
