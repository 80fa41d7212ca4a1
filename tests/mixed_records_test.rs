//! Collections holding records that do not fit the current types: reads skip
//! them, writes keep them.

mod common;

use campus_portal::errors::AppError;
use campus_portal::models::attendance;
use campus_portal::models::event::{self, Event};
use campus_portal::models::feedback::{self, Feedback};
use campus_portal::models::registration::{self, Registration};
use campus_portal::models::user::{self, NewUser, Role};
use campus_portal::seed::{self, SeedReport};
use campus_portal::store::{self, keys};
use common::*;
use serde_json::{Map, Value, json};

fn stored(store: &impl store::KeyValueStore, key: &str) -> Vec<Value> {
    store::read_records(store, key)
}

fn new_student(email: &str) -> NewUser {
    NewUser {
        name: String::new(),
        email: email.to_string(),
        role: Role::Student,
        password: STUDENT_PASSWORD.to_string(),
        extra: Map::new(),
    }
}

#[test]
fn test_register_keeps_users_with_unknown_role() {
    let (mut store, mut ids) = setup_store();
    let admin = json!({
        "id": "u0", "name": "admin", "email": "admin@campus.com",
        "role": "admin", "password": "admin"
    });
    let guest = json!({
        "id": "ug", "name": "guest", "email": "guest@x.com",
        "role": "guest", "password": "g"
    });
    store::write(&mut store, keys::USERS, &[admin.clone(), guest.clone()]).unwrap();

    user::register(&mut store, &mut ids, new_student(STUDENT_EMAIL)).unwrap();

    let users = stored(&store, keys::USERS);
    assert_eq!(users.len(), 3);
    assert_eq!(users[0], admin);
    assert_eq!(users[1], guest);
    assert_eq!(users[2]["email"], STUDENT_EMAIL);

    // readable records still work
    assert!(user::login(&store, "admin@campus.com", "admin", Role::Admin).is_ok());
    assert_eq!(user::find_all(&store).len(), 2);
}

#[test]
fn test_register_rejects_email_of_unreadable_user() {
    let (mut store, mut ids) = setup_store();
    let guest = json!({"email": STUDENT_EMAIL, "role": "guest"});
    store::write(&mut store, keys::USERS, &[guest]).unwrap();

    let result = user::register(&mut store, &mut ids, new_student(STUDENT_EMAIL));
    assert!(matches!(result, Err(AppError::DuplicateEmail)));
    assert_eq!(stored(&store, keys::USERS).len(), 1);
}

#[test]
fn test_seed_skips_non_empty_users_with_odd_record() {
    let (mut store, mut ids) = setup_store();
    let users = json!([
        {"id": "u1", "email": "one@x.com", "role": "student", "password": "p"},
        {"email": "two@x.com", "role": "student", "password": "p"}
    ]);
    store::write(&mut store, keys::USERS, &users).unwrap();

    let report = seed::ensure_seed_data(&mut store, &mut ids).unwrap();

    assert_eq!(report, SeedReport { events: true, admin: false });
    assert_eq!(Value::Array(stored(&store, keys::USERS)), users);
}

#[test]
fn test_seed_skips_events_that_do_not_decode() {
    let (mut store, mut ids) = setup_store();
    store::write(&mut store, keys::EVENTS, &[json!({"id": 7, "title": "Legacy"})]).unwrap();

    let report = seed::ensure_seed_data(&mut store, &mut ids).unwrap();

    assert!(!report.events);
    assert_eq!(stored(&store, keys::EVENTS), vec![json!({"id": 7, "title": "Legacy"})]);
}

#[test]
fn test_submit_feedback_keeps_numeric_ratings() {
    let (mut store, _) = setup_store();
    let earlier = json!({"eventId": "e1", "rating": 5, "comment": "Great"});
    store::write(&mut store, keys::FEEDBACK, &[earlier.clone()]).unwrap();

    feedback::submit(
        &mut store,
        Feedback {
            event_id: "e2".to_string(),
            rating: json!("3"),
            ..Feedback::default()
        },
    )
    .unwrap();

    let entries = stored(&store, keys::FEEDBACK);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], earlier);
    assert_eq!(feedback::list_for_event(&store, "e1")[0].rating, json!(5));
}

#[test]
fn test_submit_feedback_keeps_record_of_other_shape() {
    let (mut store, _) = setup_store();
    let odd = json!({"eventId": "e1", "comment": {"text": "nested"}});
    store::write(&mut store, keys::FEEDBACK, &[odd.clone()]).unwrap();

    feedback::submit(
        &mut store,
        Feedback {
            event_id: "e2".to_string(),
            ..Feedback::default()
        },
    )
    .unwrap();

    let entries = stored(&store, keys::FEEDBACK);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], odd);
    assert!(feedback::list_for_event(&store, "e1").is_empty());
}

#[test]
fn test_register_for_event_keeps_odd_registration() {
    let (mut store, _) = setup_store();
    let odd = json!({"eventId": "e1", "studentId": 42});
    store::write(&mut store, keys::REGISTRATIONS, &[odd.clone()]).unwrap();

    registration::create(&mut store, Registration::new("e1", "s1", "Sam")).unwrap();

    let raw = stored(&store, keys::REGISTRATIONS);
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0], odd);
    assert_eq!(registration::list_for_event(&store, "e1").len(), 1);
}

#[test]
fn test_set_attendance_updates_record_missing_id() {
    let (mut store, mut ids) = setup_store();
    let other = json!({"id": "a9", "eventId": "e2", "studentId": "s1", "status": 1});
    let legacy = json!({"eventId": "e1", "studentId": "s1", "status": "absent"});
    store::write(&mut store, keys::ATTENDANCE, &[other.clone(), legacy]).unwrap();

    attendance::set(&mut store, &mut ids, "e1", "s1", "present").unwrap();

    let raw = stored(&store, keys::ATTENDANCE);
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0], other);
    assert_eq!(raw[1], json!({"eventId": "e1", "studentId": "s1", "status": "present"}));
}

#[test]
fn test_delete_event_cascades_over_odd_records() {
    let (mut store, mut ids) = setup_store();
    let doomed =
        event::create(&mut store, &mut ids, Event::new("Doomed", "", "2025-01-01")).unwrap();
    let odd_event = json!({"id": "e-odd", "title": 3});
    let mut events = stored(&store, keys::EVENTS);
    events.push(odd_event.clone());
    store::write(&mut store, keys::EVENTS, &events).unwrap();
    let registrations = [
        json!({"eventId": doomed.id, "studentId": 1}),
        json!({"eventId": "e-odd", "studentId": 2}),
    ];
    store::write(&mut store, keys::REGISTRATIONS, &registrations).unwrap();

    event::delete(&mut store, &doomed.id).unwrap();

    assert_eq!(stored(&store, keys::EVENTS), vec![odd_event]);
    assert_eq!(
        stored(&store, keys::REGISTRATIONS),
        vec![json!({"eventId": "e-odd", "studentId": 2})]
    );
}
