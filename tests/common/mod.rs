//! Shared test infrastructure for the portal tests.
//!
//! - `setup_store()` - empty in-memory store with deterministic ids
//! - `setup_seeded_store()` - same, after the first-run seed
//! - `setup_file_store()` - file-backed store in a temp dir

#![allow(dead_code)]

use tempfile::TempDir;

use campus_portal::ids::SequentialIds;
use campus_portal::seed;
use campus_portal::store::{FileStore, MemoryStore};

pub const STUDENT_EMAIL: &str = "a@x.com";
pub const STUDENT_PASSWORD: &str = "p";

pub fn setup_store() -> (MemoryStore, SequentialIds) {
    (MemoryStore::new(), SequentialIds::new())
}

pub fn setup_seeded_store() -> (MemoryStore, SequentialIds) {
    let (mut store, mut ids) = setup_store();
    seed::ensure_seed_data(&mut store, &mut ids).expect("Failed to seed store");
    (store, ids)
}

/// Returns the TempDir alongside the store; it must outlive the store.
pub fn setup_file_store() -> (TempDir, FileStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path().join("portal.json")).expect("Failed to open store");
    (dir, store)
}
