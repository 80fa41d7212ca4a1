//! Key-value string storage and the JSON collections kept in it.
//!
//! Every collection lives under a fixed key as a JSON array. Reads never fail:
//! a missing, `null` or corrupted value yields the caller's default.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::errors::AppError;

/// Storage keys for the five portal collections.
pub mod keys {
    pub const EVENTS: &str = "cp_events";
    pub const USERS: &str = "cp_users";
    pub const REGISTRATIONS: &str = "cp_regs";
    pub const FEEDBACK: &str = "cp_feedback";
    pub const ATTENDANCE: &str = "cp_attendance";
}

/// A string-to-string store with local-storage semantics: no locking, last
/// writer wins.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String) -> Result<(), AppError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), AppError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store persisted as one JSON object (key -> string) on disk. The whole file
/// is rewritten on every `set_item`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; a file that
    /// does not parse is discarded with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Store file {} is corrupt, starting empty: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        log::debug!("Opened store {} ({} keys)", path.display(), items.len());
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), AppError> {
        self.items.insert(key.to_string(), value);
        self.flush()
    }
}

/// Read and deserialize the value under `key`, falling back to `default` when
/// it is absent, `null` or does not parse.
pub fn read<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str, default: T) -> T {
    let Some(raw) = store.get_item(key) else {
        return default;
    };
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            log::warn!("Ignoring unreadable value under '{key}': {e}");
            default
        }
    }
}

/// Serialize `value` and store it under `key`.
pub fn write<T: Serialize + ?Sized>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let json = serde_json::to_string(value)?;
    store.set_item(key, json)
}

/// The raw records of a collection. A value that is not a JSON array reads as
/// empty; records inside the array are returned whatever their shape.
pub fn read_records(store: &impl KeyValueStore, key: &str) -> Vec<Value> {
    read(store, key, Vec::new())
}

/// Decode a collection record by record. Records that do not fit `T` are
/// skipped with a warning and stay untouched in the store.
pub fn read_collection<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Vec<T> {
    read_records(store, key)
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("Skipping record {index} under '{key}': {e}");
                None
            }
        })
        .collect()
}

/// Append one record, keeping every stored record as it was.
pub fn append<T: Serialize>(
    store: &mut impl KeyValueStore,
    key: &str,
    record: &T,
) -> Result<(), AppError> {
    let mut records = read_records(store, key);
    records.push(serde_json::to_value(record)?);
    write(store, key, &records)
}

/// Keep only the raw records for which `keep` holds, returning how many were
/// removed.
pub fn retain_records(
    store: &mut impl KeyValueStore,
    key: &str,
    keep: impl FnMut(&Value) -> bool,
) -> Result<usize, AppError> {
    let mut records = read_records(store, key);
    let before = records.len();
    records.retain(keep);
    write(store, key, &records)?;
    Ok(before - records.len())
}

/// String field of a raw record, if present.
pub fn field<'a>(record: &'a Value, name: &str) -> Option<&'a str> {
    record.get(name).and_then(Value::as_str)
}

/// Untyped access to whatever is stored under `key`.
pub fn read_raw(store: &impl KeyValueStore, key: &str) -> Option<Value> {
    match read(store, key, Value::Null) {
        Value::Null => None,
        value => Some(value),
    }
}
