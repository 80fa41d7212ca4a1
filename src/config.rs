use std::env;
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "data/portal.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    /// Read settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Self {
        // .env is optional
        let _ = dotenvy::dotenv();
        let store_path = env::var("CAMPUS_PORTAL_STORE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));
        Self { store_path }
    }
}
