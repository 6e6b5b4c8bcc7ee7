use crate::error::StoreError;
use std::path::PathBuf;

const DEFAULT_STORAGE_FILE: &str = ".artfolio_storage.json";
const DEFAULT_LOG_FILE: &str = ".artfolio.log";
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings, read from `ARTFOLIO_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: Option<PathBuf>,
    pub storage_file: String,
    pub log_file: String,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        let base_dir = std::env::var("ARTFOLIO_HOME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir);

        Self {
            base_dir,
            storage_file: env_or("ARTFOLIO_STORAGE_FILE", DEFAULT_STORAGE_FILE),
            log_file: env_or("ARTFOLIO_LOG_FILE", DEFAULT_LOG_FILE),
            log_filter: env_or("ARTFOLIO_LOG", DEFAULT_LOG_FILTER),
        }
    }

    pub fn storage_path(&self) -> Result<PathBuf, StoreError> {
        self.base_dir
            .as_ref()
            .map(|dir| dir.join(&self.storage_file))
            .ok_or(StoreError::NoHomeDirectory)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.base_dir.as_ref().map(|dir| dir.join(&self.log_file))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
