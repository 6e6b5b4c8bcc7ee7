use super::*;
use std::path::Path;

struct EnvVarGuard {
    key: String,
    original: Option<String>,
}

impl EnvVarGuard {
    fn set(key: &str, value: &str) -> Self {
        let original = std::env::var(key).ok();
        std::env::set_var(key, value);
        EnvVarGuard {
            key: key.to_owned(),
            original,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(val) => std::env::set_var(&self.key, val),
            None => std::env::remove_var(&self.key),
        }
    }
}

// All env-driven assertions live in one test so parallel tests never race
// on the same variables.
#[test]
fn from_env_honours_overrides_and_blank_values() {
    let _home = EnvVarGuard::set("ARTFOLIO_HOME", "/tmp/artfolio-test-home");
    let _file = EnvVarGuard::set("ARTFOLIO_STORAGE_FILE", "store.json");
    let _log = EnvVarGuard::set("ARTFOLIO_LOG_FILE", "   ");
    let _filter = EnvVarGuard::set("ARTFOLIO_LOG", "debug");

    let config = Config::from_env();

    assert_eq!(config.base_dir.as_deref(), Some(Path::new("/tmp/artfolio-test-home")));
    assert_eq!(
        config.storage_path().unwrap(),
        Path::new("/tmp/artfolio-test-home/store.json")
    );
    assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn storage_path_without_base_dir_is_an_error() {
    let config = Config {
        base_dir: None,
        storage_file: DEFAULT_STORAGE_FILE.to_string(),
        log_file: DEFAULT_LOG_FILE.to_string(),
        log_filter: DEFAULT_LOG_FILTER.to_string(),
    };

    assert!(matches!(config.storage_path(), Err(StoreError::NoHomeDirectory)));
    assert!(config.log_path().is_none());
}
