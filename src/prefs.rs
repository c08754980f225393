//! Durable key-value preference store (a JSON object on disk)

use std::collections::HashMap;
use std::fs;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{Map, Value};

use crate::theme::Theme;

/// Key the theme is stored under
pub const THEME_KEY: &str = "theme";

#[derive(thiserror::Error, Debug)]
pub enum PrefsError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("preference file is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes to one file, in the order they were requested.
///
/// Every `set` takes a sequence number when it is called, not when it is
/// polled. A write that reaches the file after a newer one for the same key
/// is skipped, so an aborted or slow write never clobbers a later value.
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    issued: Arc<AtomicU64>,
    /// Last sequence number written per key
    written: Arc<Mutex<HashMap<String, u64>>>,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            issued: Arc::new(AtomicU64::new(0)),
            written: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// `<config dir>/weather-now/preferences.json`, or the working directory
    /// when the platform has no config dir.
    pub fn default_location() -> Self {
        let base = dirs_next::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("weather-now").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set `key` to `value`, keeping any other keys already in the file.
    /// A missing or unreadable file starts from an empty object.
    pub fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), PrefsError>> + Send + 'static {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let store = self.clone();
        let key = key.to_string();
        let value = value.to_string();
        async move {
            // Aborting the caller does not stop an already started write
            tokio::task::spawn_blocking(move || store.write_entry(seq, &key, &value))
                .await
                .map_err(|e| PrefsError::Io(io::Error::other(e)))?
        }
    }

    pub fn write_theme(
        &self,
        theme: Theme,
    ) -> impl Future<Output = Result<(), PrefsError>> + Send + 'static {
        self.set(THEME_KEY, theme.as_str())
    }

    fn write_entry(&self, seq: u64, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut written = self.written.lock().unwrap_or_else(PoisonError::into_inner);
        if written.get(key).is_some_and(|&last| last > seq) {
            log::debug!("skipping stale write of {key:?}");
            return Ok(());
        }

        let mut entries = match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str::<Map<String, Value>>(&json).unwrap_or_default(),
            Err(_) => Map::new(),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        written.insert(key.to_string(), seq);
        Ok(())
    }
}
