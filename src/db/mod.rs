//! Persistence for the playlist snapshot and player settings.
//!
//! The browser build keeps JSON strings in `localStorage`; native builds keep
//! the same JSON in a small SQLite key/value table.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::config::RadioConfig;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("browser storage error: {0}")]
    Browser(String),
}

/// Logical entries the player persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Playlist,
    Config,
}

impl StorageKey {
    pub fn browser_key(self) -> &'static str {
        match self {
            Self::Playlist => "tweetradio.playlist",
            Self::Config => "tweetradio.config",
        }
    }

    pub fn sqlite_key(self) -> &'static str {
        match self {
            Self::Playlist => "playlist_snapshot",
            Self::Config => "radio_config",
        }
    }
}

/// Serialized mirror of the working order and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub working_order: Vec<Item>,
    pub position: usize,
}

/// Raw string storage. A missing key is `Ok(None)`, not an error.
pub trait SettingsStore {
    fn read_raw(&self, key: StorageKey) -> Result<Option<String>, DbError>;
    fn write_raw(&self, key: StorageKey, value: &str) -> Result<(), DbError>;
}

pub fn read_json<T, S>(store: &S, key: StorageKey) -> Result<Option<T>, DbError>
where
    T: DeserializeOwned,
    S: SettingsStore + ?Sized,
{
    match store.read_raw(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T, S>(store: &S, key: StorageKey, value: &T) -> Result<(), DbError>
where
    T: Serialize,
    S: SettingsStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.write_raw(key, &raw)
}

pub fn load_snapshot<S: SettingsStore + ?Sized>(
    store: &S,
) -> Result<Option<PersistedSnapshot>, DbError> {
    read_json(store, StorageKey::Playlist)
}

pub fn save_snapshot<S: SettingsStore + ?Sized>(
    store: &S,
    snapshot: &PersistedSnapshot,
) -> Result<(), DbError> {
    write_json(store, StorageKey::Playlist, snapshot)
}

/// Stored settings, falling back to defaults when absent or unreadable.
pub fn load_config<S: SettingsStore + ?Sized>(store: &S) -> RadioConfig {
    match read_json(store, StorageKey::Config) {
        Ok(Some(config)) => config,
        Ok(None) => RadioConfig::default(),
        Err(err) => {
            tracing::warn!("ignoring stored config: {err}");
            RadioConfig::default()
        }
    }
}

/// Stand-in when the platform store cannot be opened. Nothing is kept
/// between sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedStore;

impl SettingsStore for DetachedStore {
    fn read_raw(&self, _key: StorageKey) -> Result<Option<String>, DbError> {
        Ok(None)
    }

    fn write_raw(&self, _key: StorageKey, _value: &str) -> Result<(), DbError> {
        Ok(())
    }
}

// Browser storage

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl SettingsStore for BrowserStore {
    fn read_raw(&self, key: StorageKey) -> Result<Option<String>, DbError> {
        LocalStorage::raw()
            .get_item(key.browser_key())
            .map_err(|err| DbError::Browser(format!("{err:?}")))
    }

    fn write_raw(&self, key: StorageKey, value: &str) -> Result<(), DbError> {
        LocalStorage::raw()
            .set_item(key.browser_key(), value)
            .map_err(|err| DbError::Browser(format!("{err:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = BrowserStore;

#[cfg(target_arch = "wasm32")]
pub fn open_store() -> Result<PlatformStore, DbError> {
    Ok(BrowserStore)
}

// Native storage

#[cfg(not(target_arch = "wasm32"))]
pub struct SqliteStore {
    conn: rusqlite::Connection,
}

#[cfg(not(target_arch = "wasm32"))]
impl SqliteStore {
    pub fn open(path: &std::path::Path) -> Result<Self, DbError> {
        Self::initialize(rusqlite::Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::initialize(rusqlite::Connection::open_in_memory()?)
    }

    fn initialize(conn: rusqlite::Connection) -> Result<Self, DbError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SettingsStore for SqliteStore {
    fn read_raw(&self, key: StorageKey) -> Result<Option<String>, DbError> {
        use rusqlite::OptionalExtension;

        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key.sqlite_key()],
                |row: &rusqlite::Row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_raw(&self, key: StorageKey, value: &str) -> Result<(), DbError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            [key.sqlite_key(), value],
        )?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = SqliteStore;

#[cfg(not(target_arch = "wasm32"))]
pub fn open_store() -> Result<PlatformStore, DbError> {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("tweet-radio");
    std::fs::create_dir_all(&data_dir)?;
    SqliteStore::open(&data_dir.join("tweet-radio.db"))
}


#[cfg(test)]
mod tests {
    use super::test_support::MemoryStore;
    use super::*;
    use crate::playlist::test_support::items;
    use crate::playlist::EntryPoint;

    #[test]
    fn snapshot_uses_camel_case_wire_format() {
        let snapshot = PersistedSnapshot {
            working_order: items(&["A"]),
            position: 0,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("workingOrder").is_some());
        assert_eq!(json["position"], 0);
        assert_eq!(json["workingOrder"][0]["youtubeMetadata"]["id"], "A");
    }

    #[test]
    fn missing_snapshot_is_none() {
        let store = MemoryStore::default();
        assert!(load_snapshot(&store).unwrap().is_none());
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let store = MemoryStore::with_raw(StorageKey::Playlist, "{\"workingOrder\": 3}");
        assert!(matches!(load_snapshot(&store), Err(DbError::Serde(_))));
    }

    #[test]
    fn config_falls_back_to_defaults() {
        let store = MemoryStore::with_raw(StorageKey::Config, "not json");
        assert_eq!(load_config(&store), RadioConfig::default());

        let store = MemoryStore::default();
        let config = RadioConfig {
            entry_point: EntryPoint::Random,
            ..RadioConfig::default()
        };
        write_json(&store, StorageKey::Config, &config).unwrap();
        assert_eq!(load_config(&store), config);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn sqlite_store_round_trips_snapshot() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(load_snapshot(&store).unwrap().is_none());

        let snapshot = PersistedSnapshot {
            working_order: items(&["B", "C"]),
            position: 1,
        };
        save_snapshot(&store, &snapshot).unwrap();
        assert_eq!(load_snapshot(&store).unwrap(), Some(snapshot.clone()));

        let moved = PersistedSnapshot {
            position: 0,
            ..snapshot
        };
        save_snapshot(&store, &moved).unwrap();
        assert_eq!(load_snapshot(&store).unwrap(), Some(moved));
    }

    #[test]
    fn detached_store_forgets_everything() {
        let store = DetachedStore;
        let snapshot = PersistedSnapshot {
            working_order: items(&["A"]),
            position: 0,
        };
        save_snapshot(&store, &snapshot).unwrap();
        assert!(load_snapshot(&store).unwrap().is_none());
    }
}
