use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::types::{AppSettings, Order};

pub const SCHEMA_VERSION: u32 = 1;

const SETTINGS_KEY: &str = "settings";
const ORDERS_KEY: &str = "orders";
const VERSION_KEY: &str = "schema_version";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no usable data directory on this platform")]
    NoDataDir,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable key-value storage for the two application blobs (settings and
/// orders), each a JSON string written synchronously on every mutation.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Store { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open the per-installation store under the platform data directory,
    /// creating it on first run.
    pub fn open_default() -> StoreResult<Self> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Self::open(&dir.join("mochi.sqlite"))
    }

    fn data_dir() -> StoreResult<PathBuf> {
        dirs::data_dir()
            .map(|d| d.join("mochi-madadgar"))
            .ok_or(StoreError::NoDataDir)
    }

    fn init_schema(&self) -> StoreResult<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        // Stamp the layout version once; nothing migrates yet, the tag is
        // there so a future layout change can.
        if self.get(VERSION_KEY)?.is_none() {
            self.put(VERSION_KEY, &SCHEMA_VERSION.to_string())?;
        }
        Ok(())
    }

    pub fn schema_version(&self) -> StoreResult<Option<u32>> {
        Ok(self.get(VERSION_KEY)?.and_then(|v| v.parse().ok()))
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;

        if let Some(row) = rows.next()? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    fn save_blob<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.put(key, &json)
    }

    /// Read back a blob. Absent and unparseable values both come back as
    /// `None` so the caller falls back to defaults; corruption is logged
    /// but never surfaced.
    fn load_blob<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value");
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored value is corrupt, falling back to defaults");
                None
            }
        }
    }

    pub fn save_settings(&self, settings: &AppSettings) -> StoreResult<()> {
        self.save_blob(SETTINGS_KEY, settings)
    }

    pub fn load_settings(&self) -> Option<AppSettings> {
        self.load_blob(SETTINGS_KEY)
    }

    pub fn save_orders(&self, orders: &[Order]) -> StoreResult<()> {
        self.save_blob(ORDERS_KEY, &orders)
    }

    pub fn load_orders(&self) -> Option<Vec<Order>> {
        self.load_blob(ORDERS_KEY)
    }

    /// Overwrite a key with raw text. Test hook for simulating corrupt
    /// blobs; not used by the application itself.
    #[doc(hidden)]
    pub fn put_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        self.put(key, value)
    }
}
