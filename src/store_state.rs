//! Durable storage adapter backed by redb.
//!
//! One embedded database file per store, one table, string keys to JSON
//! strings. The adapter knows nothing about collection rules; it only reads,
//! writes and removes raw values, and composes the codec for typed access.

use std::path::Path;

use log::{info, warn};
use redb::{Database, ReadableTable, TableDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::app_response::AppResponse;
use crate::codec::{decode_collection, encode_collection};

/// Durable key for the saved-signals collection.
pub const KEY_SAVED_SIGNALS: &str = "savedSignals";
/// Durable key for the notes collection.
pub const KEY_NOTES: &str = "notes";
/// Durable key for the search-history collection.
pub const KEY_SEARCH_HISTORY: &str = "searchHistory";

const COLLECTIONS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("collections");

/// Handle to one open store. Created through [`AppStoreState::init`] and, at
/// the FFI boundary, owned by the embedder as an opaque pointer.
pub struct AppStoreState {
    db: Option<Database>,
    path: String,
}

impl AppStoreState {
    /// Opens (or creates) the store backing file `<name>.redb` and makes sure
    /// the collections table exists before the first read.
    pub fn init(name: String) -> Result<Self, AppResponse> {
        let path = format!("{name}.redb");
        let db = Database::create(&path)?;
        let txn = db.begin_write()?;
        txn.open_table(COLLECTIONS_TABLE)?;
        txn.commit()?;
        info!("Store opened at: {path}");
        Ok(Self { db: Some(db), path })
    }

    fn db(&self) -> Result<&Database, AppResponse> {
        self.db
            .as_ref()
            .ok_or_else(|| AppResponse::DatabaseError("Store is closed".to_string()))
    }

    /// Returns the raw stored value, or `None` if the key was never written.
    pub fn read(&self, key: &str) -> Result<Option<String>, AppResponse> {
        let txn = self.db()?.begin_read()?;
        let table = txn.open_table(COLLECTIONS_TABLE)?;
        let value = table.get(key)?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    /// Overwrites the value for `key`. The commit is synchronous; when this
    /// returns, the value is durable.
    pub fn write(&self, key: &str, value: &str) -> Result<(), AppResponse> {
        let txn = self.db()?.begin_write()?;
        {
            let mut table = txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Deletes `key`; removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), AppResponse> {
        let txn = self.db()?.begin_write()?;
        {
            let mut table = txn.open_table(COLLECTIONS_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Loads a typed collection. An absent key is an empty collection; a
    /// malformed stored value is discarded (with a warning) and also loads as
    /// empty, so a bad blob can never take a view down.
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppResponse> {
        let raw = self.read(key)?;
        match decode_collection(raw.as_deref()) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Discarding malformed collection under '{key}': {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Serializes and durably writes a typed collection under `key`.
    pub fn store_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppResponse> {
        let json = encode_collection(items)?;
        self.write(key, &json)
    }

    /// Removes every collection while keeping the store usable.
    pub fn clear_all_records(&self) -> Result<(), AppResponse> {
        for key in [KEY_SAVED_SIGNALS, KEY_NOTES, KEY_SEARCH_HISTORY] {
            self.remove(key)?;
        }
        info!("All collections cleared from {}", self.path);
        Ok(())
    }

    /// Closes the current database, deletes its file and re-creates the store
    /// under `name`.
    pub fn reset_store(&mut self, name: &str) -> Result<(), AppResponse> {
        // el archivo sólo se puede borrar con el handle cerrado
        self.db = None;
        if Path::new(&self.path).exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                AppResponse::DatabaseError(format!("Could not remove database file: {e}"))
            })?;
        }
        *self = AppStoreState::init(name.to_string())?;
        info!("Store '{name}' was reset");
        Ok(())
    }

    /// Drops the database handle. Further operations fail with a
    /// `DatabaseError` until the embedder creates a fresh store; calling
    /// close twice is a no-op.
    pub fn close_store(&mut self) -> Result<(), AppResponse> {
        if self.db.take().is_some() {
            info!("Store closed: {}", self.path);
        }
        Ok(())
    }
}
