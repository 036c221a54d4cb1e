//! Persistent storage using redb.
//!
//! Holds the small amount of state the storefront remembers between runs:
//! dismissal records for the install prompt and promotional banners.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::dismissal::DismissalRecord;
use crate::error::StorefrontError;

/// Dismissal records (key: surface key, value: postcard-encoded DismissalRecord)
const DISMISSALS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("dismissals");

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and all tables if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DISMISSALS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Dismissal Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Save a dismissal record, replacing any previous one for `key`.
    pub fn save_dismissal(&self, key: &str, record: &DismissalRecord) -> Result<(), StorefrontError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(DISMISSALS_TABLE)?;
            let data = postcard::to_allocvec(record)
                .map_err(|e| StorefrontError::Serialization(e.to_string()))?;
            table.insert(key, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the dismissal record for `key`.
    ///
    /// Returns `None` if the surface was never dismissed.
    pub fn load_dismissal(&self, key: &str) -> Result<Option<DismissalRecord>, StorefrontError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(DISMISSALS_TABLE)?;

        match table.get(key)? {
            Some(v) => {
                let record = postcard::from_bytes(v.value())
                    .map_err(|e| StorefrontError::Serialization(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Load every stored dismissal with its key.
    pub fn list_dismissals(&self) -> Result<Vec<(String, DismissalRecord)>, StorefrontError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(DISMISSALS_TABLE)?;

        let mut records = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            let record = postcard::from_bytes(value.value())
                .map_err(|e| StorefrontError::Serialization(e.to_string()))?;
            records.push((key.value().to_string(), record));
        }
        Ok(records)
    }

    /// Forget the dismissal for `key`.
    pub fn clear_dismissal(&self, key: &str) -> Result<(), StorefrontError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(DISMISSALS_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Forget every stored dismissal, returning how many were removed.
    pub fn clear_all_dismissals(&self) -> Result<usize, StorefrontError> {
        let keys: Vec<String> = self.list_dismissals()?.into_iter().map(|(key, _)| key).collect();
        for key in &keys {
            self.clear_dismissal(key)?;
        }
        Ok(keys.len())
    }
}
