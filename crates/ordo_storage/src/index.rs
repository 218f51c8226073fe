//! In-memory sorted index over UUID keys.
//!
//! Entries are kept in a vector sorted by the index comparator and located
//! by binary search. Keys that compare equal share one slot, so with key
//! validation disabled every key shorter than 16 bytes lands in the same
//! slot at the front of the index.

use crate::marshal::{ColumnType, UuidType};
use ordo_core::CoreError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Index configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Reject keys that are neither empty nor 16 bytes
    pub validate_keys: bool,
    /// Maximum number of entries (0 = unlimited)
    pub max_entries: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            validate_keys: true,
            max_entries: 0,
        }
    }
}

/// Index error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Key failed column validation
    #[error("Invalid key: {0}")]
    InvalidKey(#[from] CoreError),
    /// Index is full
    #[error("Index capacity exceeded (limit: {limit})")]
    CapacityExceeded {
        /// Configured limit
        limit: usize,
    },
}

/// Sorted map from UUID byte keys to values
#[derive(Debug, Clone)]
pub struct SortedIndex<V, C = UuidType> {
    config: IndexConfig,
    column: C,
    entries: Vec<(Vec<u8>, V)>,
}

impl<V> SortedIndex<V> {
    /// Create an index ordered by [`UuidType`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create with custom configuration
    #[must_use]
    pub fn with_config(config: IndexConfig) -> Self {
        Self::with_column(UuidType::INSTANCE, config)
    }
}

impl<V> Default for SortedIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: ColumnType> SortedIndex<V, C> {
    /// Create an index ordered and validated by `column`
    #[must_use]
    pub fn with_column(column: C, config: IndexConfig) -> Self {
        Self {
            config,
            column,
            entries: Vec::new(),
        }
    }

    /// Name of the ordering in use
    #[must_use]
    pub fn comparator_name(&self) -> &str {
        self.column.name()
    }

    /// Index configuration
    #[must_use]
    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Insert or replace. Returns the previous value for an equal key.
    ///
    /// # Errors
    ///
    /// Returns error if the key is invalid or the index is full
    pub fn insert(&mut self, key: &[u8], value: V) -> Result<Option<V>, IndexError> {
        if self.config.validate_keys {
            if let Err(err) = self.column.validate(key) {
                tracing::debug!(len = key.len(), %err, "rejecting index key");
                return Err(err.into());
            }
        }

        match self.search(key) {
            Ok(pos) => Ok(Some(std::mem::replace(&mut self.entries[pos].1, value))),
            Err(pos) => {
                let limit = self.config.max_entries;
                if limit > 0 && self.entries.len() >= limit {
                    tracing::warn!(limit, "index full");
                    return Err(IndexError::CapacityExceeded { limit });
                }
                self.entries.insert(pos, (key.to_vec(), value));
                Ok(None)
            }
        }
    }

    /// Value for a key
    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        self.search(key).ok().map(|pos| &self.entries[pos].1)
    }

    /// True if an equal key is present
    #[must_use]
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.search(key).is_ok()
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        let pos = self.search(key).ok()?;
        Some(self.entries.remove(pos).1)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest entry
    #[must_use]
    pub fn first(&self) -> Option<(&[u8], &V)> {
        self.entries.first().map(|(k, v)| (k.as_slice(), v))
    }

    /// Largest entry
    #[must_use]
    pub fn last(&self) -> Option<(&[u8], &V)> {
        self.entries.last().map(|(k, v)| (k.as_slice(), v))
    }

    /// Entries in ascending order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&[u8], &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v))
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &[u8]> + '_ {
        self.entries.iter().map(|(k, _)| k.as_slice())
    }

    /// Entries whose key is not less than `start`, ascending
    pub fn range_from<'a>(&'a self, start: &[u8]) -> impl Iterator<Item = (&'a [u8], &'a V)> + 'a {
        let pos = self
            .entries
            .partition_point(|(k, _)| self.column.compare(k, start) == Ordering::Less);
        self.entries[pos..].iter().map(|(k, v)| (k.as_slice(), v))
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn search(&self, key: &[u8]) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(k, _)| self.column.compare(k, key))
    }
}
