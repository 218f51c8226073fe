//! Column types: how stored bytes are validated, rendered and ordered.

use crate::comparator::Comparator;
use ordo_core::{compare, validate_length, CoreResult, UuidValue, UUID_LEN};
use std::cmp::Ordering;
use uuid::Uuid;

/// A column type, usable wherever a [`Comparator`] is expected
pub trait ColumnType: Comparator {
    /// Reject stored bytes that are not a valid value of this type
    ///
    /// # Errors
    ///
    /// Returns error if the bytes are malformed
    fn validate(&self, bytes: &[u8]) -> CoreResult<()>;

    /// Render stored bytes as text
    ///
    /// # Errors
    ///
    /// Returns error if the bytes are malformed
    fn get_string(&self, bytes: &[u8]) -> CoreResult<String>;

    /// Parse text into stored bytes
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a valid representation
    fn from_string(&self, s: &str) -> CoreResult<Vec<u8>>;
}

/// UUID column: empty or 16 bytes, ordered by version then timestamp then bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidType;

impl UuidType {
    /// Shared instance
    pub const INSTANCE: Self = Self;

    /// Read a UUID out of stored bytes. Fewer than 16 bytes read as nil;
    /// bytes past the first 16 are ignored.
    #[must_use]
    pub fn compose(&self, bytes: &[u8]) -> Uuid {
        bytes
            .get(..UUID_LEN)
            .and_then(|head| Uuid::from_slice(head).ok())
            .unwrap_or_else(Uuid::nil)
    }

    /// Stored bytes for a UUID
    #[must_use]
    pub fn decompose(&self, uuid: &Uuid) -> Vec<u8> {
        uuid.as_bytes().to_vec()
    }
}

impl Comparator for UuidType {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        compare(a, b)
    }

    fn name(&self) -> &str {
        "ordo.UuidType"
    }
}

impl ColumnType for UuidType {
    fn validate(&self, bytes: &[u8]) -> CoreResult<()> {
        validate_length(bytes.len())
    }

    fn get_string(&self, bytes: &[u8]) -> CoreResult<String> {
        Ok(UuidValue::from_bytes(bytes)?.to_string())
    }

    fn from_string(&self, s: &str) -> CoreResult<Vec<u8>> {
        Ok(UuidValue::parse(s)?.as_bytes().to_vec())
    }
}
