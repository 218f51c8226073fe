//! Command-line operands.
//!
//! An operand is one of:
//! - canonical hyphenated UUID text
//! - `hex:<bytes>` for raw bytes of any length
//! - `-` or an empty string for the empty value

use ordo_core::{timestamp_of, unix_millis_of, ByteView, CoreError, UuidVersion};
use ordo_storage::{ColumnType, UuidType};
use serde::Serialize;
use thiserror::Error;

const HEX_PREFIX: &str = "hex:";

/// Operand parse error
#[derive(Debug, Error)]
pub enum OperandError {
    /// Bad `hex:` payload
    #[error("Invalid hex operand: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Bad UUID text
    #[error(transparent)]
    Uuid(#[from] CoreError),
}

/// Parse an operand into raw bytes
pub fn parse_operand(input: &str) -> Result<Vec<u8>, OperandError> {
    let input = input.trim();
    if input.is_empty() || input == "-" {
        return Ok(Vec::new());
    }
    if let Some(payload) = input.strip_prefix(HEX_PREFIX) {
        return Ok(hex::decode(payload)?);
    }
    Ok(UuidType::INSTANCE.from_string(input)?)
}

/// Render bytes as an operand that parses back to the same bytes
pub fn format_operand(bytes: &[u8]) -> String {
    match UuidType::INSTANCE.get_string(bytes) {
        Ok(text) if text.is_empty() => "-".to_string(),
        Ok(text) => text,
        Err(_) => format!("{}{}", HEX_PREFIX, hex::encode(bytes)),
    }
}

/// What the comparator sees in a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// Byte length
    pub length: usize,
    /// Whether the length is storable (0 or 16)
    pub valid: bool,
    /// Canonical operand form
    pub operand: String,
    /// Version of the leading 16 bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Raw version nibble
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_nibble: Option<u8>,
    /// 60-bit timestamp, version 1 only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Unix milliseconds, version 1 only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unix_millis: Option<i64>,
}

impl Inspection {
    /// Inspect raw bytes
    pub fn of(bytes: &[u8]) -> Self {
        let region = ByteView::new(bytes).region();
        let version = region.map(UuidVersion::of);
        let time_based = version.is_some_and(|v| v.is_time_based());

        Self {
            length: bytes.len(),
            valid: UuidType::INSTANCE.validate(bytes).is_ok(),
            operand: format_operand(bytes),
            version: version.map(|v| v.to_string()),
            version_nibble: version.map(|v| v.nibble()),
            timestamp: region.filter(|_| time_based).map(timestamp_of),
            unix_millis: region.filter(|_| time_based).map(unix_millis_of),
        }
    }
}
