//! Canonical stored UUID values.
//!
//! A stored value is either empty or exactly 16 bytes. Anything else is
//! rejected at construction, so a `UuidValue` can always be rendered as
//! text and always sorts with the UUID comparator.

use crate::compare::compare;
use crate::error::{CoreError, CoreResult};
use crate::version::UuidVersion;
use crate::view::UUID_LEN;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the hyphenated text form
pub const HYPHENATED_LEN: usize = 36;

const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Validate a stored length
///
/// # Errors
///
/// Returns [`CoreError::InvalidUuidLength`] unless `length` is 0 or 16
pub const fn validate_length(length: usize) -> CoreResult<()> {
    match length {
        0 | UUID_LEN => Ok(()),
        _ => Err(CoreError::invalid_length(length)),
    }
}

/// An empty or 16-byte UUID value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UuidValue(Option<[u8; UUID_LEN]>);

impl UuidValue {
    /// The empty value
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Wrap a UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(Some(*uuid.as_bytes()))
    }

    /// Create from stored bytes
    ///
    /// # Errors
    ///
    /// Returns error if `bytes` is neither empty nor 16 bytes long
    pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        validate_length(bytes.len())?;
        Ok(Self(bytes.try_into().ok()))
    }

    /// Parse canonical hyphenated text. The empty string is the empty value.
    ///
    /// # Errors
    ///
    /// Returns error for any other representation
    pub fn parse(s: &str) -> CoreResult<Self> {
        if s.is_empty() {
            return Ok(Self::empty());
        }

        let reject = |reason: &str| CoreError::InvalidUuidString {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        if s.len() != HYPHENATED_LEN {
            return Err(reject("expected 36 characters"));
        }
        for (i, c) in s.bytes().enumerate() {
            let ok = if HYPHEN_POSITIONS.contains(&i) {
                c == b'-'
            } else {
                c.is_ascii_hexdigit()
            };
            if !ok {
                return Err(reject("expected 8-4-4-4-12 hexadecimal groups"));
            }
        }

        let uuid = Uuid::try_parse(s).map_err(|e| reject(&e.to_string()))?;
        Ok(Self::from_uuid(uuid))
    }

    /// Stored bytes: empty or 16
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            Some(bytes) => bytes,
            None => &[],
        }
    }

    /// True for the empty value
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The UUID, unless empty
    #[must_use]
    pub fn to_uuid(&self) -> Option<Uuid> {
        self.0.map(Uuid::from_bytes)
    }

    /// Version, unless empty
    #[must_use]
    pub fn version(&self) -> Option<UuidVersion> {
        self.0.as_ref().map(UuidVersion::of)
    }
}

impl Ord for UuidValue {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.as_bytes(), other.as_bytes())
    }
}

impl PartialOrd for UuidValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UuidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_uuid() {
            Some(uuid) => write!(f, "{}", uuid.hyphenated()),
            None => Ok(()),
        }
    }
}

impl FromStr for UuidValue {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for UuidValue {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl TryFrom<&[u8]> for UuidValue {
    type Error = CoreError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl Serialize for UuidValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UuidValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::encode_time_based;

    const TEXT: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_validate_length() {
        assert!(validate_length(0).is_ok());
        assert!(validate_length(16).is_ok());
        assert_eq!(validate_length(15), Err(CoreError::invalid_length(15)));
        assert_eq!(validate_length(17), Err(CoreError::invalid_length(17)));
    }

    #[test]
    fn test_from_bytes() {
        let value = UuidValue::from_bytes(&[0xAB; 16]).unwrap();
        assert_eq!(value.as_bytes(), &[0xAB; 16]);
        assert!(!value.is_empty());

        let empty = UuidValue::from_bytes(&[]).unwrap();
        assert!(empty.is_empty());
        assert!(empty.as_bytes().is_empty());
        assert_eq!(empty, UuidValue::empty());

        assert!(matches!(
            UuidValue::from_bytes(&[0; 5]),
            Err(CoreError::InvalidUuidLength { length: 5 })
        ));
    }

    #[test]
    fn test_display() {
        let value = UuidValue::parse(TEXT).unwrap();
        assert_eq!(value.to_string(), TEXT);
        assert_eq!(UuidValue::empty().to_string(), "");
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let value = UuidValue::parse(&TEXT.to_uppercase()).unwrap();
        assert_eq!(value.to_string(), TEXT);
    }

    #[test]
    fn test_parse_rejects_other_forms() {
        for input in [
            "550e8400e29b41d4a716446655440000",
            "{550e8400-e29b-41d4-a716-446655440000}",
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000",
            "550e8400-e29b-41d4-a716-44665544000g",
            "550e8400-e29b41d4--a716-446655440000",
            " 550e8400-e29b-41d4-a716-44665544000",
        ] {
            assert!(
                matches!(UuidValue::parse(input), Err(CoreError::InvalidUuidString { .. })),
                "accepted {input}"
            );
        }
    }

    #[test]
    fn test_text_roundtrip() {
        let value = UuidValue::from_uuid(encode_time_based(123_456_789, 7, [9; 6]));
        let text = value.to_string();
        assert_eq!(UuidValue::parse(&text).unwrap(), value);
    }

    #[test]
    fn test_ordering_uses_comparator() {
        let early = UuidValue::from_uuid(encode_time_based(0x0000_0001_FF00_0000, 0, [0; 6]));
        let late = UuidValue::from_uuid(encode_time_based(0x0000_0002_0000_0000, 0, [0; 6]));
        assert!(UuidValue::empty() < early);
        assert!(early < late);
        assert!(early.as_bytes() > late.as_bytes());
    }

    #[test]
    fn test_version() {
        assert_eq!(UuidValue::empty().version(), None);
        assert_eq!(
            UuidValue::parse(TEXT).unwrap().version(),
            Some(UuidVersion::Random)
        );
    }

    #[test]
    fn test_serde_as_string() {
        let value = UuidValue::parse(TEXT).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"{}\"", TEXT));
        let back: UuidValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let empty: UuidValue = serde_json::from_str("\"\"").unwrap();
        assert!(empty.is_empty());
        assert!(serde_json::from_str::<UuidValue>("\"nope\"").is_err());
    }
}
