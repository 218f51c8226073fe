//! UUID version nibble.
//!
//! The version lives in the high nibble of byte 6. Versions 0..=8 have
//! names; the rest are carried as raw nibbles.

use crate::view::UUID_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset of the byte carrying the version nibble
pub const VERSION_OFFSET: usize = 6;

/// Extract the version nibble from a 16-byte region
#[must_use]
pub const fn version_nibble(region: &[u8; UUID_LEN]) -> u8 {
    (region[VERSION_OFFSET] >> 4) & 0x0F
}

/// UUID version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UuidVersion {
    /// Nil UUID and anything else carrying nibble 0
    Nil,
    /// Gregorian time-based (version 1)
    TimeBased,
    /// DCE security (version 2)
    DceSecurity,
    /// Name-based MD5 (version 3)
    NameMd5,
    /// Random (version 4)
    Random,
    /// Name-based SHA-1 (version 5)
    NameSha1,
    /// Reordered time (version 6)
    SortableTime,
    /// Unix epoch time (version 7)
    UnixTime,
    /// Vendor-specific (version 8)
    Custom,
    /// Unassigned nibble 9..=15
    Unknown(u8),
}

impl UuidVersion {
    /// Map a nibble to a version. Only the low four bits are used.
    #[must_use]
    pub const fn from_nibble(nibble: u8) -> Self {
        match nibble & 0x0F {
            0 => Self::Nil,
            1 => Self::TimeBased,
            2 => Self::DceSecurity,
            3 => Self::NameMd5,
            4 => Self::Random,
            5 => Self::NameSha1,
            6 => Self::SortableTime,
            7 => Self::UnixTime,
            8 => Self::Custom,
            n => Self::Unknown(n),
        }
    }

    /// Read the version of a 16-byte region
    #[must_use]
    pub const fn of(region: &[u8; UUID_LEN]) -> Self {
        Self::from_nibble(version_nibble(region))
    }

    /// Raw nibble value
    #[must_use]
    pub const fn nibble(&self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::TimeBased => 1,
            Self::DceSecurity => 2,
            Self::NameMd5 => 3,
            Self::Random => 4,
            Self::NameSha1 => 5,
            Self::SortableTime => 6,
            Self::UnixTime => 7,
            Self::Custom => 8,
            Self::Unknown(n) => *n & 0x0F,
        }
    }

    /// Whether the comparator orders this version by timestamp
    #[must_use]
    pub const fn is_time_based(&self) -> bool {
        matches!(self, Self::TimeBased)
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::TimeBased => write!(f, "v1 (time)"),
            Self::DceSecurity => write!(f, "v2 (dce)"),
            Self::NameMd5 => write!(f, "v3 (md5)"),
            Self::Random => write!(f, "v4 (random)"),
            Self::NameSha1 => write!(f, "v5 (sha1)"),
            Self::SortableTime => write!(f, "v6 (sortable time)"),
            Self::UnixTime => write!(f, "v7 (unix time)"),
            Self::Custom => write!(f, "v8 (custom)"),
            Self::Unknown(n) => write!(f, "v{} (unknown)", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_with_byte6(b: u8) -> [u8; UUID_LEN] {
        let mut region = [0u8; UUID_LEN];
        region[VERSION_OFFSET] = b;
        region
    }

    #[test]
    fn test_version_nibble() {
        assert_eq!(version_nibble(&region_with_byte6(0x00)), 0);
        assert_eq!(version_nibble(&region_with_byte6(0x1F)), 1);
        assert_eq!(version_nibble(&region_with_byte6(0x4A)), 4);
        // High bit set must not sign-extend
        assert_eq!(version_nibble(&region_with_byte6(0xF0)), 15);
        assert_eq!(version_nibble(&region_with_byte6(0x80)), 8);
    }

    #[test]
    fn test_version_from_nibble_roundtrip() {
        for n in 0..16u8 {
            assert_eq!(UuidVersion::from_nibble(n).nibble(), n);
        }
        assert_eq!(UuidVersion::from_nibble(0x14), UuidVersion::Random);
    }

    #[test]
    fn test_version_of_uuid_crate_values() {
        let v4 = uuid::Uuid::from_u128(0x550e8400_e29b_41d4_a716_446655440000);
        assert_eq!(UuidVersion::of(v4.as_bytes()), UuidVersion::Random);
        assert_eq!(UuidVersion::of(uuid::Uuid::nil().as_bytes()), UuidVersion::Nil);
    }

    #[test]
    fn test_version_time_based() {
        assert!(UuidVersion::TimeBased.is_time_based());
        assert!(!UuidVersion::SortableTime.is_time_based());
        assert!(!UuidVersion::Unknown(12).is_time_based());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(format!("{}", UuidVersion::TimeBased), "v1 (time)");
        assert_eq!(format!("{}", UuidVersion::Unknown(11)), "v11 (unknown)");
    }
}
