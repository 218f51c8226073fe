//! Timestamp ordering for version-1 UUIDs.
//!
//! A version-1 UUID stores its 60-bit timestamp as `time_low` (bytes 0..4),
//! `time_mid` (bytes 4..6) and `time_hi` (low nibble of byte 6 plus byte 7).
//! The stored layout puts the fastest-changing field first, so plain byte
//! order does not follow wall-clock order. The functions here read the
//! fields back most-significant first.

use crate::view::UUID_LEN;
use std::cmp::Ordering;
use uuid::Uuid;

/// 100ns intervals between 1582-10-15 and 1970-01-01
pub const GREGORIAN_OFFSET: u64 = 0x01B2_1DD2_1381_4000;

/// Largest representable 60-bit timestamp
pub const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

/// `(offset, mask)` pairs in chronological significance
const TIMESTAMP_FIELDS: [(usize, u8); 8] = [
    (6, 0x0F), // time_hi, high bits (version nibble masked off)
    (7, 0xFF), // time_hi, low bits
    (4, 0xFF), // time_mid
    (5, 0xFF),
    (0, 0xFF), // time_low
    (1, 0xFF),
    (2, 0xFF),
    (3, 0xFF),
];

/// Compare two version-1 regions by timestamp.
///
/// Only the timestamp bytes are read. Clock sequence and node are left to
/// the caller's tie-break.
#[must_use]
pub fn compare_timestamps(a: &[u8; UUID_LEN], b: &[u8; UUID_LEN]) -> Ordering {
    for (offset, mask) in TIMESTAMP_FIELDS {
        let ord = (a[offset] & mask).cmp(&(b[offset] & mask));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Reassemble the 60-bit timestamp of a version-1 region.
///
/// Counts 100ns intervals since 1582-10-15. The value is meaningless for
/// other versions but is still computed from the same bytes.
#[must_use]
pub fn timestamp_of(region: &[u8; UUID_LEN]) -> u64 {
    let time_hi = (u64::from(region[6] & 0x0F) << 8) | u64::from(region[7]);
    let time_mid = u64::from(u16::from_be_bytes([region[4], region[5]]));
    let time_low = u64::from(u32::from_be_bytes([region[0], region[1], region[2], region[3]]));
    (time_hi << 48) | (time_mid << 32) | time_low
}

/// Unix milliseconds for a version-1 region. Negative before 1970.
#[must_use]
pub fn unix_millis_of(region: &[u8; UUID_LEN]) -> i64 {
    // Both operands fit in 60 bits, so the i64 casts are lossless
    let since_epoch = timestamp_of(region) as i64 - GREGORIAN_OFFSET as i64;
    since_epoch.div_euclid(10_000)
}

/// Build a version-1 UUID from its parts.
///
/// Bits above 60 in `timestamp` and above 14 in `clock_seq` are dropped.
/// The RFC 4122 variant bits are set.
#[must_use]
pub const fn encode_time_based(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Uuid {
    let time_low = (timestamp & 0xFFFF_FFFF) as u32;
    let time_mid = ((timestamp >> 32) & 0xFFFF) as u16;
    let time_hi_and_version = (((timestamp >> 48) & 0x0FFF) as u16) | (1 << 12);

    let d4 = [
        (((clock_seq >> 8) & 0x3F) as u8) | 0x80,
        (clock_seq & 0xFF) as u8,
        node[0],
        node[1],
        node[2],
        node[3],
        node[4],
        node[5],
    ];

    Uuid::from_fields(time_low, time_mid, time_hi_and_version, &d4)
}
