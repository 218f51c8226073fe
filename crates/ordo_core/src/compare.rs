//! The UUID comparator.
//!
//! Orders raw UUID byte values as follows:
//! - values with fewer than 16 bytes sort first, all equal to each other
//! - then by version nibble, lower first
//! - two version-1 values by timestamp
//! - finally by unsigned lexical order of the 16 bytes
//!
//! The ordering is total over every input, including absent values and
//! views whose declared window disagrees with their backing slice.

use crate::timestamp::compare_timestamps;
use crate::version::version_nibble;
use crate::view::{ByteView, UUID_LEN};
use std::cmp::Ordering;

/// Compare two optional views. `None` is an absent value.
#[must_use]
pub fn compare_views(a: Option<ByteView<'_>>, b: Option<ByteView<'_>>) -> Ordering {
    let (a, b) = match (a.filter(holds_uuid), b.filter(holds_uuid)) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(a), Some(b)) => (a, b),
    };

    // Both windows claim 16 bytes; the backing slices may still disagree.
    match (a.is_exhausted(), b.is_exhausted()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    match (a.region(), b.region()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_regions(a, b),
    }
}

/// Compare two 16-byte regions
#[must_use]
pub fn compare_regions(a: &[u8; UUID_LEN], b: &[u8; UUID_LEN]) -> Ordering {
    let (va, vb) = (version_nibble(a), version_nibble(b));
    if va != vb {
        return va.cmp(&vb);
    }

    if va == 1 {
        let ord = compare_timestamps(a, b);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a.cmp(b)
}

/// Compare two byte slices as UUID values
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    compare_views(Some(ByteView::new(a)), Some(ByteView::new(b)))
}

/// Three-way result as -1, 0 or 1
#[must_use]
pub fn compare_signum(a: &[u8], b: &[u8]) -> i32 {
    compare(a, b) as i32
}

fn holds_uuid(view: &ByteView<'_>) -> bool {
    view.remaining() >= UUID_LEN
}

/// Stateless comparator for UUID byte values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UuidComparator;

impl UuidComparator {
    /// Create a comparator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compare two byte slices
    #[must_use]
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        compare(a, b)
    }

    /// Compare two optional views
    #[must_use]
    pub fn compare_views(&self, a: Option<ByteView<'_>>, b: Option<ByteView<'_>>) -> Ordering {
        compare_views(a, b)
    }

    /// Sort values in place, ascending
    pub fn sort<T: AsRef<[u8]>>(&self, values: &mut [T]) {
        values.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
    }
}
