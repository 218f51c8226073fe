//! Pluggable key comparators for ordered structures.

use std::cmp::Ordering;

/// Orders raw keys in an index or merge
pub trait Comparator: Send + Sync {
    /// Three-way comparison of two keys
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering;

    /// Stable name, recorded alongside persisted orderings
    fn name(&self) -> &str;
}

/// Plain unsigned lexical order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BytewiseComparator;

impl Comparator for BytewiseComparator {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }

    fn name(&self) -> &str {
        "ordo.BytewiseComparator"
    }
}

impl<C: Comparator + ?Sized> Comparator for &C {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        (**self).compare(a, b)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Comparator + ?Sized> Comparator for std::sync::Arc<C> {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        (**self).compare(a, b)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_bytewise() {
        let cmp = BytewiseComparator;
        assert_eq!(cmp.compare(b"a", b"b"), Ordering::Less);
        assert_eq!(cmp.compare(&[0xFF], &[0x7F]), Ordering::Greater);
        assert_eq!(cmp.compare(b"", b""), Ordering::Equal);
        assert_eq!(cmp.name(), "ordo.BytewiseComparator");
    }

    #[test]
    fn test_shared_comparator() {
        let shared: Arc<dyn Comparator> = Arc::new(BytewiseComparator);
        assert_eq!(shared.compare(b"x", b"y"), Ordering::Less);
        assert_eq!(shared.name(), "ordo.BytewiseComparator");
    }
}
