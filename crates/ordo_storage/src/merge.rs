//! K-way merge of sorted runs.
//!
//! Each run must already be ascending under the merge comparator. Ties
//! across runs are yielded in run order, so earlier runs win when
//! deduplicating.

use crate::comparator::Comparator;
use std::cmp::Ordering;
use std::iter::Peekable;

/// Items that carry a merge key
pub trait MergeKey {
    /// Key bytes the comparator orders by
    fn merge_key(&self) -> &[u8];
}

impl MergeKey for Vec<u8> {
    fn merge_key(&self) -> &[u8] {
        self
    }
}

impl MergeKey for &[u8] {
    fn merge_key(&self) -> &[u8] {
        self
    }
}

impl MergeKey for [u8; 16] {
    fn merge_key(&self) -> &[u8] {
        self
    }
}

impl<V> MergeKey for (Vec<u8>, V) {
    fn merge_key(&self) -> &[u8] {
        &self.0
    }
}

impl<V> MergeKey for (&[u8], V) {
    fn merge_key(&self) -> &[u8] {
        self.0
    }
}

/// Merging iterator over sorted runs
pub struct MergeIter<I: Iterator, C> {
    runs: Vec<Peekable<I>>,
    comparator: C,
    dedup: bool,
    last_key: Option<Vec<u8>>,
}

impl<I, C> MergeIter<I, C>
where
    I: Iterator,
    I::Item: MergeKey,
    C: Comparator,
{
    /// Merge `runs` in ascending order
    pub fn new(runs: impl IntoIterator<Item = I>, comparator: C) -> Self {
        let runs: Vec<_> = runs.into_iter().map(Iterator::peekable).collect();
        tracing::trace!(runs = runs.len(), comparator = comparator.name(), "merge started");
        Self {
            runs,
            comparator,
            dedup: false,
            last_key: None,
        }
    }

    /// Drop items whose key equals the previously yielded key
    #[must_use]
    pub fn dedup(mut self) -> Self {
        self.dedup = true;
        self
    }

    fn next_run(&mut self) -> Option<usize> {
        let mut best: Option<(usize, &[u8])> = None;
        for (i, run) in self.runs.iter_mut().enumerate() {
            let Some(item) = run.peek() else {
                continue;
            };
            let key = item.merge_key();
            // Only a strictly smaller key displaces an earlier run
            match best {
                Some((_, best_key)) if self.comparator.compare(key, best_key) != Ordering::Less => {}
                _ => best = Some((i, key)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<I, C> Iterator for MergeIter<I, C>
where
    I: Iterator,
    I::Item: MergeKey,
    C: Comparator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let run = self.next_run()?;
            let item = self.runs[run].next()?;

            if self.dedup {
                let key = item.merge_key();
                if let Some(last) = &self.last_key {
                    if self.comparator.compare(last, key) == Ordering::Equal {
                        continue;
                    }
                }
                self.last_key = Some(key.to_vec());
            }
            return Some(item);
        }
    }
}
