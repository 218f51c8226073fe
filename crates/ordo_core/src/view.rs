//! Read-only byte views.
//!
//! A view is a window over a borrowed slice with a read position and a
//! declared limit. The limit is caller-supplied and is not clamped to the
//! backing slice, so `remaining()` may promise bytes the slice cannot
//! deliver. Every accessor is bounds-checked against the backing slice.

/// Number of bytes in a UUID
pub const UUID_LEN: usize = 16;

/// Read-only window over a byte slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
    position: usize,
    limit: usize,
}

impl<'a> ByteView<'a> {
    /// View the whole slice
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            position: 0,
            limit: bytes.len(),
        }
    }

    /// View with explicit position and limit
    #[must_use]
    pub const fn with_bounds(bytes: &'a [u8], position: usize, limit: usize) -> Self {
        Self {
            bytes,
            position,
            limit,
        }
    }

    /// Current read position
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Declared limit
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes between position and limit
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.position)
    }

    /// True when the backing slice has no byte at the read position
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Byte at `offset` past the read position
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<u8> {
        let index = self.position.checked_add(offset)?;
        self.bytes.get(index).copied()
    }

    /// The 16 bytes at the read position, if the backing slice holds them
    #[must_use]
    pub fn region(&self) -> Option<&'a [u8; UUID_LEN]> {
        let end = self.position.checked_add(UUID_LEN)?;
        self.bytes.get(self.position..end)?.try_into().ok()
    }

    /// Bytes between position and limit that the backing slice actually holds
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        let start = self.position.min(self.bytes.len());
        let end = self.limit.clamp(start, self.bytes.len());
        &self.bytes[start..end]
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a [u8; UUID_LEN]> for ByteView<'a> {
    fn from(bytes: &'a [u8; UUID_LEN]) -> Self {
        Self::new(bytes)
    }
}
