//! ORDO Core
//!
//! Total ordering over raw UUID byte values, for use as the sort predicate
//! of a UUID column in ordered storage structures.
//! This crate contains pure functions and types with no I/O and no state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod error;
pub mod timestamp;
pub mod value;
pub mod version;
pub mod view;

// Re-exports
pub use compare::{compare, compare_regions, compare_signum, compare_views, UuidComparator};
pub use error::{CoreError, CoreResult};
pub use timestamp::{compare_timestamps, encode_time_based, timestamp_of, unix_millis_of};
pub use value::{validate_length, UuidValue};
pub use version::{version_nibble, UuidVersion};
pub use view::{ByteView, UUID_LEN};
