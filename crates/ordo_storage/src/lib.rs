//! ORDO Storage
//!
//! The UUID column type and the ordered structures that sort by it.
//! Everything here orders keys through a [`Comparator`], so any column
//! type can drive an index or a merge.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparator;
pub mod config;
pub mod index;
pub mod marshal;
pub mod merge;

pub use comparator::{BytewiseComparator, Comparator};
pub use config::{ConfigError, OrdoConfig};
pub use index::{IndexConfig, IndexError, SortedIndex};
pub use marshal::{ColumnType, UuidType};
pub use merge::{MergeIter, MergeKey};
