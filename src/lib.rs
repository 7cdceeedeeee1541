//! # seqkit
//!
//! A small utility library built around a generic sequence toolkit:
//! deduplicating set algebra, structural slice operations, short-circuiting
//! traversal, and an order-preserving, concurrency-bounded parallel map.
//! Around the core it carries a handful of everyday helpers: key/value string
//! parsing, line-oriented file reading, cancellation-aware stream copy and
//! timers, and time-range overlap checks.
//!
//! ## Overview
//!
//! - **Sequence toolkit** ([`sequence`]): `intersect` / `union` /
//!   `difference`, `equal`, `index_of`, `delete`, `replace`, `filter`,
//!   `unique`, `split`, `try_for_each`, `reduce`, and the `map` /
//!   `map_async` / `map_async_bounded` family. All three map variants
//!   produce `result[i] = transform(input[i], i)` in input order, no matter
//!   in which order the workers finish.
//! - **Text helpers** ([`text`]): separator-split key/value parsing.
//! - **File helpers** ([`files`]): line-oriented reading with a
//!   distinguishable end-of-input sentinel.
//! - **Task helpers** ([`task`]): cancellation-aware stream copy and one-shot
//!   / periodic timers driven by a `CancellationToken`.
//! - **Time ranges** ([`timespan`]): validated ranges with overlap and
//!   containment checks.
//!
//! ## Feature Flags
//!
//! - `async` *(default)*: the parallel map family and the [`task`] module
//!   (pulls in `tokio` and `tokio-util`).
//! - `timespan` *(default)*: the [`timespan`] module (pulls in `chrono`).
//! - `serde`: `Serialize` / `Deserialize` for [`timespan::TimeRange`].
//!
//! ## Example
//!
//! ```rust
//! use seqkit::sequence;
//!
//! let a = vec![1, 2, 3, 5, 4, 5];
//! let b = vec![4, 5, 5, 6, 7, 8];
//!
//! assert_eq!(sequence::intersect(&a, &b), vec![4, 5]);
//! assert_eq!(sequence::union(&a, &b), vec![1, 2, 3, 5, 4, 6, 7, 8]);
//! assert_eq!(sequence::difference(&a, &b), vec![1, 2, 3, 6, 7, 8]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the commonly used surface of the crate.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::files::{LineError, LineReader, ReadError, for_each_line};
    pub use crate::sequence::{
        clip, contains, contains_by, delete, difference, equal, equal_by, filter, index_by,
        index_of, intersect, map, reduce, replace, split, try_for_each, union, unique,
    };
    pub use crate::text::{parse_kv, parse_kv_with, parse_query};

    #[cfg(feature = "async")]
    pub use crate::sequence::{map_async, map_async_bounded};

    #[cfg(feature = "async")]
    pub use crate::task::{
        CopyError, TimerError, copy_with_cancel, run_once, run_periodic, run_periodic_after,
    };

    #[cfg(feature = "timespan")]
    pub use crate::timespan::{TimeRange, TimeRangeError};
}

pub mod files;
pub mod sequence;
pub mod text;

#[cfg(feature = "async")]
pub mod task;

#[cfg(feature = "timespan")]
pub mod timespan;
