//! Generic operations over ordered, indexable sequences.
//!
//! This module is the core of the crate. It provides:
//!
//! - **Set algebra** ([`intersect`], [`union`], [`difference`]): all
//!   deduplicating, all order-stable relative to first occurrence.
//! - **Structural operations** ([`equal`], [`index_of`], [`contains`],
//!   [`delete`], [`replace`], [`clip`], [`filter`], [`unique`], [`split`]):
//!   linear scans, in-place range edits, chunked splitting.
//! - **Traversal and fold** ([`try_for_each`], [`reduce`]): short-circuiting
//!   visitation and an in-place accumulator fold.
//! - **Parallel map family** ([`map`], [`map_async`], [`map_async_bounded`],
//!   feature `async`): three execution strategies behind one black-box
//!   contract, `result[i] = transform(input[i], i)`.
//!
//! Everything here is stateless between calls: membership sets, work items,
//! and result slots live for exactly one call.
//!
//! # Element bounds
//!
//! Operations that compare by value require `E: PartialEq`; operations that
//! deduplicate additionally require `E: Eq + Hash` (membership is tracked in
//! a call-scoped `HashSet`) and `E: Clone` because they return new vectors
//! while borrowing their inputs.

mod fold;
mod ops;
mod parallel;
mod set;

pub use fold::{reduce, try_for_each};
pub use ops::{
    clip, contains, contains_by, delete, equal, equal_by, filter, index_by, index_of, replace,
    split, unique,
};
pub use parallel::map;
pub use set::{difference, intersect, union};

#[cfg(feature = "async")]
pub use parallel::{map_async, map_async_bounded};
