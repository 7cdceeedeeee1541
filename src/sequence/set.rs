//! Deduplicating set algebra over slices.
//!
//! All three operations compare by value equality, never emit a value twice,
//! and are order-stable: the output order is determined by where each
//! surviving value first appears in the scanned input(s). Membership is
//! tracked in call-scoped `HashSet`s that are discarded when the call
//! returns.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the deduplicated values present in **both** inputs.
///
/// The smaller input seeds a membership set and the larger one is scanned
/// once, so the output follows the scan order of the larger input (inputs of
/// equal length are scanned in `s2` order). Duplicates within either input
/// never produce duplicate output entries, and an empty input on either side
/// yields an empty output.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::intersect;
///
/// let a = vec![1, 2, 3, 5, 4, 5];
/// let b = vec![4, 5, 5, 6, 7, 8];
/// assert_eq!(intersect(&a, &b), vec![4, 5]);
/// ```
#[must_use]
pub fn intersect<E>(s1: &[E], s2: &[E]) -> Vec<E>
where
    E: Clone + Eq + Hash,
{
    if s1.is_empty() || s2.is_empty() {
        return Vec::new();
    }
    let (seed, scan) = if s1.len() > s2.len() { (s2, s1) } else { (s1, s2) };

    let members: HashSet<&E> = seed.iter().collect();
    let mut emitted: HashSet<&E> = HashSet::with_capacity(members.len());
    let mut result: Vec<E> = Vec::with_capacity(members.len());
    for item in scan {
        if members.contains(item) && emitted.insert(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Returns the deduplicated concatenation of the two inputs.
///
/// All distinct values of `s1` come first, in first-occurrence order,
/// followed by the values of `s2` not already emitted, in their
/// first-occurrence order.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::union;
///
/// let a = vec![1, 2, 3, 4, 4, 5];
/// let b = vec![4, 5, 5, 6, 7, 8];
/// assert_eq!(union(&a, &b), vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
#[must_use]
pub fn union<E>(s1: &[E], s2: &[E]) -> Vec<E>
where
    E: Clone + Eq + Hash,
{
    let mut emitted: HashSet<&E> = HashSet::with_capacity(s1.len() + s2.len());
    let mut result: Vec<E> = Vec::with_capacity(s1.len() + s2.len());
    for item in s1.iter().chain(s2) {
        if emitted.insert(item) {
            result.push(item.clone());
        }
    }
    result.shrink_to_fit();
    result
}

/// Returns the symmetric difference of the two inputs, deduplicated.
///
/// The output contains each value that appears in exactly one of the two
/// inputs — by set membership, not multiplicity — each value once. The
/// smaller input seeds a membership set and the deduplicated initial output;
/// the larger input is scanned once with a separate "already resolved" set so
/// duplicates are never reprocessed: a scanned value also present in the
/// membership set cancels out of the output, any other scanned value is
/// appended.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::difference;
///
/// let a = vec![1, 2, 3, 5, 4, 5];
/// let b = vec![4, 5, 5, 6, 7, 8];
/// assert_eq!(difference(&a, &b), vec![1, 2, 3, 6, 7, 8]);
/// ```
#[must_use]
pub fn difference<E>(s1: &[E], s2: &[E]) -> Vec<E>
where
    E: Clone + Eq + Hash,
{
    let (seed, scan) = if s1.len() > s2.len() { (s2, s1) } else { (s1, s2) };

    let mut members: HashSet<E> = HashSet::with_capacity(seed.len());
    let mut result: Vec<E> = Vec::with_capacity(seed.len() + scan.len());
    for item in seed {
        if members.insert(item.clone()) {
            result.push(item.clone());
        }
    }

    let mut resolved: HashSet<&E> = HashSet::with_capacity(scan.len());
    for item in scan {
        if !resolved.insert(item) {
            continue;
        }
        if members.contains(item) {
            // Present in both inputs: cancels out of the seeded output.
            if let Some(position) = result.iter().position(|existing| existing == item) {
                result.remove(position);
            }
        } else {
            result.push(item.clone());
        }
    }
    result.shrink_to_fit();
    result
}
