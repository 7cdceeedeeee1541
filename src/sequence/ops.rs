//! Structural slice operations: comparison, search, range edits, filtering,
//! deduplication, and chunked splitting.
//!
//! Read-only operations never mutate their input. [`delete`] and [`replace`]
//! edit a `Vec` in place, reusing its backing storage, and preserve the
//! relative order of untouched elements.
//!
//! There is no dedicated clone operation: `Vec::clone` / `to_vec` already
//! perform the shallow copy, and Rust has no nil-versus-empty distinction to
//! preserve.

use std::collections::HashSet;
use std::hash::Hash;

// =============================================================================
// Comparison
// =============================================================================

/// Reports whether two slices are equal: the same length and all elements
/// equal.
///
/// If the lengths differ the answer is `false` without looking at any
/// element; otherwise elements are compared in increasing index order and the
/// comparison stops at the first unequal pair. Floating point NaNs are not
/// considered equal.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::equal;
///
/// assert!(equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!equal(&[1, 2], &[1, 2, 3]));
/// ```
#[must_use]
pub fn equal<E: PartialEq>(s1: &[E], s2: &[E]) -> bool {
    s1.len() == s2.len() && s1.iter().zip(s2).all(|(a, b)| a == b)
}

/// Reports whether two slices are equal under a caller-supplied comparison.
///
/// The element types may differ. As with [`equal`], a length mismatch is
/// `false` immediately and the scan stops at the first pair for which `eq`
/// returns `false`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::equal_by;
///
/// let numbers = [1, 2, 3];
/// let words = ["1", "2", "3"];
/// assert!(equal_by(&numbers, &words, |n, w| n.to_string() == *w));
/// ```
#[must_use]
pub fn equal_by<E1, E2, F>(s1: &[E1], s2: &[E2], mut eq: F) -> bool
where
    F: FnMut(&E1, &E2) -> bool,
{
    s1.len() == s2.len() && s1.iter().zip(s2).all(|(a, b)| eq(a, b))
}

// =============================================================================
// Search
// =============================================================================

/// Returns the index of the first occurrence of `v` in `s`, or `None` if it
/// is not present.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20, 30], &40), None);
/// ```
#[must_use]
pub fn index_of<E: PartialEq>(s: &[E], v: &E) -> Option<usize> {
    s.iter().position(|item| item == v)
}

/// Returns the first index `i` satisfying `pred(&s[i])`, or `None` if none
/// does.
#[must_use]
pub fn index_by<E, F>(s: &[E], pred: F) -> Option<usize>
where
    F: FnMut(&E) -> bool,
{
    s.iter().position(pred)
}

/// Reports whether `v` is present in `s`.
#[must_use]
pub fn contains<E: PartialEq>(s: &[E], v: &E) -> bool {
    index_of(s, v).is_some()
}

/// Reports whether at least one element of `s` satisfies `pred`.
#[must_use]
pub fn contains_by<E, F>(s: &[E], pred: F) -> bool
where
    F: FnMut(&E) -> bool,
{
    index_by(s, pred).is_some()
}

// =============================================================================
// Range Edits
// =============================================================================

/// Removes the elements `s[i..j]` in place.
///
/// Trailing elements are shifted left to close the gap, reusing the vector's
/// backing storage; the result length is `len - (j - i)`. Deleting many
/// ranges is cheaper as a single call than one element at a time.
///
/// # Panics
///
/// Panics if `i > j` or `j > s.len()` — an invalid range is a programmer
/// error and surfaces loudly rather than being clamped.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::delete;
///
/// let mut v = vec![1, 2, 3, 4, 5];
/// delete(&mut v, 1, 3);
/// assert_eq!(v, vec![1, 4, 5]);
/// ```
pub fn delete<E>(s: &mut Vec<E>, i: usize, j: usize) {
    s.drain(i..j);
}

/// Replaces the elements `s[i..j]` by the given replacement, in place.
///
/// The replacement may be shorter or longer than the removed range; the
/// result length is `i + replacement_len + (len - j)`. Spare capacity is
/// reused when available, trailing elements are preserved either way.
///
/// # Panics
///
/// Panics if `i > j` or `j > s.len()`, like [`delete`].
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::replace;
///
/// let mut v = vec![1, 2, 3, 4];
/// replace(&mut v, 1, 3, [9, 9, 9]);
/// assert_eq!(v, vec![1, 9, 9, 9, 4]);
/// ```
pub fn replace<E, I>(s: &mut Vec<E>, i: usize, j: usize, replacement: I)
where
    I: IntoIterator<Item = E>,
{
    s.splice(i..j, replacement);
}

/// Drops the spare capacity of `s`, so that `capacity == len`.
///
/// A no-op on an already right-sized vector.
pub fn clip<E>(s: &mut Vec<E>) {
    s.shrink_to_fit();
}

// =============================================================================
// Filtering and Deduplication
// =============================================================================

/// Returns the elements of `s` satisfying `pred`, in their original relative
/// order, sized exactly to the surviving count.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5], |v| v % 2 == 0), vec![2, 4]);
/// ```
#[must_use]
pub fn filter<E, F>(s: &[E], mut pred: F) -> Vec<E>
where
    E: Clone,
    F: FnMut(&E) -> bool,
{
    let mut result: Vec<E> = Vec::with_capacity(s.len());
    for item in s {
        if pred(item) {
            result.push(item.clone());
        }
    }
    result.shrink_to_fit();
    result
}

/// Returns the distinct values of `s`, keeping the first occurrence of each
/// and preserving first-occurrence order.
///
/// Idempotent: `unique(&unique(s)) == unique(s)`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::unique;
///
/// assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
#[must_use]
pub fn unique<E>(s: &[E]) -> Vec<E>
where
    E: Clone + Eq + Hash,
{
    let mut seen: HashSet<&E> = HashSet::with_capacity(s.len());
    let mut result: Vec<E> = Vec::with_capacity(s.len());
    for item in s {
        if seen.insert(item) {
            result.push(item.clone());
        }
    }
    result.shrink_to_fit();
    result
}

// =============================================================================
// Splitting
// =============================================================================

/// Splits `s` into consecutive chunks of at most `n` elements each.
///
/// The chunks borrow the input; concatenating them reproduces `s` exactly.
/// The last chunk may be shorter than `n`. Degenerate sizes degrade
/// gracefully: `n == 0` or `s.len() <= n` yields the whole slice as a single
/// chunk, and an empty input yields no chunks at all (not a single empty
/// chunk).
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::split;
///
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(split(&s, 2), vec![&s[0..2], &s[2..4], &s[4..5]]);
/// assert_eq!(split(&s, 0), vec![&s[..]]);
/// assert_eq!(split::<i32>(&[], 2), Vec::<&[i32]>::new());
/// ```
#[must_use]
pub fn split<E>(s: &[E], n: usize) -> Vec<&[E]> {
    if s.is_empty() {
        return Vec::new();
    }
    if n == 0 || s.len() <= n {
        return vec![s];
    }
    s.chunks(n).collect()
}
