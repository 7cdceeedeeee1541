//! Short-circuiting traversal and in-place folding.

/// Applies `visitor` to each `(element, index)` pair in index order, stopping
/// at the first error.
///
/// The visitor's first error is returned verbatim and the remaining elements
/// are never visited. `Ok(())` means every element was visited exactly once.
///
/// # Errors
///
/// Propagates the first error returned by `visitor`, unchanged.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::try_for_each;
///
/// let mut seen = Vec::new();
/// let outcome: Result<(), &str> = try_for_each(&[10, 20, 30], |v, k| {
///     if k == 2 {
///         return Err("too far");
///     }
///     seen.push(*v);
///     Ok(())
/// });
/// assert_eq!(outcome, Err("too far"));
/// assert_eq!(seen, vec![10, 20]);
/// ```
pub fn try_for_each<E, Err, F>(s: &[E], mut visitor: F) -> Result<(), Err>
where
    F: FnMut(&E, usize) -> Result<(), Err>,
{
    for (index, item) in s.iter().enumerate() {
        visitor(item, index)?;
    }
    Ok(())
}

/// Folds the slice into an accumulator of an arbitrary type.
///
/// The accumulator starts at `Acc::default()` (its zero value) and `folder`
/// mutates it in place for each `(element, index)` pair, in index order. No
/// intermediate copies are made.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::reduce;
///
/// let total: i32 = reduce(&[1, 3, 5, 7, 9], |acc, v, _k| *acc += v);
/// assert_eq!(total, 25);
///
/// let squares: Vec<i32> = reduce(&[1, 2, 3], |acc: &mut Vec<i32>, v, _k| acc.push(v * v));
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
#[must_use]
pub fn reduce<E, Acc, F>(s: &[E], mut folder: F) -> Acc
where
    Acc: Default,
    F: FnMut(&mut Acc, &E, usize),
{
    let mut accumulator = Acc::default();
    for (index, item) in s.iter().enumerate() {
        folder(&mut accumulator, item, index);
    }
    accumulator
}
