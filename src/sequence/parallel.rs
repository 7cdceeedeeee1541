//! The parallel map family: one black-box contract, three execution
//! strategies.
//!
//! All three operations produce `result[i] = transform(input[i], i)` with the
//! output length equal to the input length and the output order equal to the
//! input order. They differ only in how much wall-clock concurrency they use:
//!
//! - [`map`]: sequential baseline, strict index order.
//! - [`map_async`]: one task per element, unbounded fan-out.
//! - [`map_async_bounded`]: at most `limit` transforms in flight.
//!
//! # Ordering model
//!
//! Workers may finish in any order, so order is never derived from completion
//! order. Every in-flight computation is keyed by its original index and
//! delivered as an `(index, value)` message to a single collector, which
//! performs the index-addressed write into a pre-sized slot vector. Workers
//! never touch shared result storage beyond their own disjoint slot, so the
//! result needs no lock.
//!
//! Only the *return-value* ordering is guaranteed by the async variants; if
//! the transform has side effects, those may interleave arbitrarily. [`map`]
//! additionally fixes side-effect order, because it is strictly sequential.
//!
//! # Concurrency model
//!
//! The async variants run each work item as a `tokio` task, so effective CPU
//! parallelism is bounded by the runtime's worker threads even for the
//! unbounded variant. The bounded variant adds a counting-semaphore admission
//! gate: a task only begins once it holds one of `limit` permits, and the
//! permit is released when the task finishes, success or panic. There is no
//! cancellation input and no error channel: once launched, a call runs to
//! completion, and a fallible transform encodes failure in its output type. A
//! transform that never returns blocks the whole call indefinitely.

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::{Semaphore, mpsc};

/// Applies `transform` to each `(element, index)` pair sequentially, in index
/// order, and returns the transformed values in the same order.
///
/// The sequential baseline of the family: no concurrency, and side effects of
/// `transform` are observed in strict index order.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::map;
///
/// let doubled = map(vec![1, 2, 3], |v, _k| v * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[must_use]
pub fn map<E, T, F>(items: Vec<E>, mut transform: F) -> Vec<T>
where
    F: FnMut(E, usize) -> T,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| transform(item, index))
        .collect()
}

/// Applies `transform` to every element concurrently, one task per element,
/// and returns the transformed values in input order.
///
/// Each task computes `(index, transform(element, index))` and delivers it to
/// the collector, which writes it into the result slot for that index. The
/// call resolves once all `items.len()` results have been collected. An empty
/// input resolves immediately without launching any task.
///
/// Tasks are scheduled by the `tokio` runtime, so the fan-out is unbounded in
/// *tasks*, not in threads: CPU parallelism is capped by the runtime's worker
/// pool. Use [`map_async_bounded`] when the transform holds scarce resources
/// and the number of simultaneously in-flight invocations must be capped.
///
/// # Panics
///
/// Panics if `transform` panics in a worker: the slot for that index can
/// never be filled. Transforms are expected to be total; a fallible transform
/// should encode failure in its output type `T`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{map, map_async};
///
/// # #[tokio::main]
/// # async fn main() {
/// let input = vec![1, 2, 3, 4, 5];
/// let sequential = map(input.clone(), |v, k| format!("{k}:{v}"));
/// let concurrent = map_async(input, |v, k| format!("{k}:{v}")).await;
/// assert_eq!(concurrent, sequential);
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn map_async<E, T, F>(items: Vec<E>, transform: F) -> Vec<T>
where
    E: Send + 'static,
    T: Send + 'static,
    F: Fn(E, usize) -> T + Send + Sync + 'static,
{
    let total = items.len();
    if total == 0 {
        return Vec::new();
    }

    let transform = Arc::new(transform);
    let (sender, receiver) = mpsc::channel::<(usize, T)>(total);

    for (index, item) in items.into_iter().enumerate() {
        let sender = sender.clone();
        let transform = Arc::clone(&transform);
        tokio::spawn(async move {
            let value = transform(item, index);
            // The receiver outlives every sender; a send only fails if the
            // collector was dropped mid-call, which cannot happen here.
            let _ = sender.send((index, value)).await;
        });
    }
    drop(sender);

    collect_in_order(total, receiver).await
}

/// Applies `transform` to every element concurrently with at most `limit`
/// transforms in flight, and returns the transformed values in input order.
///
/// Identical black-box contract to [`map_async`]; the only difference is the
/// admission gate. A work item is only spawned once it holds one of `limit`
/// semaphore permits, and the permit is released when the worker finishes —
/// success or panic — so a stalled item never strands its permit. A `limit`
/// of `0` degrades to the unbounded [`map_async`] policy, and any
/// `limit >= items.len()` behaves identically to it.
///
/// # Panics
///
/// Panics if `transform` panics in a worker, as with [`map_async`].
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::map_async_bounded;
///
/// # #[tokio::main]
/// # async fn main() {
/// let squares = map_async_bounded((1..=5).collect(), |v: i32, _k| v * v, 2).await;
/// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn map_async_bounded<E, T, F>(items: Vec<E>, transform: F, limit: usize) -> Vec<T>
where
    E: Send + 'static,
    T: Send + 'static,
    F: Fn(E, usize) -> T + Send + Sync + 'static,
{
    if limit == 0 {
        return map_async(items, transform).await;
    }
    let total = items.len();
    if total == 0 {
        return Vec::new();
    }

    let transform = Arc::new(transform);
    let semaphore = Arc::new(Semaphore::new(limit));
    let (sender, receiver) = mpsc::channel::<(usize, T)>(total);

    for (index, item) in items.into_iter().enumerate() {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .expect("semaphore should not be closed");
        let sender = sender.clone();
        let transform = Arc::clone(&transform);
        tokio::spawn(async move {
            let value = transform(item, index);
            let _ = sender.send((index, value)).await;
            drop(permit);
        });
    }
    drop(sender);

    collect_in_order(total, receiver).await
}

/// Drains `(index, value)` messages into a pre-sized slot vector and unwraps
/// it once every sender is gone.
///
/// Each slot is written exactly once, by the message carrying its index.
#[cfg(feature = "async")]
async fn collect_in_order<T>(total: usize, mut receiver: mpsc::Receiver<(usize, T)>) -> Vec<T> {
    let mut slots: Vec<Option<T>> = Vec::with_capacity(total);
    slots.resize_with(total, || None);

    while let Some((index, value)) = receiver.recv().await {
        slots[index] = Some(value);
    }

    slots
        .into_iter()
        .map(|slot| slot.expect("a worker exited without delivering its result"))
        .collect()
}
