//! One-shot and periodic timer execution.
//!
//! The task closure runs inline in the timer loop: while it executes, no tick
//! is observed and the cancellation token is not consulted. [`run_periodic`]
//! ticks at a fixed rate and skips ticks missed while the task was running;
//! [`run_periodic_after`] re-arms the timer only after the task returns, so
//! the effective spacing between runs is `period` plus the task's own
//! duration.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Errors produced by the timer functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError<E> {
    /// The cancellation token fired first.
    Cancelled,

    /// The task itself failed; the periodic loops stop permanently on the
    /// first such error.
    Task(E),
}

impl<E: fmt::Display> fmt::Display for TimerError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(formatter, "timer was cancelled"),
            Self::Task(error) => write!(formatter, "timer task failed: {error}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> Error for TimerError<E> {}

/// Runs `task` once after `delay`, unless `token` fires first.
///
/// # Errors
///
/// [`TimerError::Cancelled`] if the token fired before the delay elapsed,
/// [`TimerError::Task`] wrapping the task's own error.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use seqkit::task::run_once;
/// use tokio_util::sync::CancellationToken;
///
/// # #[tokio::main]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let result = run_once(&token, Duration::from_millis(1), || {
///     Ok::<_, std::convert::Infallible>(21 * 2)
/// })
/// .await;
/// assert_eq!(result.unwrap(), 42);
/// # }
/// ```
pub async fn run_once<T, E, F>(
    token: &CancellationToken,
    delay: Duration,
    task: F,
) -> Result<T, TimerError<E>>
where
    F: FnOnce() -> Result<T, E>,
{
    tokio::select! {
        () = token.cancelled() => Err(TimerError::Cancelled),
        () = time::sleep(delay) => task().map_err(TimerError::Task),
    }
}

/// Runs `task` at a fixed rate, every `period`, until it fails or `token`
/// fires.
///
/// The first run happens one full `period` after the call. Ticks that elapse
/// while the task is executing are skipped, not replayed. The loop never
/// finishes on its own; the returned value is the reason it stopped.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use seqkit::task::{TimerError, run_periodic};
/// use tokio_util::sync::CancellationToken;
///
/// # #[tokio::main]
/// # async fn main() {
/// let token = CancellationToken::new();
/// token.cancel();
/// let stopped = run_periodic(&token, Duration::from_millis(5), || {
///     Ok::<(), std::convert::Infallible>(())
/// })
/// .await;
/// assert_eq!(stopped, TimerError::Cancelled);
/// # }
/// ```
pub async fn run_periodic<E, F>(
    token: &CancellationToken,
    period: Duration,
    mut task: F,
) -> TimerError<E>
where
    F: FnMut() -> Result<(), E>,
{
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            () = token.cancelled() => return TimerError::Cancelled,
            _ = ticker.tick() => {
                if let Err(error) = task() {
                    return TimerError::Task(error);
                }
            }
        }
    }
}

/// Runs `task` repeatedly, re-arming the timer only after each run returns,
/// until the task fails or `token` fires.
///
/// Unlike [`run_periodic`], the interval restarts when the task finishes, so
/// consecutive runs are spaced by `period` **plus** the task's duration
/// rather than at a fixed rate. The returned value is the reason the loop
/// stopped.
pub async fn run_periodic_after<E, F>(
    token: &CancellationToken,
    period: Duration,
    mut task: F,
) -> TimerError<E>
where
    F: FnMut() -> Result<(), E>,
{
    loop {
        tokio::select! {
            () = token.cancelled() => return TimerError::Cancelled,
            () = time::sleep(period) => {
                if let Err(error) = task() {
                    return TimerError::Task(error);
                }
            }
        }
    }
}
