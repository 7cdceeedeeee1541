//! Cancellation-aware task helpers: stream copy and timers.
//!
//! Everything in this module takes a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) and races its
//! work against it, so callers can abort cleanly. Cancellation is always
//! reported as a dedicated error variant, distinguishable from a genuine
//! failure.

mod copy;
mod timer;

pub use copy::{CopyError, copy_with_cancel};
pub use timer::{TimerError, run_once, run_periodic, run_periodic_after};
