// src/clock.rs

//! Monotonic microsecond clock and opaque per-thread identifiers.
//!
//! Trace timestamps only need to be mutually comparable, so they are measured
//! against a process-wide `Instant` captured on first use rather than any wall
//! clock. Thread ids likewise only need to be stable and distinct; they are
//! handed out from an atomic counter the first time a thread asks for one.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

static TRACE_EPOCH: OnceLock<Instant> = OnceLock::new();
static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Returns the number of microseconds elapsed since the process-wide trace
/// epoch. The epoch is fixed the first time this is called, so the very first
/// reading is `0` and all subsequent readings are monotonically non-decreasing.
pub fn now_micros() -> u64 {
    let epoch = TRACE_EPOCH.get_or_init(Instant::now);
    u64::try_from(epoch.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Returns an opaque identifier for the calling thread, stable for the
/// thread's lifetime. Used only to group events by execution context in the
/// trace viewer; the value carries no other meaning.
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}
