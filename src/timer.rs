// src/timer.rs

//! The scoped timer: measures one unit of work and hands off exactly one
//! completed record, on explicit stop or on drop, whichever comes first.

use log::warn;

use crate::clock;
use crate::models::TraceRecord;
use crate::session::{Instrumentor, SessionError};

/// Measures the wall-clock duration of a unit of work.
///
/// The timer starts running at construction. It records exactly once: either
/// when [`stop`](Self::stop) is called, or when it goes out of scope while
/// still running, including early returns and panics unwinding through the
/// enclosing scope. Callers never need to remember an exit path.
///
/// The name is borrowed for the timer's lifetime, so `&'static str` names
/// (string literals, function names) carry no allocation until stop time.
#[derive(Debug)]
pub struct ScopedTimer<'a> {
    instrumentor: &'a Instrumentor,
    name: &'a str,
    start_us: u64,
    stopped: bool,
}

impl<'a> ScopedTimer<'a> {
    /// Starts measuring `name` now.
    pub fn start(instrumentor: &'a Instrumentor, name: &'a str) -> Self {
        Self {
            instrumentor,
            name,
            start_us: clock::now_micros(),
            stopped: false,
        }
    }

    /// Stops the timer and submits its record. Idempotent: a second call is an
    /// `Ok` no-op, so an explicit stop followed by the drop never records
    /// twice.
    ///
    /// # Errors
    /// Propagates `SessionError::NoActiveSession` (and stream write failures)
    /// from the recorder. The timer is marked stopped even when the write
    /// fails; the measurement is lost rather than retried.
    pub fn stop(&mut self) -> Result<(), SessionError> {
        if self.stopped {
            return Ok(());
        }
        self.stopped = true;

        let record = TraceRecord {
            name: self.name.to_string(),
            start_us: self.start_us,
            end_us: clock::now_micros(),
            thread_id: clock::current_thread_id(),
        };
        self.instrumentor.write_record(&record)
    }

    /// Returns `true` until the timer has recorded.
    pub fn is_running(&self) -> bool {
        !self.stopped
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            // Drop cannot propagate; the failure is reported, not swallowed.
            warn!("Scoped timer '{}' failed to record: {}", self.name, e);
        }
    }
}

impl Instrumentor {
    /// Starts a [`ScopedTimer`] for `name`, recording into this recorder.
    pub fn timer<'a>(&'a self, name: &'a str) -> ScopedTimer<'a> {
        ScopedTimer::start(self, name)
    }
}
