// src/models.rs

use serde::Serialize;

use crate::constants::{COMPLETE_EVENT_PHASE, EVENT_CATEGORY, TRACE_PID};

/// One completed measurement, produced by a scoped timer at stop time and
/// consumed immediately by the session recorder. Not retained after the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// Identifier of the measured unit of work. Free-form text; sanitized for
    /// JSON output at write time.
    pub name: String,
    /// Monotonic start timestamp, microseconds since the trace epoch.
    pub start_us: u64,
    /// Monotonic end timestamp, microseconds since the trace epoch.
    pub end_us: u64,
    /// Opaque identifier of the emitting thread.
    pub thread_id: u64,
}

impl TraceRecord {
    /// Duration of the measured interval in microseconds. Saturating, so a
    /// malformed record (end before start) yields zero rather than wrapping.
    pub fn duration_us(&self) -> u64 {
        self.end_us.saturating_sub(self.start_us)
    }
}

/// The on-wire shape of a single Chrome Trace "complete event".
///
/// Field declaration order fixes the key order in the serialized object:
/// `cat`, `dur`, `name`, `ph`, `pid`, `tid`, `ts`.
#[derive(Serialize, Debug)]
pub struct TraceEvent {
    cat: &'static str,
    dur: u64,
    name: String,
    ph: &'static str,
    pid: u32,
    tid: u64,
    ts: u64,
}

impl From<&TraceRecord> for TraceEvent {
    fn from(record: &TraceRecord) -> Self {
        Self {
            cat: EVENT_CATEGORY,
            dur: record.duration_us(),
            name: sanitize_name(&record.name),
            ph: COMPLETE_EVENT_PHASE,
            pid: TRACE_PID,
            tid: record.thread_id,
            ts: record.start_us,
        }
    }
}

/// Replaces every double quote in a span name with a single quote.
///
/// Names are typically function identifiers, so this is the only character
/// class worth rewriting; anything else unusual is handled by the JSON string
/// escaping of the serializer, which keeps the output parseable without
/// changing the wire shape for ASCII identifiers.
fn sanitize_name(name: &str) -> String {
    name.replace('"', "'")
}
