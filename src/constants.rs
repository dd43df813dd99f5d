// src/constants.rs

/// Opening framing of the trace document. Written once at session begin, so an
/// interrupted session still starts as recognizable Trace Event Format output.
pub const TRACE_HEADER: &str = "{\"otherData\": {},\"traceEvents\":[";

/// Closing framing of the trace document, written at session end.
pub const TRACE_FOOTER: &str = "]}";

/// Category tag attached to every emitted event.
pub const EVENT_CATEGORY: &str = "function";

/// Phase marker for a Chrome Trace "complete event" (start time + duration).
pub const COMPLETE_EVENT_PHASE: &str = "X";

/// Process id reported in every event. This is a single-process tool, so the
/// value only needs to be constant, not meaningful.
pub const TRACE_PID: u32 = 0;

/// Default output path used by the demo binary when none is given.
pub const DEFAULT_TRACE_FILENAME: &str = "results.json";
