// src/session.rs

//! The session recorder: owns one trace output stream at a time and emits a
//! syntactically valid Trace Event Format document incrementally.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, trace};
use thiserror::Error;

use crate::constants::{TRACE_FOOTER, TRACE_HEADER};
use crate::models::{TraceEvent, TraceRecord};

/// Represents errors that can occur during trace session lifecycle operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A second session was begun while another one was still open. The open
    /// session and its file are left untouched.
    #[error("A trace session named '{name}' is already open. End it before beginning a new one.")]
    SessionAlreadyOpen {
        /// Name of the session that is currently open.
        name: String,
    },
    /// A lifecycle or write operation was attempted with no open session.
    #[error("No trace session is open.")]
    NoActiveSession,
    /// The output path could not be opened for writing.
    #[error("Failed to open trace output file '{path}': {source}")]
    StreamOpen {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },
    /// A write or flush on the open stream failed.
    #[error("Failed to write to the trace stream: {0}")]
    Io(#[from] std::io::Error),
}

type SessionResult<T> = Result<T, SessionError>;

/// State of one open session: the stream it exclusively owns, and the count
/// used to decide whether the next record needs a leading comma.
struct ActiveSession {
    name: String,
    stream: File,
    record_count: usize,
}

/// Records scoped-timer measurements into a Chrome Trace JSON file.
///
/// The recorder is an explicit handle rather than process-global state: clone
/// it freely and hand clones to whatever needs instrumentation. All clones
/// share the same underlying session, and at most one session may be open per
/// recorder at a time.
///
/// Records are written one at a time: the comma placement, serialization,
/// flush, and counter update happen as a single critical section, so timers
/// stopping on different threads cannot interleave bytes in the output.
#[derive(Clone, Default)]
pub struct Instrumentor {
    session: Arc<Mutex<Option<ActiveSession>>>,
}

impl std::fmt::Debug for Instrumentor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instrumentor")
            .field("session_open", &self.is_session_open())
            .finish()
    }
}

impl Instrumentor {
    /// Creates a recorder with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new trace session, truncating any existing file at `path` and
    /// writing the document header immediately.
    ///
    /// # Errors
    /// Returns `SessionError::SessionAlreadyOpen` if a session is open (the
    /// open session's file is not touched), or `SessionError::StreamOpen` if
    /// `path` cannot be opened for writing.
    pub fn begin_session(
        &self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> SessionResult<()> {
        let name = name.into();
        let path = path.as_ref();

        let mut slot = self.lock_session();
        if let Some(open) = slot.as_ref() {
            return Err(SessionError::SessionAlreadyOpen {
                name: open.name.clone(),
            });
        }

        // Open before writing anything, so a bad path surfaces here and not
        // lazily on the first record.
        let mut stream = File::create(path).map_err(|source| SessionError::StreamOpen {
            path: path.to_path_buf(),
            source,
        })?;
        stream.write_all(TRACE_HEADER.as_bytes())?;
        stream.flush()?;

        debug!("Trace session '{}' begun, writing to '{}'", name, path.display());
        *slot = Some(ActiveSession {
            name,
            stream,
            record_count: 0,
        });
        Ok(())
    }

    /// Ends the open session: writes the document footer, flushes, and closes
    /// the stream. The output file is a complete, parseable JSON document once
    /// this returns.
    ///
    /// # Errors
    /// Returns `SessionError::NoActiveSession` if no session is open.
    pub fn end_session(&self) -> SessionResult<()> {
        let mut slot = self.lock_session();
        let mut session = slot.take().ok_or(SessionError::NoActiveSession)?;

        session.stream.write_all(TRACE_FOOTER.as_bytes())?;
        session.stream.flush()?;
        debug!(
            "Trace session '{}' ended after {} record(s)",
            session.name, session.record_count
        );
        // Dropping the session closes the stream.
        Ok(())
    }

    /// Writes one completed record to the open session and flushes, so partial
    /// output survives a crash. Records after the first are preceded by a
    /// separating comma.
    ///
    /// # Errors
    /// Returns `SessionError::NoActiveSession` if no session is open.
    pub fn write_record(&self, record: &TraceRecord) -> SessionResult<()> {
        let mut slot = self.lock_session();
        let session = slot.as_mut().ok_or(SessionError::NoActiveSession)?;

        if session.record_count > 0 {
            session.stream.write_all(b",")?;
        }
        serde_json::to_writer(&mut session.stream, &TraceEvent::from(record))
            .map_err(std::io::Error::from)?;
        session.stream.flush()?;
        session.record_count += 1;

        trace!(
            "Recorded '{}' ({} us) on thread {}",
            record.name,
            record.duration_us(),
            record.thread_id
        );
        Ok(())
    }

    /// Returns `true` while a session is open on this recorder.
    pub fn is_session_open(&self) -> bool {
        self.lock_session().is_some()
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, Option<ActiveSession>> {
        // A poisoned lock only means another timer panicked mid-stop; the
        // stream itself is still usable.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
