//! Scoped-timing instrumentation that writes Chrome Trace Event Format JSON.
//!
//! A caller begins a session on an [`Instrumentor`], creates [`ScopedTimer`]s
//! (nested or sequential) around the work it wants measured, and ends the
//! session. The output file is then a complete JSON document loadable in
//! `chrome://tracing` or Perfetto.
//!
//! ```no_run
//! use flamefile::Instrumentor;
//!
//! # fn main() -> Result<(), flamefile::SessionError> {
//! let instrumentor = Instrumentor::new();
//! instrumentor.begin_session("startup", "results.json")?;
//! {
//!     let _timer = instrumentor.timer("load assets");
//!     // ... the work being measured ...
//! }
//! instrumentor.end_session()?;
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod constants;
pub mod macros;
pub mod models;
pub mod session;
pub mod timer;

pub use models::TraceRecord;
pub use session::{Instrumentor, SessionError};
pub use timer::ScopedTimer;
