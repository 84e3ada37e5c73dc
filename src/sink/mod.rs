//! Failure reporting for soft checks.
//!
//! Every failed check in this crate produces exactly one log emission: a
//! message plus a [`Diagnostic`] captured at the caller's call site. Where
//! that emission goes is controlled by a process-wide [`Sink`] that a host
//! application may [`install`] once during startup. Until (or unless) a sink
//! is installed, emissions fall back to [`StderrSink`].
//!
//! ## Lifecycle
//!
//! The sink reference is unset at startup, installable at most once, and
//! never unset. Installation races resolve atomically: a concurrent reader
//! observes either no sink or the fully installed one, never a partial
//! state. Panics raised by a sink are not caught here and unwind into the
//! caller of the failed check.

/// Captured-call-site record attached to every emission.
pub mod diagnostic;
/// Process-wide sink storage and the emission path.
pub mod global;
/// Default sink writing to the standard error stream.
pub mod stderr;
/// Sink forwarding failures to the `tracing` ecosystem.
#[cfg(feature = "tracing")]
pub mod tracing;

pub use diagnostic::Diagnostic;
pub use global::{install, InstallError};
pub use stderr::StderrSink;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSink;

pub(crate) use global::emit;

/// Destination for soft-check failure reports.
///
/// Implementations must be callable from any thread; checks run on whatever
/// thread the caller owns and report synchronously.
pub trait Sink: Send + Sync {
    /// Records one failed check.
    ///
    /// `diagnostic` is present for every emission produced by this crate;
    /// it is optional in the signature so hosts can reuse the sink for
    /// reports of their own that carry no capture site.
    fn log(&self, message: &str, diagnostic: Option<&Diagnostic>);
}
