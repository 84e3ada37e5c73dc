use std::sync::OnceLock;

use crate::sink::{Diagnostic, Sink, StderrSink};

/// The process-wide sink. `OnceLock` gives the required semantics for free:
/// installation is atomic with respect to concurrent readers, the first
/// installer wins, and the slot can never be cleared.
static SINK: OnceLock<&'static dyn Sink> = OnceLock::new();

/// Installs the process-wide failure sink.
///
/// Intended to be called once from host application startup code, before
/// any checks run. All subsequent failure reports route through `sink`.
/// A second call fails with [`InstallError`] and leaves the first sink in
/// place.
///
/// The `&'static` requirement matches the sink's lifecycle (never unset);
/// a heap-allocated sink can be installed via `Box::leak`.
///
/// # Errors
///
/// Returns [`InstallError`] if a sink was already installed.
///
/// # Example
///
/// ```rust
/// use backstop::{install, StderrSink};
///
/// static SINK: StderrSink = StderrSink;
///
/// let first = install(&SINK);
/// // Only the first installation in the process can succeed.
/// if first.is_ok() {
///     assert!(install(&SINK).is_err());
/// }
/// ```
pub fn install(sink: &'static dyn Sink) -> Result<(), InstallError> {
    SINK.set(sink).map_err(|_| InstallError(()))
}

/// Error returned by [`install`] when a sink is already in place.
#[derive(Debug)]
pub struct InstallError(());

impl std::fmt::Display for InstallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a failure sink has already been installed for this process")
    }
}

impl std::error::Error for InstallError {}

/// Reports one failed check through the installed sink, or through
/// [`StderrSink`] when none is installed.
///
/// The diagnostic is captured here; `#[track_caller]` propagation through
/// the public check functions makes it name the user's call site.
#[track_caller]
pub(crate) fn emit(message: &str) {
    let diagnostic = Diagnostic::capture();
    match SINK.get() {
        Some(sink) => sink.log(message, Some(&diagnostic)),
        None => StderrSink.log(message, Some(&diagnostic)),
    }
}
