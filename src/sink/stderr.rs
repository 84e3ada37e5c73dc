use std::io::Write;

use crate::sink::{Diagnostic, Sink};

/// The fallback sink: writes to the standard error stream.
///
/// Used automatically while no sink is installed; it can also be installed
/// explicitly by hosts that want the stderr behavior locked in. Each report
/// is one `soft check failed:` line followed by the capture location and,
/// when the process environment enables it, the backtrace.
///
/// Write errors on stderr are ignored; there is nowhere left to report them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn log(&self, message: &str, diagnostic: Option<&Diagnostic>) {
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        let _ = writeln!(out, "soft check failed: {}", message);
        if let Some(diagnostic) = diagnostic {
            let _ = writeln!(out, "  at {}", diagnostic);
        }
    }
}
