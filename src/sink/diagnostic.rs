use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::panic::Location;

/// A record of where a check failed.
///
/// Created fresh for every failed check. Carries the caller's source
/// location (propagated through `#[track_caller]`, so it names the call
/// site of the public check function, not this crate's internals) and a
/// backtrace captured under the usual `RUST_BACKTRACE` rules. It is not an
/// error type and is never propagated; it exists only to make log output
/// attributable.
#[derive(Debug)]
pub struct Diagnostic {
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl Diagnostic {
    /// Captures the current call site and backtrace.
    #[track_caller]
    pub(crate) fn capture() -> Self {
        Self {
            location: Location::caller(),
            backtrace: Backtrace::capture(),
        }
    }

    /// The source location of the check that failed.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The backtrace captured at the failure, which may be disabled
    /// depending on the process environment.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location)?;
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\n{}", self.backtrace)?;
        }
        Ok(())
    }
}
