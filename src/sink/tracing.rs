use crate::sink::{Diagnostic, Sink};

/// A sink that forwards failures to the `tracing` ecosystem.
///
/// Emits one `ERROR`-level event per failed check under the `backstop`
/// target, with the capture location attached as a field. Subscriber
/// configuration (filtering, formatting, backtrace handling) is entirely
/// the host's concern.
///
/// ```rust
/// use backstop::{install, TracingSink};
///
/// static SINK: TracingSink = TracingSink;
///
/// let _ = install(&SINK);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn log(&self, message: &str, diagnostic: Option<&Diagnostic>) {
        match diagnostic {
            Some(diagnostic) => tracing::error!(
                target: "backstop",
                location = %diagnostic.location(),
                "{}",
                message
            ),
            None => tracing::error!(target: "backstop", "{}", message),
        }
    }
}
