//! Shared test support: a capturing sink plus a serialization lock.
//!
//! The sink is process-wide and installable once, so every test binary
//! installs one `CaptureSink` up front and individual tests serialize on a
//! lock while they drain and inspect emissions.
#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard, OnceLock};

use backstop::{install, Diagnostic, Sink};

/// One captured emission.
pub struct Entry {
    pub message: String,
    pub location: Option<String>,
}

/// A sink that stores every report for later inspection.
#[derive(Default)]
pub struct CaptureSink {
    entries: Mutex<Vec<Entry>>,
}

impl CaptureSink {
    /// Removes and returns everything captured so far.
    pub fn drain(&self) -> Vec<Entry> {
        std::mem::take(&mut *self.entries.lock().unwrap())
    }

    /// Number of captured reports.
    pub fn count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl Sink for CaptureSink {
    fn log(&self, message: &str, diagnostic: Option<&Diagnostic>) {
        self.entries.lock().unwrap().push(Entry {
            message: message.to_owned(),
            location: diagnostic.map(|d| d.location().to_string()),
        });
    }
}

/// Installs the binary's capture sink, idempotently.
pub fn install_capture() -> &'static CaptureSink {
    static SINK: OnceLock<CaptureSink> = OnceLock::new();
    let sink = SINK.get_or_init(CaptureSink::default);
    let _ = install(sink);
    sink
}

/// Installs the capture sink, takes the serialization lock, and clears any
/// leftovers, so the caller observes only its own emissions.
pub fn capture() -> (&'static CaptureSink, MutexGuard<'static, ()>) {
    static LOCK: Mutex<()> = Mutex::new(());
    let sink = install_capture();
    let guard = LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    sink.drain();
    (sink, guard)
}
