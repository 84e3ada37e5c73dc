//! # `backstop` - Soft-Check Toolkit
//!
//! A toolkit of soft runtime checks: each function verifies a precondition
//! (present optional value, valid index, expected dynamic type, numeric
//! bound) and, on failure, logs a diagnostic instead of panicking. Callers
//! branch on the boolean result, or use the guarded-callback forms and let
//! the closure simply not fire.
//!
//! ## Guarantees
//!
//! - **No panics on guarded conditions**: an absent value, an
//!   out-of-range index, a wrong dynamic type, or a violated numeric bound
//!   all degrade to `false` plus one log emission; nothing unwinds and
//!   nothing returns `Err`.
//! - **Attributable failures**: every emission carries a [`Diagnostic`]
//!   with the caller's source location (via `#[track_caller]`) and a
//!   backtrace under the usual `RUST_BACKTRACE` rules.
//! - **One sink, installed once**: failure reports route through a
//!   process-wide [`Sink`] installed at most once during startup, with a
//!   stderr fallback until then. With the `tracing` feature, a ready-made
//!   `TracingSink` forwards reports to the `tracing` ecosystem.
//!
//! ## Architecture
//!
//! Checks are pure synchronous functions over caller-owned data; the sink
//! reference is the only shared state. Container bounds logic is written
//! once against two capability traits — [`ElementCount`] for counting and
//! [`Elements`] for retrieval — implemented per supported shape (slices,
//! fixed arrays, `Vec`, `VecDeque`, text), so an unsupported shape is a
//! compile error rather than a runtime sentinel. Dynamic-type checks use
//! the [`DynTyped`] reflection trait, blanket-implemented for every
//! `'static` type, so mismatch reports can name both sides.
//!
//! ## Example
//!
//! ```rust
//! use backstop::{has_index, with_index, for_each_present};
//!
//! let samples = [3u32, 1, 4];
//!
//! // Branch on the boolean...
//! if has_index(Some(&samples), 2) {
//!     // in range, proceed
//! }
//!
//! // ...or guard the access itself.
//! let mut last = 0;
//! with_index(Some(&samples), 2, |value| last = *value);
//! assert_eq!(last, 4);
//!
//! // Sequences with missing slots: occupied values only, in order.
//! let slots = [Some(10), None, Some(30)];
//! let mut seen = Vec::new();
//! for_each_present(Some(&slots), |value| seen.push(*value));
//! assert_eq!(seen, vec![10, 30]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod check;
pub mod guard;
pub mod length;
pub mod sink;

pub use check::{
    is_equal_or_greater, is_equal_or_less, is_expected_type, is_greater, is_less, is_present,
    DynTyped,
};
pub use guard::{
    for_each, for_each_indexed, for_each_present, for_each_present_indexed, with_char_at,
    with_expected_type, with_index, with_present, with_present_index,
};
pub use length::{has_index, is_minimum_length, is_not_empty, length_of, ElementCount, Elements};
#[cfg(feature = "tracing")]
pub use sink::TracingSink;
pub use sink::{install, Diagnostic, InstallError, Sink, StderrSink};

// Compile-time layout assertions: sinks stay zero-sized, and the global
// slot stays a plain fat pointer.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<StderrSink>() == 0);
    assert!(mem::size_of::<InstallError>() == 0);
    assert!(mem::size_of::<&'static dyn Sink>() == 2 * mem::size_of::<usize>());
};

#[cfg(feature = "tracing")]
const _: () = {
    assert!(core::mem::size_of::<TracingSink>() == 0);
};
