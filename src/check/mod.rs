//! Primitive soft checks: presence, dynamic type, numeric relations.
//!
//! Each function returns a definite boolean and, on failure, reports once
//! through the process sink. None of them panics for the condition it
//! guards; callers branch on the result (or use the wrappers in
//! [`crate::guard`] and let the callback simply not fire).

/// Presence checks over `Option`.
pub mod presence;
/// One-directional numeric sanity checks.
pub mod relation;
/// Dynamic-type checks over `Any` values.
pub mod typed;

pub use presence::is_present;
pub use relation::{is_equal_or_greater, is_equal_or_less, is_greater, is_less};
pub use typed::{is_expected_type, DynTyped};
