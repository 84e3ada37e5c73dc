//! One-directional numeric sanity checks.
//!
//! These are not a replacement for the comparison operators. They exist for
//! code that already believes the relation holds and wants a logged,
//! non-fatal record when it does not. One generic over [`PrimInt`] covers
//! every primitive integer width instead of duplicating the logic per type.

use std::fmt::Display;

use num_traits::PrimInt;

use crate::sink::emit;

/// Checks that `to_check >= boundary`, reporting a failure otherwise.
///
/// # Example
///
/// ```rust
/// use backstop::is_equal_or_greater;
///
/// assert!(is_equal_or_greater(10, 5));
/// assert!(!is_equal_or_greater(5i64, 10i64));
/// ```
#[track_caller]
pub fn is_equal_or_greater<T>(to_check: T, boundary: T) -> bool
where
    T: PrimInt + Display,
{
    if to_check >= boundary {
        true
    } else {
        emit(&format!(
            "value {} should have been >= {}",
            to_check, boundary
        ));
        false
    }
}

/// Checks that `to_check > boundary`, reporting a failure otherwise.
#[track_caller]
pub fn is_greater<T>(to_check: T, boundary: T) -> bool
where
    T: PrimInt + Display,
{
    if to_check > boundary {
        true
    } else {
        emit(&format!(
            "value {} should have been > {}",
            to_check, boundary
        ));
        false
    }
}

/// Checks that `to_check < boundary`, reporting a failure otherwise.
#[track_caller]
pub fn is_less<T>(to_check: T, boundary: T) -> bool
where
    T: PrimInt + Display,
{
    if to_check < boundary {
        true
    } else {
        emit(&format!(
            "value {} should have been < {}",
            to_check, boundary
        ));
        false
    }
}

/// Checks that `to_check <= boundary`, reporting a failure otherwise.
#[track_caller]
pub fn is_equal_or_less<T>(to_check: T, boundary: T) -> bool
where
    T: PrimInt + Display,
{
    if to_check <= boundary {
        true
    } else {
        emit(&format!(
            "value {} should have been <= {}",
            to_check, boundary
        ));
        false
    }
}
