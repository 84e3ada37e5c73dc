//! Minimum-length, non-empty, and has-index checks.
//!
//! All three public checks funnel into `checked_min_length`, which holds
//! the size logic once; each call site supplies a closure producing the
//! shortfall message for its situation ("too short" versus "empty" versus
//! "does not have index N"). Index and threshold parameters accept any
//! integer convertible to `usize`, so a signed negative value stays a
//! live, logged failure instead of being forced out at the type level.

use std::fmt::Display;

use crate::check::presence::ABSENT_MESSAGE;
use crate::length::ElementCount;
use crate::sink::emit;

/// Reports the element count of an optional container.
///
/// An absent container reports a failure and yields `None`. Present
/// containers always have a count; shapes the crate does not understand do
/// not compile in the first place.
///
/// # Example
///
/// ```rust
/// use backstop::length_of;
///
/// let names = vec!["ada", "grace"];
/// assert_eq!(length_of(Some(&names)), Some(2));
/// assert_eq!(length_of::<Vec<&str>>(None), None);
/// ```
#[track_caller]
pub fn length_of<C>(container: Option<&C>) -> Option<usize>
where
    C: ElementCount + ?Sized,
{
    match container {
        Some(container) => Some(container.element_count()),
        None => {
            emit(ABSENT_MESSAGE);
            None
        }
    }
}

/// Checks that a container is present and holds at least `min_length`
/// elements.
///
/// Failure paths, each with its own report: absent container, negative
/// threshold, too few elements.
///
/// # Example
///
/// ```rust
/// use backstop::is_minimum_length;
///
/// let window = [0u8; 4];
/// assert!(is_minimum_length(Some(&window), 4));
/// assert!(!is_minimum_length(Some(&window), 5));
/// assert!(!is_minimum_length(Some(&window), -1));
/// ```
#[track_caller]
pub fn is_minimum_length<C, I>(container: Option<&C>, min_length: I) -> bool
where
    C: ElementCount + ?Sized,
    I: TryInto<usize> + Display + Copy,
{
    let Some(container) = container else {
        emit(ABSENT_MESSAGE);
        return false;
    };
    let Ok(wanted) = min_length.try_into() else {
        emit(&format!(
            "minimum length {} is negative; cannot check",
            min_length
        ));
        return false;
    };
    checked_min_length(container, wanted, |size| {
        format!(
            "{} of length {} is too short (<{})",
            container.shape_name(),
            size,
            min_length
        )
    })
}

/// Checks that a container is present and holds at least one element.
///
/// Same check as `is_minimum_length(container, 1)`, with a message that
/// says "empty" instead of "too short".
#[track_caller]
pub fn is_not_empty<C>(container: Option<&C>) -> bool
where
    C: ElementCount + ?Sized,
{
    let Some(container) = container else {
        emit(ABSENT_MESSAGE);
        return false;
    };
    checked_min_length(container, 1, |_| {
        format!("{} is empty", container.shape_name())
    })
}

/// Checks that a container is present and large enough to contain `index`.
///
/// A negative index is rejected with its own report before the container
/// is even consulted. For valid indexes this is a minimum-length check
/// against `index + 1`.
///
/// # Example
///
/// ```rust
/// use backstop::has_index;
///
/// let counts = [1, 2, 3];
/// assert!(has_index(Some(&counts), 2));
/// assert!(!has_index(Some(&counts), 3));
/// assert!(!has_index(Some(&counts), -1));
/// ```
#[track_caller]
pub fn has_index<C, I>(container: Option<&C>, index: I) -> bool
where
    C: ElementCount + ?Sized,
    I: TryInto<usize> + Display + Copy,
{
    let Ok(wanted) = index.try_into() else {
        emit(&format!("cannot check negative index {}", index));
        return false;
    };
    let Some(container) = container else {
        emit(ABSENT_MESSAGE);
        return false;
    };
    let Some(required) = wanted.checked_add(1) else {
        emit(&format!("index {} exceeds any checkable length", index));
        return false;
    };
    checked_min_length(container, required, |_| {
        format!(
            "{} does not have index {}",
            container.shape_name(),
            index
        )
    })
}

/// The shared size check: present container, known threshold. The closure
/// renders the shortfall message and receives the actual size, so the same
/// logic serves every caller without duplicating their wording.
#[track_caller]
fn checked_min_length<C, M>(container: &C, min_length: usize, shortfall: M) -> bool
where
    C: ElementCount + ?Sized,
    M: FnOnce(usize) -> String,
{
    let size = container.element_count();
    if size >= min_length {
        true
    } else {
        emit(&shortfall(size));
        false
    }
}
