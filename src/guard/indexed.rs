use std::fmt::Display;

use crate::check::presence::ABSENT_MESSAGE;
use crate::length::{has_index, Elements};
use crate::sink::emit;

/// Invokes `f` with a borrow of `container[index]` iff the container is
/// present and large enough.
///
/// One generic covers every element type; there is no per-width
/// duplication of the wrapper.
///
/// # Example
///
/// ```rust
/// use backstop::with_index;
///
/// let samples = [12u16, 47, 9];
///
/// let mut picked = 0;
/// with_index(Some(&samples), 1, |value| picked = *value);
/// assert_eq!(picked, 47);
///
/// // Out of range: reported, closure never fires.
/// with_index(Some(&samples), 3, |_value: &u16| unreachable!());
/// ```
#[track_caller]
pub fn with_index<C, I, F>(container: Option<&C>, index: I, f: F)
where
    C: Elements + ?Sized,
    I: TryInto<usize> + Display + Copy,
    F: FnOnce(&C::Elem),
{
    if !has_index(container, index) {
        return;
    }
    let (Some(container), Ok(index)) = (container, index.try_into()) else {
        return;
    };
    if let Some(element) = container.element_at(index) {
        f(element);
    }
}

/// Invokes `f` with the occupied value of `container[index]` iff the
/// container is present, large enough, and the slot holds a value.
///
/// For containers of `Option<T>` elements. An empty slot at a valid index
/// is reported like any other absent value and `f` does not fire.
///
/// # Example
///
/// ```rust
/// use backstop::with_present_index;
///
/// let slots = [Some("a"), None, Some("c")];
///
/// let mut seen = None;
/// with_present_index(Some(&slots), 0, |s| seen = Some(*s));
/// assert_eq!(seen, Some("a"));
///
/// // Valid index, empty slot: reported, closure never fires.
/// with_present_index(Some(&slots), 1, |_s: &&str| unreachable!());
/// ```
#[track_caller]
pub fn with_present_index<C, T, I, F>(container: Option<&C>, index: I, f: F)
where
    C: Elements<Elem = Option<T>> + ?Sized,
    I: TryInto<usize> + Display + Copy,
    F: FnOnce(&T),
{
    if !has_index(container, index) {
        return;
    }
    let (Some(container), Ok(index)) = (container, index.try_into()) else {
        return;
    };
    match container.element_at(index) {
        Some(Some(value)) => f(value),
        Some(None) => emit(ABSENT_MESSAGE),
        None => {}
    }
}

/// Invokes `f` with the character at `index` iff the text is present and
/// long enough.
///
/// Positions are character positions, consistent with how text is counted
/// by the bounds checks; the character is passed by value.
///
/// # Example
///
/// ```rust
/// use backstop::with_char_at;
///
/// let mut initial = ' ';
/// with_char_at(Some("日本"), 1, |c| initial = c);
/// assert_eq!(initial, '本');
///
/// with_char_at(Some("日本"), 2, |_c| unreachable!());
/// ```
#[track_caller]
pub fn with_char_at<I, F>(text: Option<&str>, index: I, f: F)
where
    I: TryInto<usize> + Display + Copy,
    F: FnOnce(char),
{
    if !has_index(text, index) {
        return;
    }
    let (Some(text), Ok(index)) = (text, index.try_into()) else {
        return;
    };
    if let Some(character) = text.chars().nth(index) {
        f(character);
    }
}
