use std::any::{type_name, Any};

use crate::check::presence::ABSENT_MESSAGE;
use crate::sink::emit;

/// An [`Any`] value that can also name its concrete type.
///
/// `dyn Any` alone can answer "are you a `T`?" but cannot say what it
/// actually is, which would leave type-mismatch reports naming only the
/// expected side. The blanket implementation captures
/// [`type_name`] at the concrete type, so
/// every `'static` value is usable as `&dyn DynTyped` with no opt-in.
pub trait DynTyped: Any {
    /// The concrete type name of the underlying value.
    fn type_name(&self) -> &'static str;

    /// Upcasts to [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> DynTyped for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Checks that a dynamically typed value is present and is a `T`.
///
/// Three outcomes: the value is a `T` (`true`, no report), the value is
/// absent (one absent-value report), or the value is some other type (one
/// report naming both the actual and the expected type). The original
/// "expected type is itself absent" failure mode has no analogue here; the
/// expected type is a type parameter and always exists.
///
/// # Example
///
/// ```rust
/// use backstop::{is_expected_type, DynTyped};
///
/// let value = String::from("payload");
/// let dynamic: &dyn DynTyped = &value;
///
/// assert!(is_expected_type::<String>(Some(dynamic)));
/// assert!(!is_expected_type::<u32>(Some(dynamic)));
/// ```
#[track_caller]
pub fn is_expected_type<T: Any>(value: Option<&dyn DynTyped>) -> bool {
    match value {
        None => {
            emit(ABSENT_MESSAGE);
            false
        }
        Some(actual) if actual.as_any().is::<T>() => true,
        Some(actual) => {
            emit(&format!(
                "value has the wrong type: actual {}, expected {}",
                actual.type_name(),
                type_name::<T>()
            ));
            false
        }
    }
}
