//! Size and bounds checking across container shapes.
//!
//! The original problem here is one routine serving four size concepts:
//! growable sequences, fixed arrays, double-ended queues, and indexable
//! text. Rather than inspecting types at runtime, the shapes implement two
//! small capability traits — [`ElementCount`] for "how many elements" and
//! [`Elements`] for "give me element `i`" — and the bounds logic is written
//! once against those. A shape outside the set is a compile error, not a
//! logged sentinel.
//!
//! Text is counted in characters, not bytes, so `has_index` and the
//! character guards in [`crate::guard`] agree on positions.

/// Bounds checks funnelled through one minimum-length helper.
pub mod bounds;
/// The element-counting capability and its implementations.
pub mod count;
/// The element-retrieval capability and its implementations.
pub mod elements;

pub use bounds::{has_index, is_minimum_length, is_not_empty, length_of};
pub use count::ElementCount;
pub use elements::Elements;
