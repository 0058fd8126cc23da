//! Business logic layer.
//!
//! Services own the ordered-collection rules: an appended member's position is
//! one past the current maximum of its sibling set (0 for an empty set),
//! reorders pass the client's recomputed records through to storage, and
//! deletes check existence first so the controller can distinguish 404.

pub mod card;
pub mod list;
