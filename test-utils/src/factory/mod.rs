//! Factories for creating test entities with sensible defaults.
//!
//! Each factory offers a builder pattern for overriding individual fields plus a
//! convenience function for the common case of "just give me one".

pub mod card;
pub mod helpers;
pub mod list;
