//! Database repository layer for the board's two collections.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! lists and cards. Repositories hold a borrowed connection and expose the ordering
//! primitives (max-position reads, ordered scans, upserts, deletes); the position
//! assignment policy itself lives in the service layer.

pub mod card;
pub mod list;
