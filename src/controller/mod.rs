//! HTTP request handlers for the REST surface.

pub mod card;
pub mod health;
pub mod list;
