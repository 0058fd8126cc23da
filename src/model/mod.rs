//! Wire-format DTOs and repository parameter models.
//!
//! DTOs use the camelCase JSON field names the board client speaks (`listId`,
//! `dueDate`, `createdAt`). Parameter structs carry validated data between the
//! controller, service, and data layers.

pub mod api;
pub mod card;
pub mod list;
