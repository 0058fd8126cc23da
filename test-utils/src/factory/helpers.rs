//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a list with one card attached.
///
/// Convenience method for tests that need a populated list without caring
/// about the specifics of either entity.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((list, card))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_list_with_card(
    db: &DatabaseConnection,
) -> Result<(entity::list::Model, entity::card::Model), DbErr> {
    let list = crate::factory::list::create_list(db).await?;
    let card = crate::factory::card::create_card(db, list.id).await?;

    Ok((list, card))
}
