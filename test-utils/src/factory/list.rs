//! List factory for creating test list entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lists with customizable fields.
///
/// Provides a builder pattern for creating list entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::list::ListFactory;
///
/// let list = ListFactory::new(&db)
///     .title("In Progress")
///     .position(3)
///     .build()
///     .await?;
/// ```
pub struct ListFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    position: i32,
}

impl<'a> ListFactory<'a> {
    /// Creates a new ListFactory with default values.
    ///
    /// Defaults:
    /// - title: `"List {id}"` where id is auto-incremented
    /// - position: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ListFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("List {}", id),
            position: 0,
        }
    }

    /// Sets the list title.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the list position.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Builds and inserts the list entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::list::Model)` - Created list entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::list::Model, DbErr> {
        let now = Utc::now();

        entity::list::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            position: ActiveValue::Set(self.position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a list with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::list::Model)` - Created list entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_list(db: &DatabaseConnection) -> Result<entity::list::Model, DbErr> {
    ListFactory::new(db).build().await
}

/// Creates a list at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `position` - Board-level position for the list
///
/// # Returns
/// - `Ok(entity::list::Model)` - Created list entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_list_at(
    db: &DatabaseConnection,
    position: i32,
) -> Result<entity::list::Model, DbErr> {
    ListFactory::new(db).position(position).build().await
}
