//! Card factory for creating test card entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cards with customizable fields.
///
/// Provides a builder pattern for creating card entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::new(&db, list.id)
///     .title("Write release notes")
///     .position(2)
///     .completed(true)
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    list_id: i32,
    title: String,
    description: Option<String>,
    position: i32,
    completed: bool,
    due_date: Option<chrono::DateTime<Utc>>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Card {id}"` where id is auto-incremented
    /// - description: `None`
    /// - position: `0`
    /// - completed: `false`
    /// - due_date: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `list_id` - List ID this card belongs to
    ///
    /// # Returns
    /// - `CardFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, list_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            list_id,
            title: format!("Card {}", id),
            description: None,
            position: 0,
            completed: false,
            due_date: None,
        }
    }

    /// Sets the card title.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the card description.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the card position within its list.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets whether the card is completed.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets the card due date.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn due_date(mut self, due_date: Option<chrono::DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        let now = Utc::now();

        entity::card::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            position: ActiveValue::Set(self.position),
            completed: ActiveValue::Set(self.completed),
            due_date: ActiveValue::Set(self.due_date),
            list_id: ActiveValue::Set(self.list_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card in the given list with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `list_id` - List ID the card belongs to
///
/// # Returns
/// - `Ok(entity::card::Model)` - Created card entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_card(
    db: &DatabaseConnection,
    list_id: i32,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, list_id).build().await
}

/// Creates a card in the given list at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `list_id` - List ID the card belongs to
/// - `position` - Position of the card within its list
///
/// # Returns
/// - `Ok(entity::card::Model)` - Created card entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_card_at(
    db: &DatabaseConnection,
    list_id: i32,
    position: i32,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, list_id).position(position).build().await
}
