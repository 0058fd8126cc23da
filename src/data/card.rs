use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::card::{CreateCardParams, UpsertCardParams};

/// Repository providing database operations for cards.
pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardRepository<'a> {
    /// Creates a new CardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CardRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new card at the given position within its list.
    ///
    /// The referenced list is not checked here; a dangling `list_id` is
    /// rejected by the foreign key constraint.
    ///
    /// # Arguments
    /// - `params` - Card fields as accepted from the client
    /// - `position` - Sort key within the owning list, computed by the service
    ///
    /// # Returns
    /// - `Ok(Model)` - The created card with generated ID
    /// - `Err(DbErr)` - Database error during insert (including FK rejection)
    pub async fn create(
        &self,
        params: CreateCardParams,
        position: i32,
    ) -> Result<entity::card::Model, DbErr> {
        let now = Utc::now();

        entity::card::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            position: ActiveValue::Set(position),
            completed: ActiveValue::Set(false),
            due_date: ActiveValue::Set(params.due_date),
            list_id: ActiveValue::Set(params.list_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every card, across all lists, sorted ascending by position.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All cards in position order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::card::Model>, DbErr> {
        entity::prelude::Card::find()
            .order_by_asc(entity::card::Column::Position)
            .all(self.db)
            .await
    }

    /// Gets a card by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The card
    /// - `Ok(None)` - No card with that ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::card::Model>, DbErr> {
        entity::prelude::Card::find_by_id(id).one(self.db).await
    }

    /// Gets the highest card position within a single list.
    ///
    /// # Arguments
    /// - `list_id` - Owning list to scope the search to
    ///
    /// # Returns
    /// - `Ok(Some(position))` - Highest position among the list's cards
    /// - `Ok(None)` - The list has no cards
    /// - `Err(DbErr)` - Database error during query
    pub async fn max_position_in_list(&self, list_id: i32) -> Result<Option<i32>, DbErr> {
        let top = entity::prelude::Card::find()
            .filter(entity::card::Column::ListId.eq(list_id))
            .order_by_desc(entity::card::Column::Position)
            .one(self.db)
            .await?;

        Ok(top.map(|card| card.position))
    }

    /// Upserts each submitted record by ID with full-overwrite semantics.
    ///
    /// All mutable columns including `list_id` are overwritten, so a reorder
    /// that drags a card into another list persists the move in the same call.
    /// `updated_at` is refreshed; an ID with no stored record is inserted.
    /// After all writes, the records with the submitted IDs are re-read and
    /// returned in storage order.
    ///
    /// # Arguments
    /// - `params` - Full records as submitted by the client
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Stored records for the submitted IDs
    /// - `Err(DbErr)` - Database error during upsert or re-read
    pub async fn save_many(
        &self,
        params: Vec<UpsertCardParams>,
    ) -> Result<Vec<entity::card::Model>, DbErr> {
        let ids: Vec<i32> = params.iter().map(|param| param.id).collect();
        let now = Utc::now();

        for param in params {
            entity::prelude::Card::insert(entity::card::ActiveModel {
                id: ActiveValue::Set(param.id),
                title: ActiveValue::Set(param.title),
                description: ActiveValue::Set(param.description),
                position: ActiveValue::Set(param.position),
                completed: ActiveValue::Set(param.completed),
                due_date: ActiveValue::Set(param.due_date),
                list_id: ActiveValue::Set(param.list_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .on_conflict(
                OnConflict::column(entity::card::Column::Id)
                    .update_columns([
                        entity::card::Column::Title,
                        entity::card::Column::Description,
                        entity::card::Column::Position,
                        entity::card::Column::Completed,
                        entity::card::Column::DueDate,
                        entity::card::Column::ListId,
                        entity::card::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;
        }

        entity::prelude::Card::find()
            .filter(entity::card::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Deletes a card.
    ///
    /// # Returns
    /// - `Ok(())` - Card deleted (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Card::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
