use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::list::UpsertListParams;

/// Repository providing database operations for board lists.
pub struct ListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListRepository<'a> {
    /// Creates a new ListRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ListRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new list at the given position.
    ///
    /// Timestamps are assigned here; no other writer sets them.
    ///
    /// # Arguments
    /// - `title` - Display title of the list
    /// - `position` - Board-level sort key, computed by the service
    ///
    /// # Returns
    /// - `Ok(Model)` - The created list with generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, title: String, position: i32) -> Result<entity::list::Model, DbErr> {
        let now = Utc::now();

        entity::list::ActiveModel {
            title: ActiveValue::Set(title),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every list sorted ascending by position.
    ///
    /// Equal positions fall back to storage order; the ordering contract does
    /// not fix the tie-break.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All lists in board order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::list::Model>, DbErr> {
        entity::prelude::List::find()
            .order_by_asc(entity::list::Column::Position)
            .all(self.db)
            .await
    }

    /// Gets a list by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The list
    /// - `Ok(None)` - No list with that ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::list::Model>, DbErr> {
        entity::prelude::List::find_by_id(id).one(self.db).await
    }

    /// Gets the highest position on the board.
    ///
    /// # Returns
    /// - `Ok(Some(position))` - Highest position among existing lists
    /// - `Ok(None)` - No lists exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn max_position(&self) -> Result<Option<i32>, DbErr> {
        let top = entity::prelude::List::find()
            .order_by_desc(entity::list::Column::Position)
            .one(self.db)
            .await?;

        Ok(top.map(|list| list.position))
    }

    /// Upserts each submitted record by ID with full-overwrite semantics.
    ///
    /// Title and position are overwritten and `updated_at` refreshed; an ID
    /// with no stored record is inserted. After all writes, the records with
    /// the submitted IDs are re-read and returned in storage order. The write
    /// loop and the re-read are separate statements with no shared transaction;
    /// overlapping calls interleave with last-write-wins per record.
    ///
    /// # Arguments
    /// - `params` - Full records as submitted by the client
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Stored records for the submitted IDs
    /// - `Err(DbErr)` - Database error during upsert or re-read
    pub async fn save_many(
        &self,
        params: Vec<UpsertListParams>,
    ) -> Result<Vec<entity::list::Model>, DbErr> {
        let ids: Vec<i32> = params.iter().map(|param| param.id).collect();
        let now = Utc::now();

        for param in params {
            entity::prelude::List::insert(entity::list::ActiveModel {
                id: ActiveValue::Set(param.id),
                title: ActiveValue::Set(param.title),
                position: ActiveValue::Set(param.position),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .on_conflict(
                OnConflict::column(entity::list::Column::Id)
                    .update_columns([
                        entity::list::Column::Title,
                        entity::list::Column::Position,
                        entity::list::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;
        }

        entity::prelude::List::find()
            .filter(entity::list::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Deletes a list.
    ///
    /// Cards owned by the list are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(())` - List deleted (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::List::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
