use sea_orm::DatabaseConnection;

use crate::{data::list::ListRepository, error::AppError, model::list::UpsertListParams};

pub struct ListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a list appended to the end of the board.
    ///
    /// The new position is one past the current maximum (saturating at the
    /// i32 upper bound), or 0 for an empty board. The max read and the insert
    /// are separate statements: concurrent
    /// appends can observe the same maximum and end up with duplicate
    /// positions, which the ordering contract tolerates.
    pub async fn create(&self, title: String) -> Result<entity::list::Model, AppError> {
        let repo = ListRepository::new(self.db);

        let position = repo.max_position().await?.map_or(0, |max| max.saturating_add(1));

        let list = repo.create(title, position).await?;

        Ok(list)
    }

    /// Gets all lists in board order (ascending by position).
    pub async fn get_all(&self) -> Result<Vec<entity::list::Model>, AppError> {
        let repo = ListRepository::new(self.db);

        repo.get_all().await.map_err(Into::into)
    }

    /// Persists a client-side reorder.
    ///
    /// Each submitted record overwrites its stored counterpart, including the
    /// position; the stored records for the submitted IDs are returned.
    pub async fn reorder(
        &self,
        items: Vec<UpsertListParams>,
    ) -> Result<Vec<entity::list::Model>, AppError> {
        let repo = ListRepository::new(self.db);

        repo.save_many(items).await.map_err(Into::into)
    }

    /// Deletes a list and, through the cascading foreign key, all of its cards.
    /// Returns false if no list with the ID exists.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ListRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
