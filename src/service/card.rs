use sea_orm::DatabaseConnection;

use crate::{
    data::card::CardRepository,
    error::AppError,
    model::card::{CreateCardParams, UpsertCardParams},
};

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a card appended to the end of its list.
    ///
    /// The new position is one past the current maximum within the owning
    /// list (saturating at the i32 upper bound), or 0 when that list has no
    /// cards. Positions in other lists do
    /// not influence the result. As with list creation, the max read and the
    /// insert are not atomic and racing appends may duplicate a position.
    pub async fn create(&self, params: CreateCardParams) -> Result<entity::card::Model, AppError> {
        let repo = CardRepository::new(self.db);

        let position = repo
            .max_position_in_list(params.list_id)
            .await?
            .map_or(0, |max| max.saturating_add(1));

        let card = repo.create(params, position).await?;

        Ok(card)
    }

    /// Gets all cards, across lists, ascending by position.
    pub async fn get_all(&self) -> Result<Vec<entity::card::Model>, AppError> {
        let repo = CardRepository::new(self.db);

        repo.get_all().await.map_err(Into::into)
    }

    /// Persists a client-side reorder, including cross-list moves carried by
    /// the submitted `list_id` values.
    pub async fn reorder(
        &self,
        items: Vec<UpsertCardParams>,
    ) -> Result<Vec<entity::card::Model>, AppError> {
        let repo = CardRepository::new(self.db);

        repo.save_many(items).await.map_err(Into::into)
    }

    /// Deletes a card. Returns false if no card with the ID exists.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CardRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
