use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::OneOrMany;

/// Card as exposed over the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub completed: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CardDto {
    /// Converts an entity model to the wire representation.
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            position: entity.position,
            completed: entity.completed,
            due_date: entity.due_date,
            list_id: entity.list_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Payload for `POST /cards`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardDto {
    pub title: String,
    pub list_id: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// A full card record as submitted by the client during a reorder.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardInputDto {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub position: i32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: i32,
}

/// Payload for `PUT /cards`. A single record or an array of records.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderCardsDto {
    pub cards: OneOrMany<CardInputDto>,
}

/// Parameters for inserting a new card. The position is computed by the
/// service, not supplied by the caller.
#[derive(Debug, Clone)]
pub struct CreateCardParams {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: i32,
}

impl From<CreateCardDto> for CreateCardParams {
    fn from(dto: CreateCardDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            due_date: dto.due_date,
            list_id: dto.list_id,
        }
    }
}

/// Parameters for a full-overwrite upsert of a card during bulk reposition.
#[derive(Debug, Clone)]
pub struct UpsertCardParams {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub completed: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: i32,
}

impl From<CardInputDto> for UpsertCardParams {
    fn from(dto: CardInputDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            position: dto.position,
            completed: dto.completed,
            due_date: dto.due_date,
            list_id: dto.list_id,
        }
    }
}
