use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::OneOrMany;

/// List as exposed over the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDto {
    pub id: i32,
    pub title: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListDto {
    /// Converts an entity model to the wire representation.
    pub fn from_entity(entity: entity::list::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Payload for `POST /lists`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListDto {
    pub title: String,
}

/// A full list record as submitted by the client during a reorder.
///
/// Fields the client echoes back but the server recomputes (timestamps) are
/// ignored on deserialization.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListInputDto {
    pub id: i32,
    pub title: String,
    pub position: i32,
}

/// Payload for `PUT /lists`. A single record or an array of records.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderListsDto {
    pub lists: OneOrMany<ListInputDto>,
}

/// Parameters for a full-overwrite upsert of a list during bulk reposition.
#[derive(Debug, Clone)]
pub struct UpsertListParams {
    pub id: i32,
    pub title: String,
    pub position: i32,
}

impl From<ListInputDto> for UpsertListParams {
    fn from(dto: ListInputDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            position: dto.position,
        }
    }
}
