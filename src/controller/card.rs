use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::{ErrorDto, MessageDto},
        card::{
            CardDto, CardInputDto, CreateCardDto, CreateCardParams, ReorderCardsDto,
            UpsertCardParams,
        },
    },
    service::card::CardService,
    state::AppState,
    util::parse::parse_id,
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// Create a new card.
///
/// Appends a card to the end of its owning list: its position is one past the
/// highest position among that list's cards, or 0 when the list is empty.
/// The owning list is not validated up front; a dangling `listId` surfaces as
/// a store error.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Card creation data (title, listId, optional description and dueDate)
///
/// # Returns
/// - `201 Created` - Successfully created card, position included
/// - `500 Internal Server Error` - Database error (including unknown listId)
#[utoipa::path(
    post,
    path = "/cards",
    tag = CARD_TAG,
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Successfully created card", body = CardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    Json(payload): Json<CreateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let card = service.create(CreateCardParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(CardDto::from_entity(card))))
}

/// Get all cards across all lists.
///
/// Returns every card sorted ascending by position. The surface is not scoped
/// to a list; clients group by `listId` themselves.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Cards sorted ascending by position
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cards",
    tag = CARD_TAG,
    responses(
        (status = 200, description = "Cards sorted ascending by position", body = Vec<CardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let cards = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(cards.into_iter().map(CardDto::from_entity).collect::<Vec<_>>()),
    ))
}

/// Bulk reposition cards.
///
/// Persists a drag-and-drop reorder. Accepts a single record or an array;
/// each record overwrites its stored counterpart in full, so submitting a new
/// `listId` moves the card between lists in the same call. The response
/// contains the stored records for the submitted IDs in storage order.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Full card records with client-assigned positions
///
/// # Returns
/// - `200 OK` - Updated cards (submitted IDs only)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/cards",
    tag = CARD_TAG,
    request_body = ReorderCardsDto,
    responses(
        (status = 200, description = "Successfully updated cards", body = Vec<CardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cards(
    State(state): State<AppState>,
    Json(payload): Json<ReorderCardsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let items: Vec<CardInputDto> = payload.cards.into();
    let params = items.into_iter().map(UpsertCardParams::from).collect();

    let cards = service.reorder(params).await?;

    Ok((
        StatusCode::OK,
        Json(cards.into_iter().map(CardDto::from_entity).collect::<Vec<_>>()),
    ))
}

/// Delete a card.
///
/// A non-numeric ID is treated as an ID that matches nothing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Raw ID path segment, parsed leniently
///
/// # Returns
/// - `200 OK` - Card deleted
/// - `404 Not Found` - No card with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = String, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted card", body = MessageDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let deleted = match parse_id(&id) {
        Some(id) => service.delete(id).await?,
        None => false,
    };

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Card deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Card not found".to_string()))
    }
}
