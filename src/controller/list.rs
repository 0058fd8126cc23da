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
        list::{CreateListDto, ListDto, ListInputDto, ReorderListsDto, UpsertListParams},
    },
    service::list::ListService,
    state::AppState,
    util::parse::parse_id,
};

/// Tag for grouping list endpoints in OpenAPI documentation
pub static LIST_TAG: &str = "list";

/// Create a new list.
///
/// Appends a list to the end of the board: its position is one past the
/// highest existing position, or 0 for an empty board.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - List creation data (title)
///
/// # Returns
/// - `201 Created` - Successfully created list, position included
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/lists",
    tag = LIST_TAG,
    request_body = CreateListDto,
    responses(
        (status = 201, description = "Successfully created list", body = ListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_list(
    State(state): State<AppState>,
    Json(payload): Json<CreateListDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ListService::new(&state.db);

    let list = service.create(payload.title).await?;

    Ok((StatusCode::CREATED, Json(ListDto::from_entity(list))))
}

/// Get all lists in board order.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Lists sorted ascending by position
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/lists",
    tag = LIST_TAG,
    responses(
        (status = 200, description = "Lists sorted ascending by position", body = Vec<ListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lists(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ListService::new(&state.db);

    let lists = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(lists.into_iter().map(ListDto::from_entity).collect::<Vec<_>>()),
    ))
}

/// Bulk reposition lists.
///
/// Persists a drag-and-drop reorder: the client recomputes positions for all
/// affected lists and submits the full records, either a single object or an
/// array, in one call. Each record overwrites its stored counterpart. The
/// response contains the stored records for the submitted IDs in storage
/// order; it is not resorted by position.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Full list records with client-assigned positions
///
/// # Returns
/// - `200 OK` - Updated lists (submitted IDs only)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/lists",
    tag = LIST_TAG,
    request_body = ReorderListsDto,
    responses(
        (status = 200, description = "Successfully updated lists", body = Vec<ListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lists(
    State(state): State<AppState>,
    Json(payload): Json<ReorderListsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ListService::new(&state.db);

    let items: Vec<ListInputDto> = payload.lists.into();
    let params = items.into_iter().map(UpsertListParams::from).collect();

    let lists = service.reorder(params).await?;

    Ok((
        StatusCode::OK,
        Json(lists.into_iter().map(ListDto::from_entity).collect::<Vec<_>>()),
    ))
}

/// Delete a list.
///
/// Removes the list and, through the cascading foreign key, every card it
/// owns. A non-numeric ID is treated as an ID that matches nothing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Raw ID path segment, parsed leniently
///
/// # Returns
/// - `200 OK` - List and its cards deleted
/// - `404 Not Found` - No list with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/lists/{id}",
    tag = LIST_TAG,
    params(
        ("id" = String, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted list", body = MessageDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ListService::new(&state.db);

    let deleted = match parse_id(&id) {
        Some(id) => service.delete(id).await?,
        None => false,
    };

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "List deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("List not found".to_string()))
    }
}
