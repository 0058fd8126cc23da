use axum::{response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Health check endpoint.
///
/// Returns a greeting confirming the API is up. Performs no database access.
///
/// # Returns
/// - `200 OK` - Service is running
#[utoipa::path(
    get,
    path = "/",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is running", body = MessageDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(MessageDto {
        message: "Taskboard API is running".to_string(),
    })
}
