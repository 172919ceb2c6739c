use axum::{routing::get, Json, Router};

use crate::dto::common::ApiResponse;
use crate::dto::showroom_dto::ShowroomResponse;
use crate::services::showroom_directory;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_showroom_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_showrooms))
        .route("/primary", get(get_primary_showroom))
}

async fn list_showrooms() -> Json<ApiResponse<Vec<ShowroomResponse>>> {
    let showrooms = showroom_directory::all()
        .iter()
        .map(ShowroomResponse::from)
        .collect();

    Json(ApiResponse::success(showrooms))
}

async fn get_primary_showroom() -> Result<Json<ApiResponse<ShowroomResponse>>, AppError> {
    let showroom = showroom_directory::primary()
        .ok_or_else(|| not_found_error("Showroom", "primary"))?;

    Ok(Json(ApiResponse::success(ShowroomResponse::from(showroom))))
}
