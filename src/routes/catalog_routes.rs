use axum::{routing::get, Json, Router};

use crate::dto::catalog_dto::BikeModelResponse;
use crate::dto::common::ApiResponse;
use crate::services::catalog;
use crate::state::AppState;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new().route("/models", get(list_models))
}

async fn list_models() -> Json<ApiResponse<Vec<BikeModelResponse>>> {
    let models = catalog::all().iter().map(BikeModelResponse::from).collect();

    Json(ApiResponse::success(models))
}
