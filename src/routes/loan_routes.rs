use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::dto::common::ApiResponse;
use crate::dto::loan_dto::{
    ConvertTenureRequest, ConvertTenureResponse, EstimateLoanRequest, EstimateLoanResponse,
    LoanTermsResponse,
};
use crate::services::loan_estimator::{self, EstimateRequest};
use crate::state::AppState;

pub fn create_loan_router() -> Router<AppState> {
    Router::new()
        .route("/estimate", post(estimate_loan))
        .route("/convert-tenure", post(convert_tenure))
        .route("/terms", get(loan_terms))
}

// La estimación nunca falla: las entradas inválidas degradan a una
// estimación cercana a cero en lugar de devolver un error.
async fn estimate_loan(
    Json(request): Json<EstimateLoanRequest>,
) -> Json<ApiResponse<EstimateLoanResponse>> {
    let estimate = loan_estimator::estimate(&EstimateRequest {
        on_road_price: request.on_road_price,
        down_payment: request.down_payment,
        annual_flat_rate_percent: request.annual_flat_rate_percent,
        tenure_value: request.tenure_value,
        tenure_unit: request.tenure_unit,
    });

    log::debug!(
        "💰 Estimación: principal {} a {}% por {} meses",
        estimate.financed_principal,
        request.annual_flat_rate_percent,
        estimate.tenure_months
    );

    Json(ApiResponse::success(EstimateLoanResponse::from_estimate(
        estimate,
        request.locale,
    )))
}

async fn convert_tenure(
    Json(request): Json<ConvertTenureRequest>,
) -> Json<ApiResponse<ConvertTenureResponse>> {
    let value = loan_estimator::convert_tenure(request.value, request.from_unit, request.to_unit);

    Json(ApiResponse::success(ConvertTenureResponse {
        value,
        unit: request.to_unit,
    }))
}

async fn loan_terms() -> Json<ApiResponse<LoanTermsResponse>> {
    Json(ApiResponse::success(LoanTermsResponse::current()))
}
