use axum::{
    extract::{rejection::JsonRejection, State},
    middleware,
    routing::post,
    Json, Router,
};

use crate::controllers::lead_controller::LeadController;
use crate::dto::api_response::ApiResponse;
use crate::dto::lead_dto::{
    ContactLeadRequest, CreditAnalysisRequest, CreditAnalysisResponse, DiscountLeadRequest,
    VisitRequest,
};
use crate::middleware::rate_limit::rate_limit_middleware;
use crate::services::lead_service::LeadReceipt;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de formularios, con rate limiting por IP
pub fn create_lead_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/discount", post(submit_discount))
        .route("/visit", post(submit_visit))
        .route("/credit-analysis", post(submit_credit_analysis))
        .route_layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}

async fn submit_contact(
    State(state): State<AppState>,
    request: Result<Json<ContactLeadRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LeadReceipt>>, AppError> {
    let Json(request) = request?;
    let controller = LeadController::new(&state);
    let receipt = controller.contact(request).await?;
    let message = receipt.message.to_string();
    Ok(Json(ApiResponse::success_with_message(receipt, message)))
}

async fn submit_discount(
    State(state): State<AppState>,
    request: Result<Json<DiscountLeadRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LeadReceipt>>, AppError> {
    let Json(request) = request?;
    let controller = LeadController::new(&state);
    let receipt = controller.discount(request).await?;
    let message = receipt.message.to_string();
    Ok(Json(ApiResponse::success_with_message(receipt, message)))
}

async fn submit_visit(
    State(state): State<AppState>,
    request: Result<Json<VisitRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LeadReceipt>>, AppError> {
    let Json(request) = request?;
    let controller = LeadController::new(&state);
    let receipt = controller.visit(request).await?;
    let message = receipt.message.to_string();
    Ok(Json(ApiResponse::success_with_message(receipt, message)))
}

async fn submit_credit_analysis(
    State(state): State<AppState>,
    request: Result<Json<CreditAnalysisRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CreditAnalysisResponse>>, AppError> {
    let Json(request) = request?;
    let controller = LeadController::new(&state);
    let response = controller.credit_analysis(request).await?;
    let message = response.receipt.message.to_string();
    Ok(Json(ApiResponse::success_with_message(response, message)))
}
