use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::showroom_controller::ShowroomController;
use crate::dto::api_response::ApiResponse;
use crate::dto::showroom_dto::{HomeResponse, NavigationQuery};
use crate::models::showroom::NavItem;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_showroom_router() -> Router<AppState> {
    Router::new()
        .route("/home", get(get_home))
        .route("/navigation", get(get_navigation))
}

async fn get_home(State(state): State<AppState>) -> Json<HomeResponse> {
    let controller = ShowroomController::new(&state);
    Json(controller.home())
}

async fn get_navigation(
    State(state): State<AppState>,
    query: Result<Query<NavigationQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<NavItem>>>, AppError> {
    let Query(query) = query?;
    let controller = ShowroomController::new(&state);
    Ok(Json(ApiResponse::success(
        controller.navigation(query.path.as_deref()),
    )))
}
