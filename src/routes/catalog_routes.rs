use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::catalog_dto::{
    CatalogPageResponse, CatalogQuery, DetailQuery, OptionsQuery, VehicleDetailResponse,
};
use crate::services::catalog_service::FilterOptions;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/:id", get(get_vehicle))
        .route("/options", get(get_options))
}

async fn list_vehicles(
    State(state): State<AppState>,
    query: Result<Query<CatalogQuery>, QueryRejection>,
) -> Result<Json<CatalogPageResponse>, AppError> {
    let Query(query) = query?;
    let controller = CatalogController::new(&state);
    let response = controller.search(query)?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    query: Result<Query<DetailQuery>, QueryRejection>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let controller = CatalogController::new(&state);
    let response = controller.detail(id, query.image.unwrap_or(0))?;
    Ok(Json(response))
}

async fn get_options(
    State(state): State<AppState>,
    query: Result<Query<OptionsQuery>, QueryRejection>,
) -> Result<Json<FilterOptions>, AppError> {
    let Query(query) = query?;
    let controller = CatalogController::new(&state);
    Ok(Json(controller.options(query)))
}
