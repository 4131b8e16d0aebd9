//! Tigers Seminovos - API del showroom de vehículos seminuevos
//!
//! Catálogo generado en memoria, filtros dependientes con paginación,
//! formularios de leads y enlaces de WhatsApp.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use middleware::cors::cors_for;
use state::AppState;

/// Router completo de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_for(&state.config.cors_origins);

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api", routes::showroom_routes::create_showroom_router())
        .nest("/api/catalog", routes::catalog_routes::create_catalog_router())
        .nest("/api/leads", routes::lead_routes::create_lead_router(state.clone()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API Tigers Seminovos funcionando corretamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
