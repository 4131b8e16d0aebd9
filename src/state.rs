//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: configuración, catálogo inmutable y el
//! servicio de leads.

use std::sync::Arc;
use tracing::info;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::rate_limit::RateLimitState;
use crate::services::catalog_service::Catalog;
use crate::services::lead_service::{LeadService, LeadSink, SimulatedLeadSink};
use crate::services::vehicle_generator::{DEFAULT_FLEET_SIZE, DEFAULT_INVENTORY};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub catalog: Arc<Catalog>,
    pub leads: LeadService,
    pub rate_limit: RateLimitState,
}

impl AppState {
    /// Estado con el sink simulado configurado
    pub fn new(config: EnvironmentConfig) -> Self {
        let sink = Arc::new(SimulatedLeadSink::new(config.submission_delay));
        Self::with_sink(config, sink)
    }

    pub fn with_sink(config: EnvironmentConfig, sink: Arc<dyn LeadSink>) -> Self {
        // el inventario por defecto ya está generado; sólo se regenera con otro tamaño
        let catalog = if config.catalog_size == DEFAULT_FLEET_SIZE {
            Catalog::new(DEFAULT_INVENTORY.clone())
        } else {
            Catalog::generate(config.catalog_size)
        };
        info!("🚗 Catálogo cargado con {} vehículos", catalog.len());

        Self {
            rate_limit: RateLimitState::new(&config),
            catalog: Arc::new(catalog),
            leads: LeadService::new(sink),
            config,
        }
    }
}
