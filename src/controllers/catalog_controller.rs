use std::sync::Arc;
use tracing::debug;

use crate::dto::catalog_dto::{
    CatalogPageResponse, CatalogQuery, OptionsQuery, VehicleDetailResponse,
};
use crate::services::catalog_service::{Catalog, FilterOptions};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

pub struct CatalogController {
    catalog: Arc<Catalog>,
    page_size: usize,
    whatsapp_number: String,
}

impl CatalogController {
    pub fn new(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
            page_size: state.config.page_size,
            whatsapp_number: state.config.whatsapp_number.clone(),
        }
    }

    pub fn search(&self, query: CatalogQuery) -> AppResult<CatalogPageResponse> {
        let filters = query.to_filters()?;
        let page = self
            .catalog
            .query(&filters, query.page_number(), self.page_size);
        debug!(
            "🔍 Catálogo: {} resultados, página {}/{}",
            page.total_items, page.page, page.total_pages
        );

        let options = self.catalog.options(&filters);
        Ok(CatalogPageResponse::new(page, options, &self.whatsapp_number))
    }

    pub fn options(&self, query: OptionsQuery) -> FilterOptions {
        self.catalog.options(&query.to_filters())
    }

    pub fn detail(&self, id: u32, image: usize) -> AppResult<VehicleDetailResponse> {
        let vehicle = self
            .catalog
            .find(id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(VehicleDetailResponse::from_vehicle(vehicle, &self.whatsapp_number, image))
    }
}
