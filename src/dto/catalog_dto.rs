use serde::{Deserialize, Serialize};

use crate::models::showroom::Gallery;
use crate::models::vehicle::{Armor, Body, Color, Fuel, UnknownLabel, Vehicle};
use crate::services::catalog_service::{CatalogFilters, CatalogPage, FilterOptions};
use crate::utils::format::{km_pt_br, model_year};
use crate::utils::whatsapp;

// Query del catálogo: /api/catalog/vehicles?make=Honda&body=SUV,Sedan&q=civic&page=2
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub armor: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub body: Option<String>,
    pub q: Option<String>,
    pub page: Option<String>,
}

fn parse_optional<T: std::str::FromStr<Err = UnknownLabel>>(
    value: &Option<String>,
) -> Result<Option<T>, UnknownLabel> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some),
    }
}

impl CatalogQuery {
    /// Página pedida; valores no numéricos o menores que 1 piden la primera.
    /// El límite superior lo ajusta la paginación.
    pub fn page_number(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page > 0)
            .map(|page| usize::try_from(page).unwrap_or(usize::MAX))
            .unwrap_or(1)
    }

    /// Aplica los parámetros en el mismo orden que el sidebar:
    /// marca, modelo, color, blindaje, año mínimo y luego máximo.
    pub fn to_filters(&self) -> Result<CatalogFilters, UnknownLabel> {
        let mut filters = CatalogFilters::new();
        filters.select_make(self.make.clone());
        filters.select_model(self.model.clone());
        filters.select_color(parse_optional::<Color>(&self.color)?);
        filters.select_armor(parse_optional::<Armor>(&self.armor)?);
        filters.set_year_min(self.year_min);
        filters.set_year_max(self.year_max);

        if let Some(bodies) = &self.body {
            for raw in bodies.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let body: Body = raw.parse()?;
                if !filters.bodies().contains(&body) {
                    filters.toggle_body(body);
                }
            }
        }

        if let Some(q) = &self.q {
            filters.set_search(q.as_str());
        }

        Ok(filters)
    }
}

// Query de opciones dependientes
#[derive(Debug, Default, Deserialize)]
pub struct OptionsQuery {
    pub make: Option<String>,
    pub model: Option<String>,
}

impl OptionsQuery {
    pub fn to_filters(&self) -> CatalogFilters {
        let mut filters = CatalogFilters::new();
        filters.select_make(self.make.clone());
        filters.select_model(self.model.clone());
        filters
    }
}

// Tarjeta de vehículo del grid
#[derive(Debug, Serialize)]
pub struct VehicleCard {
    pub id: u32,
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub year_label: String,
    pub km: u32,
    pub km_label: String,
    pub fuel: Fuel,
    pub armor: Armor,
    pub color: Color,
    pub body: Body,
    pub image: String,
    pub whatsapp_url: String,
}

impl VehicleCard {
    pub fn from_vehicle(vehicle: &Vehicle, whatsapp_number: &str) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name.clone(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            year_label: model_year(vehicle.year),
            km: vehicle.km,
            km_label: km_pt_br(vehicle.km),
            fuel: vehicle.fuel,
            armor: vehicle.armor,
            color: vehicle.color,
            body: vehicle.body,
            image: vehicle.image.clone(),
            whatsapp_url: whatsapp::vehicle_link(whatsapp_number, vehicle),
        }
    }
}

// Response de una página del catálogo
#[derive(Debug, Serialize)]
pub struct CatalogPageResponse {
    pub items: Vec<VehicleCard>,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
    pub total_items: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub options: FilterOptions,
}

impl CatalogPageResponse {
    pub fn new(page: CatalogPage<'_>, options: FilterOptions, whatsapp_number: &str) -> Self {
        Self {
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            items: page
                .items
                .iter()
                .map(|v| VehicleCard::from_vehicle(v, whatsapp_number))
                .collect(),
            page: page.page,
            total_pages: page.total_pages,
            pages: page.page_numbers,
            total_items: page.total_items,
            page_size: page.page_size,
            options,
        }
    }
}

// Query del detalle: imagen seleccionada en la galería
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub image: Option<usize>,
}

// Estado de la galería del modal de detalle
#[derive(Debug, Serialize)]
pub struct GalleryView {
    pub current: usize,
    pub previous: usize,
    pub next: usize,
    pub counter: String,
    pub navigation: bool,
}

impl GalleryView {
    pub fn new(len: usize, selected: usize) -> Self {
        let mut gallery = Gallery::new(len);
        gallery.go_to(selected);

        let mut previous = gallery;
        previous.previous();
        let mut next = gallery;
        next.next();

        Self {
            current: gallery.current(),
            previous: previous.current(),
            next: next.current(),
            counter: gallery.counter_label(),
            navigation: gallery.has_navigation(),
        }
    }
}

// Response del modal de detalle
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    #[serde(flatten)]
    pub card: VehicleCard,
    pub images: Vec<String>,
    pub gallery: GalleryView,
}

impl VehicleDetailResponse {
    pub fn from_vehicle(vehicle: &Vehicle, whatsapp_number: &str, selected_image: usize) -> Self {
        Self {
            card: VehicleCard::from_vehicle(vehicle, whatsapp_number),
            images: vehicle.images.clone(),
            gallery: GalleryView::new(vehicle.images.len(), selected_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_page(page: &str) -> CatalogQuery {
        CatalogQuery {
            page: Some(page.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_page_number_is_lenient() {
        assert_eq!(CatalogQuery::default().page_number(), 1);
        assert_eq!(with_page("3").page_number(), 3);
        assert_eq!(with_page(" 7 ").page_number(), 7);
        assert_eq!(with_page("0").page_number(), 1);
        assert_eq!(with_page("-1").page_number(), 1);
        assert_eq!(with_page("dos").page_number(), 1);
        assert_eq!(with_page("").page_number(), 1);
    }
}
