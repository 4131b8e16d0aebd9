//! Servicio de catálogo
//!
//! Filtros, opciones dependientes de los selects y paginación del inventario.
//! Todo es cálculo síncrono sobre la colección inmutable; ninguna operación
//! falla y las páginas fuera de rango se ajustan en silencio.

use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::Range;

use crate::models::vehicle::{Armor, Body, Color, Vehicle};
use crate::services::vehicle_generator::generate_vehicles;

/// Tamaño de página del catálogo
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Inventario inmutable
#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// Catálogo con `count` carros generados más las motos fijas
    pub fn generate(count: usize) -> Self {
        Self::new(generate_vehicles(count))
    }

    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Subconjunto filtrado, en el orden original
    pub fn filter(&self, filters: &CatalogFilters) -> Vec<&Vehicle> {
        let query = filters.normalized_search();
        self.vehicles
            .iter()
            .filter(|v| filters.matches_with_query(v, &query))
            .collect()
    }

    /// Opciones de los selects según la marca y el modelo elegidos
    pub fn options(&self, filters: &CatalogFilters) -> FilterOptions {
        let by_make: Vec<&Vehicle> = match &filters.make {
            Some(make) => self.vehicles.iter().filter(|v| &v.make == make).collect(),
            None => self.vehicles.iter().collect(),
        };
        let by_model: Vec<&Vehicle> = match &filters.model {
            Some(model) => self.vehicles.iter().filter(|v| &v.model == model).collect(),
            None => self.vehicles.iter().collect(),
        };

        FilterOptions {
            makes: distinct_sorted(self.vehicles.iter().map(|v| v.make.as_str())),
            models: distinct_sorted(by_make.iter().map(|v| v.model.as_str())),
            colors: distinct_sorted(by_model.iter().map(|v| v.color.label())),
            armors: distinct_sorted(self.vehicles.iter().map(|v| v.armor.label())),
            years: self
                .vehicles
                .iter()
                .map(|v| v.year)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            bodies: Body::ALL.to_vec(),
        }
    }

    /// Filtra y pagina en una sola pasada
    pub fn query(&self, filters: &CatalogFilters, page: usize, page_size: usize) -> CatalogPage<'_> {
        let filtered = self.filter(filters);
        let pagination = Pagination::new(page_size, filtered.len());
        let page = pagination.clamp(page);
        let items = filtered[pagination.window(page)].to_vec();

        CatalogPage {
            items,
            page,
            total_pages: pagination.total_pages(),
            page_numbers: pagination.page_numbers(),
            total_items: filtered.len(),
            page_size: pagination.page_size(),
        }
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Criterios de filtro del catálogo, combinados con AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilters {
    make: Option<String>,
    model: Option<String>,
    color: Option<Color>,
    armor: Option<Armor>,
    year_min: Option<i32>,
    year_max: Option<i32>,
    bodies: BTreeSet<Body>,
    search: String,
}

impl CatalogFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn armor(&self) -> Option<Armor> {
        self.armor
    }

    pub fn year_range(&self) -> (Option<i32>, Option<i32>) {
        (self.year_min, self.year_max)
    }

    pub fn bodies(&self) -> &BTreeSet<Body> {
        &self.bodies
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Nueva marca: limpia modelo y color
    pub fn select_make(&mut self, make: Option<String>) {
        self.make = non_blank(make);
        self.model = None;
        self.color = None;
    }

    /// Nuevo modelo: limpia el color
    pub fn select_model(&mut self, model: Option<String>) {
        self.model = non_blank(model);
        self.color = None;
    }

    pub fn select_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn select_armor(&mut self, armor: Option<Armor>) {
        self.armor = armor;
    }

    /// Si el mínimo supera al máximo, el máximo sube hasta el mínimo
    pub fn set_year_min(&mut self, year: Option<i32>) {
        self.year_min = year;
        if let (Some(min), Some(max)) = (self.year_min, self.year_max) {
            if min > max {
                self.year_max = Some(min);
            }
        }
    }

    /// Si el máximo queda debajo del mínimo, el mínimo baja hasta el máximo
    pub fn set_year_max(&mut self, year: Option<i32>) {
        self.year_max = year;
        if let (Some(min), Some(max)) = (self.year_min, self.year_max) {
            if max < min {
                self.year_min = Some(max);
            }
        }
    }

    pub fn toggle_body(&mut self, body: Body) {
        if !self.bodies.remove(&body) {
            self.bodies.insert(body);
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.matches_with_query(vehicle, &self.normalized_search())
    }

    fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase()
    }

    fn matches_with_query(&self, vehicle: &Vehicle, query: &str) -> bool {
        if let Some(make) = &self.make {
            if &vehicle.make != make {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if &vehicle.model != model {
                return false;
            }
        }
        if self.color.is_some_and(|c| c != vehicle.color) {
            return false;
        }
        if self.armor.is_some_and(|a| a != vehicle.armor) {
            return false;
        }
        if self.year_min.is_some_and(|min| vehicle.year < min) {
            return false;
        }
        if self.year_max.is_some_and(|max| vehicle.year > max) {
            return false;
        }
        if !self.bodies.is_empty() && !self.bodies.contains(&vehicle.body) {
            return false;
        }
        query.is_empty() || vehicle.search_haystack().contains(query)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Opciones de los selects del sidebar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub makes: Vec<String>,
    pub models: Vec<String>,
    pub colors: Vec<String>,
    pub armors: Vec<String>,
    pub years: Vec<i32>,
    pub bodies: Vec<Body>,
}

/// Aritmética de páginas de tamaño fijo, con índices desde 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    pub fn new(page_size: usize, total_items: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Nunca menos de una página
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }

    /// Rango de índices de la página (ya ajustada)
    pub fn window(&self, page: usize) -> Range<usize> {
        let page = self.clamp(page);
        let start = ((page - 1) * self.page_size).min(self.total_items);
        let end = (page * self.page_size).min(self.total_items);
        start..end
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages()).collect()
    }
}

/// Resultado de una consulta al catálogo
#[derive(Debug, Clone)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Vehicle>,
    pub page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
    pub total_items: usize,
    pub page_size: usize,
}

impl CatalogPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Estado de la pantalla de catálogo: filtros y página actual.
/// Cualquier cambio de filtro vuelve a la página 1.
#[derive(Debug, Clone)]
pub struct CatalogBrowser<'a> {
    catalog: &'a Catalog,
    filters: CatalogFilters,
    page: usize,
    page_size: usize,
}

impl<'a> CatalogBrowser<'a> {
    pub fn new(catalog: &'a Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            filters: CatalogFilters::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filters(&self) -> &CatalogFilters {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Aplica un cambio de filtros y vuelve a la primera página
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut CatalogFilters)) {
        let before = self.filters.clone();
        edit(&mut self.filters);
        if self.filters != before {
            self.page = 1;
        }
        self.page = self.pagination().clamp(self.page);
    }

    pub fn filtered(&self) -> Vec<&'a Vehicle> {
        self.catalog.filter(&self.filters)
    }

    pub fn options(&self) -> FilterOptions {
        self.catalog.options(&self.filters)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page_size, self.filtered().len())
    }

    pub fn total_pages(&self) -> usize {
        self.pagination().total_pages()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        self.pagination().page_numbers()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = self.pagination().clamp(page);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn page_items(&self) -> Vec<&'a Vehicle> {
        let filtered = self.filtered();
        let window = Pagination::new(self.page_size, filtered.len()).window(self.page);
        filtered[window].to_vec()
    }

    pub fn current_page(&self) -> CatalogPage<'a> {
        self.catalog.query(&self.filters, self.page, self.page_size)
    }
}
