use serde::{Deserialize, Serialize};

use crate::models::lead::Store;
use crate::models::showroom::{CategoryCard, HeroSlide, NavItem};

// Query de navegación: ruta actual del front
#[derive(Debug, Default, Deserialize)]
pub struct NavigationQuery {
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoreOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<Store> for StoreOption {
    fn from(store: Store) -> Self {
        Self {
            value: store.slug(),
            label: store.label(),
        }
    }
}

// Response de la home
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub hero_slides: &'static [HeroSlide],
    pub categories: &'static [CategoryCard],
    pub schedule_mosaic: &'static [&'static str],
    pub stores: Vec<StoreOption>,
    pub navigation: Vec<NavItem>,
    pub whatsapp_url: String,
}
