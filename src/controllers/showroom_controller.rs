use crate::dto::showroom_dto::{HomeResponse, StoreOption};
use crate::models::lead::Store;
use crate::models::showroom::{
    navigation, NavItem, CATEGORY_CARDS, HERO_SLIDES, SCHEDULE_MOSAIC,
};
use crate::state::AppState;
use crate::utils::whatsapp;

pub struct ShowroomController {
    whatsapp_number: String,
}

impl ShowroomController {
    pub fn new(state: &AppState) -> Self {
        Self {
            whatsapp_number: state.config.whatsapp_number.clone(),
        }
    }

    pub fn home(&self) -> HomeResponse {
        HomeResponse {
            hero_slides: HERO_SLIDES,
            categories: CATEGORY_CARDS,
            schedule_mosaic: SCHEDULE_MOSAIC,
            stores: Store::ALL.iter().copied().map(StoreOption::from).collect(),
            navigation: navigation("/"),
            whatsapp_url: whatsapp::contact_link(&self.whatsapp_number),
        }
    }

    pub fn navigation(&self, path: Option<&str>) -> Vec<NavItem> {
        navigation(path.unwrap_or("/"))
    }
}
