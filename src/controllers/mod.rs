pub mod catalog_controller;
pub mod lead_controller;
pub mod showroom_controller;
