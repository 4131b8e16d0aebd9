pub mod catalog_routes;
pub mod lead_routes;
pub mod showroom_routes;
