pub mod catalog_service;
pub mod lead_service;
pub mod vehicle_generator;
