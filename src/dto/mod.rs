pub mod api_response;
pub mod catalog_dto;
pub mod lead_dto;
pub mod showroom_dto;
