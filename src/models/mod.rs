//! Modelos del sistema
//!
//! Este módulo contiene el vehículo del inventario, los formularios de leads
//! y el contenido estático del sitio.

pub mod lead;
pub mod showroom;
pub mod vehicle;
