//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y el rate limiting de los
//! formularios.

pub mod cors;
pub mod rate_limit;

pub use cors::*;
pub use rate_limit::*;
