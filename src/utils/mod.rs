//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación de
//! formularios, formatos pt-BR y enlaces de WhatsApp.

pub mod errors;
pub mod format;
pub mod validation;
pub mod whatsapp;
