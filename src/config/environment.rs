//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto; un número mal formado es un error.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::services::catalog_service::DEFAULT_PAGE_SIZE;
use crate::services::lead_service::DEFAULT_SUBMISSION_DELAY;
use crate::services::vehicle_generator::DEFAULT_FLEET_SIZE;

/// Número de WhatsApp de los consultores
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5500000000000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub whatsapp_number: String,
    pub catalog_size: usize,
    pub page_size: usize,
    pub submission_delay: Duration,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            catalog_size: DEFAULT_FLEET_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            submission_delay: DEFAULT_SUBMISSION_DELAY,
            rate_limit_requests: 30,
            rate_limit_window: 60,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración desde cualquier fuente clave/valor
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let delay_ms = parse_or(
            &lookup,
            "LEAD_SUBMISSION_DELAY_MS",
            defaults.submission_delay.as_millis() as u64,
        )?;

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            whatsapp_number: lookup("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            catalog_size: parse_or(&lookup, "CATALOG_SIZE", defaults.catalog_size)?,
            page_size: parse_or(&lookup, "CATALOG_PAGE_SIZE", defaults.page_size)?.max(1),
            submission_delay: Duration::from_millis(delay_ms),
            rate_limit_requests: parse_or(&lookup, "RATE_LIMIT_REQUESTS", defaults.rate_limit_requests)?,
            rate_limit_window: parse_or(&lookup, "RATE_LIMIT_WINDOW", defaults.rate_limit_window)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}
