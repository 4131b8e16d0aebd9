//! Middleware de Rate Limiting
//!
//! Este módulo limita la cantidad de envíos de formularios por IP
//! para prevenir abuso de los endpoints de leads.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::EnvironmentConfig;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Información de rate limiting por IP
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

/// Estado global del rate limiting
#[derive(Clone)]
pub struct RateLimitState {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
}

impl RateLimitState {
    /// Crear nuevo estado de rate limiting
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests: config.rate_limit_requests,
            window_duration: Duration::from_secs(config.rate_limit_window),
        }
    }

    /// Verificar si una IP ha excedido el límite
    pub async fn check_rate_limit(&self, ip: &str) -> Result<(), RateLimitError> {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(ip.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if info.requests >= self.max_requests {
            return Err(RateLimitError::LimitExceeded);
        }

        info.requests += 1;
        Ok(())
    }
}

/// Errores de rate limiting
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit exceeded")]
    LimitExceeded,
}

/// IP del cliente: x-forwarded-for o la dirección de la conexión
fn client_ip(request: &Request) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware de rate limiting para los formularios
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request);

    if let Err(RateLimitError::LimitExceeded) = state.rate_limit.check_rate_limit(&ip).await {
        tracing::warn!("🚫 Rate limit excedido para {}", ip);
        return AppError::RateLimitExceeded.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blocks_after_limit() {
        let config = EnvironmentConfig {
            rate_limit_requests: 2,
            rate_limit_window: 60,
            ..Default::default()
        };
        let state = RateLimitState::new(&config);

        assert!(state.check_rate_limit("10.0.0.1").await.is_ok());
        assert!(state.check_rate_limit("10.0.0.1").await.is_ok());
        assert!(state.check_rate_limit("10.0.0.1").await.is_err());
        // otra IP tiene su propia ventana
        assert!(state.check_rate_limit("10.0.0.2").await.is_ok());
    }
}
