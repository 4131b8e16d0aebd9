use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use tigers_seminovos::config::environment::EnvironmentConfig;
use tigers_seminovos::create_app;
use tigers_seminovos::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Error de configuración: {}", e))?;

    // Configurar logging
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🐯 Tigers Seminovos - API do showroom");
    info!("================================================");

    if config.cors_origins.is_empty() && config.is_production() {
        warn!("⚠️ CORS_ORIGINS vacío en producción, se usa CORS permisivo");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🏠 Showroom:");
    info!("   GET  /api/home - Contenido de la home");
    info!("   GET  /api/navigation?path= - Menú con link activo");
    info!("🚗 Catálogo:");
    info!("   GET  /api/catalog/vehicles - Buscar vehículos (filtros + página)");
    info!("   GET  /api/catalog/options - Opciones de filtros dependientes");
    info!("   GET  /api/catalog/vehicles/:id - Detalle del vehículo");
    info!("📝 Leads:");
    info!("   POST /api/leads/contact - Solicitar vehículo");
    info!("   POST /api/leads/discount - Solicitar descuento");
    info!("   POST /api/leads/visit - Agendar visita");
    info!("   POST /api/leads/credit-analysis - Análisis de crédito");

    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })
    });

    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
