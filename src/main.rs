use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use showroom_backend::config::environment::EnvironmentConfig;
use showroom_backend::create_app;
use showroom_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🏍️ Shantha Motors - Backend de captación de leads");
    info!("=================================================");

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::new(config);
    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("💰 Endpoints - Loan:");
    info!("   POST /api/loan/estimate - Estimar cuota mensual (interés plano)");
    info!("   POST /api/loan/convert-tenure - Convertir plazo entre meses y años");
    info!("   GET  /api/loan/terms - Condiciones y topes de la calculadora");
    info!("📝 Endpoints - Booking:");
    info!("   POST /api/booking - Crear reserva");
    info!("   GET  /api/booking - Listar reservas");
    info!("   GET  /api/booking/:id - Obtener reserva");
    info!("   DELETE /api/booking/:id - Cancelar reserva");
    info!("📍 Endpoints - Showroom:");
    info!("   GET  /api/showroom - Directorio de sucursales");
    info!("   GET  /api/showroom/primary - Sucursal principal");
    info!("🏍️ Endpoints - Catalog:");
    info!("   GET  /api/catalog/models - Modelos y variantes reservables");
    info!("🔐 Endpoints - Auth (stub, sin verificación real):");
    info!("   POST /api/auth/register - Registro");
    info!("   POST /api/auth/login - Login");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
