//! servicio-flota
//!
//! Servicio dueño de los recursos de flota: camiones, depósitos y tarifas.

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use transporte_backend::config::environment::EnvironmentConfig;
use transporte_backend::database::create_pool;
use transporte_backend::middleware::cors::cors_middleware;
use transporte_backend::routes::{camion_routes, deposito_routes, tarifa_routes};
use transporte_backend::state::FlotaState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚛 servicio-flota - camiones, depósitos y tarifas");
    info!("=================================================");

    let config = EnvironmentConfig::from_env(8081);

    // Inicializar base de datos
    let pool = match create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    sqlx::migrate!("migrations/flota").run(&pool).await?;

    let app_state = FlotaState::new(pool, config.clone());

    let app = Router::new()
        .nest("/tarifas", tarifa_routes::create_tarifa_router())
        .nest("/camiones", camion_routes::create_camion_router())
        .nest("/depositos", deposito_routes::create_deposito_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 servicio-flota escuchando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /tarifas - Listar tarifas por vigencia");
    info!("   GET    /tarifas/actual - Tarifa activa");
    info!("   GET    /tarifas/existe-activa - ¿Hay tarifa activa?");
    info!("   POST   /tarifas - Crear tarifa (activa por defecto)");
    info!("   PUT    /tarifas/:id - Actualizar/activar tarifa");
    info!("   DELETE /tarifas/:id - Eliminar tarifa no activa");
    info!("   GET    /camiones - Listar camiones");
    info!("   GET    /camiones/disponibles - Disponibles con filtros de capacidad");
    info!("   PATCH  /camiones/:id/disponibilidad - Reservar/liberar camión");
    info!("   CRUD   /camiones, /depositos");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Error esperando la señal de apagado: {}", e);
    }
    info!("Apagando servicio-flota...");
}
