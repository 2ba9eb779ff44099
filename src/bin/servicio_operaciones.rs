//! servicio-operaciones
//!
//! Servicio dueño de clientes, contenedores, solicitudes, rutas y tramos.
//! Orquesta el ciclo de vida del envío y consume recursos del
//! servicio-flota a través del cliente HTTP.

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use transporte_backend::config::environment::EnvironmentConfig;
use transporte_backend::database::create_pool;
use transporte_backend::middleware::cors::cors_middleware;
use transporte_backend::routes::{
    cliente_routes, contenedor_routes, solicitud_routes, tramo_routes,
};
use transporte_backend::state::OperacionesState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚚 servicio-operaciones - solicitudes, rutas y tramos");
    info!("=====================================================");

    let config = EnvironmentConfig::from_env(8080);

    // Inicializar base de datos
    let pool = match create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    sqlx::migrate!("migrations/operaciones").run(&pool).await?;

    info!("🔗 servicio-flota en {}", config.flota_service_url);

    let app_state = OperacionesState::new(pool, config.clone());

    let app = Router::new()
        .nest("/solicitudes", solicitud_routes::create_solicitud_router())
        .nest("/tramos", tramo_routes::create_tramo_router())
        .nest("/clientes", cliente_routes::create_cliente_router())
        .nest("/contenedores", contenedor_routes::create_contenedor_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 servicio-operaciones escuchando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST   /solicitudes - Crear solicitud de transporte");
    info!("   GET    /solicitudes/:id/estado - Estado completo con progreso y ETA");
    info!("   GET    /solicitudes/:id/rutas/tentativas - Itinerarios candidatos");
    info!("   POST   /solicitudes/:id/asignar-ruta - Consolidar itinerario");
    info!("   POST   /tramos/:id/asignar-camion - Asignar camión con reserva en flota");
    info!("   POST   /tramos/:id/iniciar - Iniciar viaje del tramo");
    info!("   POST   /tramos/:id/finalizar - Finalizar tramo y liberar camión");
    info!("   GET    /tramos/transportistas/:camionId/tramos - Hoja de trabajo");
    info!("   CRUD   /clientes, /contenedores (lecturas)");

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
    info!("Apagando servicio-operaciones...");
}
