//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través del router
//! de Axum. Cada binario arma el suyo: el servicio-flota sólo necesita su
//! pool; el servicio-operaciones además lleva el cliente HTTP hacia flota.

use std::sync::Arc;

use sqlx::PgPool;

use crate::clients::flota_client::FlotaServiceClient;
use crate::config::environment::EnvironmentConfig;

/// Estado del servicio-flota
#[derive(Clone)]
pub struct FlotaState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl FlotaState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}

/// Estado del servicio-operaciones
#[derive(Clone)]
pub struct OperacionesState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub flota: Arc<FlotaServiceClient>,
}

impl OperacionesState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let flota = Arc::new(FlotaServiceClient::new(
            config.flota_service_url.clone(),
            config.flota_timeout_seconds,
        ));
        Self { pool, config, flota }
    }
}
