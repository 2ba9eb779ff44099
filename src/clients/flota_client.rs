//! Cliente para comunicarse con el servicio-flota
//!
//! Obtiene información de tarifas y camiones y ejecuta la reserva/liberación
//! de disponibilidad. Las lecturas degradan a `None` ante cualquier falla
//! remota (timeout, 5xx, error de conexión): para los llamadores "no hay
//! dato" y "no existe" son indistinguibles y nunca deben voltear la
//! orquestación. Las llamadas tienen timeout acotado y no se reintentan.

use reqwest::StatusCode;
use uuid::Uuid;

use crate::dto::camion_dto::DisponibilidadDTO;
use crate::models::camion::Camion;
use crate::models::tarifa::Tarifa;
use crate::utils::errors::{AppError, AppResult};

pub struct FlotaServiceClient {
    base_url: String,
    client: reqwest::Client,
}

impl FlotaServiceClient {
    pub fn new(base_url: String, timeout_seconds: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .connect_timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .unwrap_or_default();

        Self { base_url, client }
    }

    /// Obtiene la tarifa activa vigente desde servicio-flota.
    pub async fn obtener_tarifa_activa(&self) -> Option<Tarifa> {
        let url = format!("{}/tarifas/actual", self.base_url);
        log::debug!("Consultando tarifa activa a servicio-flota: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                log::error!("Error al consultar tarifa activa a servicio-flota: {}", e);
                return None;
            }
        };

        match response.status() {
            StatusCode::OK => match response.json::<Tarifa>().await {
                Ok(tarifa) => {
                    log::info!("Tarifa activa obtenida exitosamente: ID {}", tarifa.id);
                    Some(tarifa)
                }
                Err(e) => {
                    log::error!("Respuesta de tarifa activa inválida: {}", e);
                    None
                }
            },
            StatusCode::NOT_FOUND => {
                log::warn!("No hay tarifa activa en servicio-flota");
                None
            }
            status => {
                log::error!("Error al obtener tarifa activa de servicio-flota. Status: {}", status);
                None
            }
        }
    }

    /// Obtiene información de un camión específico desde servicio-flota.
    pub async fn obtener_camion(&self, camion_id: i64) -> Option<Camion> {
        let url = format!("{}/camiones/{}", self.base_url, camion_id);
        log::debug!("Consultando camión {} a servicio-flota", camion_id);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                log::error!("Error al consultar camión {} a servicio-flota: {}", camion_id, e);
                return None;
            }
        };

        match response.status() {
            StatusCode::OK => match response.json::<Camion>().await {
                Ok(camion) => {
                    log::info!("Camión {} obtenido exitosamente: {}", camion_id, camion.dominio);
                    Some(camion)
                }
                Err(e) => {
                    log::error!("Respuesta de camión {} inválida: {}", camion_id, e);
                    None
                }
            },
            StatusCode::NOT_FOUND => {
                log::warn!("Camión con ID {} no encontrado en servicio-flota", camion_id);
                None
            }
            status => {
                log::error!("Error al obtener camión {} de servicio-flota. Status: {}", camion_id, status);
                None
            }
        }
    }

    /// Reserva o libera un camión en servicio-flota.
    ///
    /// El PATCH de disponibilidad es idempotente del lado de flota; se envía
    /// un X-Request-Id para poder correlacionar la operación. Una falla acá
    /// debe abortar la asignación en curso (fail safe).
    pub async fn actualizar_disponibilidad(&self, camion_id: i64, disponible: bool) -> AppResult<()> {
        let url = format!("{}/camiones/{}/disponibilidad", self.base_url, camion_id);
        let request_id = Uuid::new_v4();
        log::debug!(
            "Actualizando disponibilidad del camión {} a {} (request {})",
            camion_id,
            disponible,
            request_id
        );

        let response = self
            .client
            .patch(&url)
            .header("X-Request-Id", request_id.to_string())
            .json(&DisponibilidadDTO { disponible })
            .send()
            .await
            .map_err(|e| {
                log::error!("Error al actualizar disponibilidad del camión {}: {}", camion_id, e);
                AppError::ServiceUnavailable(format!(
                    "No se pudo actualizar la disponibilidad del camión {} en servicio-flota",
                    camion_id
                ))
            })?;

        match response.status() {
            StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(AppError::NotFound(format!(
                "Camión con id {} no encontrado en servicio-flota",
                camion_id
            ))),
            status => {
                log::error!(
                    "Error al actualizar disponibilidad del camión {}. Status: {}",
                    camion_id,
                    status
                );
                Err(AppError::ServiceUnavailable(format!(
                    "servicio-flota respondió {} al actualizar disponibilidad",
                    status
                )))
            }
        }
    }
}
