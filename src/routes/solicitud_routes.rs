//! Rutas de Solicitudes (servicio-operaciones)
//!
//! Incluye las operaciones de planificación anidadas bajo la solicitud:
//! consulta de rutas tentativas y asignación de la ruta definitiva.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::dto::ruta_dto::{AsignarRutaDTO, RutaDTO, RutaTentativaDTO};
use crate::dto::solicitud_dto::{SolicitudCreateDTO, SolicitudEstadoDTO};
use crate::models::solicitud::Solicitud;
use crate::services::ruta_service::RutaService;
use crate::services::solicitud_service::SolicitudService;
use crate::state::OperacionesState;
use crate::utils::errors::AppError;

pub fn create_solicitud_router() -> Router<OperacionesState> {
    Router::new()
        .route("/", get(listar_solicitudes).post(crear_solicitud))
        .route("/:id", get(obtener_solicitud).delete(eliminar_solicitud))
        .route("/:id/estado", get(consultar_estado))
        .route("/:id/rutas/tentativas", get(rutas_tentativas))
        .route("/:id/asignar-ruta", post(asignar_ruta))
}

async fn listar_solicitudes(
    State(state): State<OperacionesState>,
) -> Result<Json<Vec<Solicitud>>, AppError> {
    let service = SolicitudService::new(state.pool.clone());
    Ok(Json(service.obtener_todas().await?))
}

async fn obtener_solicitud(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<Solicitud>, AppError> {
    let service = SolicitudService::new(state.pool.clone());
    Ok(Json(service.obtener_por_id(id).await?))
}

async fn crear_solicitud(
    State(state): State<OperacionesState>,
    Json(dto): Json<SolicitudCreateDTO>,
) -> Result<Json<Solicitud>, AppError> {
    let service = SolicitudService::new(state.pool.clone());
    Ok(Json(service.crear_nueva_solicitud(dto).await?))
}

async fn consultar_estado(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<SolicitudEstadoDTO>, AppError> {
    let service = SolicitudService::new(state.pool.clone());
    Ok(Json(service.consultar_estado(id).await?))
}

async fn eliminar_solicitud(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = SolicitudService::new(state.pool.clone());
    service.eliminar_solicitud(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Solicitud eliminada exitosamente"
    })))
}

async fn rutas_tentativas(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RutaTentativaDTO>>, AppError> {
    let service = RutaService::new(state.pool.clone(), state.flota.clone());
    Ok(Json(service.calcular_rutas_tentativas(id).await?))
}

async fn asignar_ruta(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
    Json(dto): Json<AsignarRutaDTO>,
) -> Result<Json<RutaDTO>, AppError> {
    let service = RutaService::new(state.pool.clone(), state.flota.clone());
    let ruta = service.asignar_ruta_a_solicitud(id, dto).await?;
    Ok(Json(RutaDTO::from_ruta(ruta, Some(id))))
}
