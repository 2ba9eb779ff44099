//! Rutas de Tramos (servicio-operaciones)

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::dto::tramo_dto::{AsignacionCamionDTO, TramoDTO};
use crate::services::tramo_service::TramoService;
use crate::state::OperacionesState;
use crate::utils::errors::AppError;

pub fn create_tramo_router() -> Router<OperacionesState> {
    Router::new()
        .route("/", get(listar_tramos))
        .route("/:id", get(obtener_tramo))
        .route("/:id/asignar-camion", post(asignar_camion))
        .route("/:id/iniciar", post(iniciar_tramo))
        .route("/:id/finalizar", post(finalizar_tramo))
        .route("/transportistas/:camion_id/tramos", get(tramos_por_camion))
}

async fn listar_tramos(
    State(state): State<OperacionesState>,
) -> Result<Json<Vec<TramoDTO>>, AppError> {
    let service = TramoService::new(state.pool.clone(), state.flota.clone());
    let tramos = service.obtener_todos().await?;
    Ok(Json(tramos.into_iter().map(TramoDTO::from).collect()))
}

async fn obtener_tramo(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<TramoDTO>, AppError> {
    let service = TramoService::new(state.pool.clone(), state.flota.clone());
    Ok(Json(TramoDTO::from(service.obtener_por_id(id).await?)))
}

async fn asignar_camion(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
    Json(dto): Json<AsignacionCamionDTO>,
) -> Result<Json<TramoDTO>, AppError> {
    let service = TramoService::new(state.pool.clone(), state.flota.clone());
    Ok(Json(TramoDTO::from(service.asignar_camion(id, dto).await?)))
}

async fn iniciar_tramo(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<TramoDTO>, AppError> {
    let service = TramoService::new(state.pool.clone(), state.flota.clone());
    Ok(Json(TramoDTO::from(service.iniciar_tramo(id).await?)))
}

async fn finalizar_tramo(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<TramoDTO>, AppError> {
    let service = TramoService::new(state.pool.clone(), state.flota.clone());
    Ok(Json(TramoDTO::from(service.finalizar_tramo(id).await?)))
}

async fn tramos_por_camion(
    State(state): State<OperacionesState>,
    Path(camion_id): Path<i64>,
) -> Result<Json<Vec<TramoDTO>>, AppError> {
    let service = TramoService::new(state.pool.clone(), state.flota.clone());
    let tramos = service.obtener_por_camion(camion_id).await?;
    Ok(Json(tramos.into_iter().map(TramoDTO::from).collect()))
}
