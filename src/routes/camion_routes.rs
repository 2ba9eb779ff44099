//! Rutas de Camiones (servicio-flota)

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};

use crate::dto::camion_dto::{
    CamionCreateDTO, CamionUpdateDTO, CamionesDisponiblesQuery, DisponibilidadDTO,
};
use crate::models::camion::Camion;
use crate::services::camion_service::CamionService;
use crate::state::FlotaState;
use crate::utils::errors::AppError;

pub fn create_camion_router() -> Router<FlotaState> {
    Router::new()
        .route("/", get(listar_camiones).post(crear_camion))
        .route("/disponibles", get(buscar_disponibles))
        .route(
            "/:id",
            get(obtener_camion).put(actualizar_camion).delete(eliminar_camion),
        )
        .route("/:id/disponibilidad", patch(actualizar_disponibilidad))
}

async fn listar_camiones(State(state): State<FlotaState>) -> Result<Json<Vec<Camion>>, AppError> {
    let service = CamionService::new(state.pool.clone());
    Ok(Json(service.obtener_todos().await?))
}

async fn obtener_camion(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
) -> Result<Json<Camion>, AppError> {
    let service = CamionService::new(state.pool.clone());
    Ok(Json(service.obtener_por_id(id).await?))
}

async fn crear_camion(
    State(state): State<FlotaState>,
    Json(dto): Json<CamionCreateDTO>,
) -> Result<Json<Camion>, AppError> {
    let service = CamionService::new(state.pool.clone());
    Ok(Json(service.crear_camion(dto).await?))
}

async fn actualizar_camion(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
    Json(dto): Json<CamionUpdateDTO>,
) -> Result<Json<Camion>, AppError> {
    let service = CamionService::new(state.pool.clone());
    Ok(Json(service.actualizar_camion(id, dto).await?))
}

async fn eliminar_camion(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = CamionService::new(state.pool.clone());
    service.eliminar_camion(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Camión eliminado exitosamente"
    })))
}

async fn buscar_disponibles(
    State(state): State<FlotaState>,
    Query(query): Query<CamionesDisponiblesQuery>,
) -> Result<Json<Vec<Camion>>, AppError> {
    let service = CamionService::new(state.pool.clone());
    Ok(Json(
        service
            .buscar_disponibles(query.peso_minimo, query.volumen_minimo)
            .await?,
    ))
}

async fn actualizar_disponibilidad(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
    Json(dto): Json<DisponibilidadDTO>,
) -> Result<Json<Camion>, AppError> {
    let service = CamionService::new(state.pool.clone());
    Ok(Json(service.actualizar_disponibilidad(id, dto.disponible).await?))
}
