//! Rutas de Tarifas (servicio-flota)

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::dto::tarifa_dto::{ExisteActivaDTO, TarifaCreateDTO, TarifaUpdateDTO};
use crate::models::tarifa::Tarifa;
use crate::services::tarifa_service::TarifaService;
use crate::state::FlotaState;
use crate::utils::errors::AppError;

pub fn create_tarifa_router() -> Router<FlotaState> {
    Router::new()
        .route("/", get(listar_tarifas).post(crear_tarifa))
        .route("/actual", get(obtener_tarifa_actual))
        .route("/existe-activa", get(existe_activa))
        .route(
            "/:id",
            get(obtener_tarifa).put(actualizar_tarifa).delete(eliminar_tarifa),
        )
}

async fn listar_tarifas(State(state): State<FlotaState>) -> Result<Json<Vec<Tarifa>>, AppError> {
    let service = TarifaService::new(state.pool.clone());
    Ok(Json(service.obtener_todas().await?))
}

async fn obtener_tarifa(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
) -> Result<Json<Tarifa>, AppError> {
    let service = TarifaService::new(state.pool.clone());
    Ok(Json(service.obtener_por_id(id).await?))
}

async fn obtener_tarifa_actual(
    State(state): State<FlotaState>,
) -> Result<Json<Tarifa>, AppError> {
    let service = TarifaService::new(state.pool.clone());
    let tarifa = service
        .obtener_activa()
        .await?
        .ok_or_else(|| AppError::NotFound("No hay tarifa activa".to_string()))?;
    Ok(Json(tarifa))
}

async fn existe_activa(
    State(state): State<FlotaState>,
) -> Result<Json<ExisteActivaDTO>, AppError> {
    let service = TarifaService::new(state.pool.clone());
    Ok(Json(ExisteActivaDTO {
        existe_activa: service.existe_activa().await?,
    }))
}

async fn crear_tarifa(
    State(state): State<FlotaState>,
    Json(dto): Json<TarifaCreateDTO>,
) -> Result<Json<Tarifa>, AppError> {
    let service = TarifaService::new(state.pool.clone());
    Ok(Json(service.crear_tarifa(dto).await?))
}

async fn actualizar_tarifa(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
    Json(dto): Json<TarifaUpdateDTO>,
) -> Result<Json<Tarifa>, AppError> {
    let service = TarifaService::new(state.pool.clone());
    Ok(Json(service.actualizar_tarifa(id, dto).await?))
}

async fn eliminar_tarifa(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = TarifaService::new(state.pool.clone());
    service.eliminar_tarifa(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Tarifa eliminada exitosamente"
    })))
}
