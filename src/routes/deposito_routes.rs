//! Rutas de Depósitos (servicio-flota)

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::dto::deposito_dto::{DepositoCreateDTO, DepositoUpdateDTO};
use crate::models::deposito::Deposito;
use crate::services::deposito_service::DepositoService;
use crate::state::FlotaState;
use crate::utils::errors::AppError;

pub fn create_deposito_router() -> Router<FlotaState> {
    Router::new()
        .route("/", get(listar_depositos).post(crear_deposito))
        .route(
            "/:id",
            get(obtener_deposito)
                .put(actualizar_deposito)
                .delete(eliminar_deposito),
        )
}

async fn listar_depositos(
    State(state): State<FlotaState>,
) -> Result<Json<Vec<Deposito>>, AppError> {
    let service = DepositoService::new(state.pool.clone());
    Ok(Json(service.obtener_todos().await?))
}

async fn obtener_deposito(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
) -> Result<Json<Deposito>, AppError> {
    let service = DepositoService::new(state.pool.clone());
    Ok(Json(service.obtener_por_id(id).await?))
}

async fn crear_deposito(
    State(state): State<FlotaState>,
    Json(dto): Json<DepositoCreateDTO>,
) -> Result<Json<Deposito>, AppError> {
    let service = DepositoService::new(state.pool.clone());
    Ok(Json(service.crear_deposito(dto).await?))
}

async fn actualizar_deposito(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
    Json(dto): Json<DepositoUpdateDTO>,
) -> Result<Json<Deposito>, AppError> {
    let service = DepositoService::new(state.pool.clone());
    Ok(Json(service.actualizar_deposito(id, dto).await?))
}

async fn eliminar_deposito(
    State(state): State<FlotaState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = DepositoService::new(state.pool.clone());
    service.eliminar_deposito(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Depósito eliminado exitosamente"
    })))
}
