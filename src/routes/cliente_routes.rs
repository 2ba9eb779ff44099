//! Rutas de Clientes (servicio-operaciones)

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::dto::solicitud_dto::ClienteCreateDTO;
use crate::models::cliente::Cliente;
use crate::services::cliente_service::ClienteService;
use crate::state::OperacionesState;
use crate::utils::errors::AppError;

pub fn create_cliente_router() -> Router<OperacionesState> {
    Router::new()
        .route("/", get(listar_clientes).post(crear_cliente))
        .route("/:id", get(obtener_cliente))
}

async fn listar_clientes(
    State(state): State<OperacionesState>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let service = ClienteService::new(state.pool.clone());
    Ok(Json(service.obtener_todos().await?))
}

async fn obtener_cliente(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<Cliente>, AppError> {
    let service = ClienteService::new(state.pool.clone());
    Ok(Json(service.obtener_por_id(id).await?))
}

async fn crear_cliente(
    State(state): State<OperacionesState>,
    Json(dto): Json<ClienteCreateDTO>,
) -> Result<Json<Cliente>, AppError> {
    let service = ClienteService::new(state.pool.clone());
    Ok(Json(service.crear_cliente(dto).await?))
}
