//! Rutas de Contenedores (servicio-operaciones)
//!
//! Sólo lecturas: los contenedores nacen con la solicitud y su estado lo
//! maneja el ciclo de vida de los tramos.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::models::contenedor::Contenedor;
use crate::repositories::contenedor_repository::ContenedorRepository;
use crate::state::OperacionesState;
use crate::utils::errors::AppError;

pub fn create_contenedor_router() -> Router<OperacionesState> {
    Router::new()
        .route("/", get(listar_contenedores))
        .route("/:id", get(obtener_contenedor))
}

async fn listar_contenedores(
    State(state): State<OperacionesState>,
) -> Result<Json<Vec<Contenedor>>, AppError> {
    let repository = ContenedorRepository::new(state.pool.clone());
    Ok(Json(repository.find_all().await?))
}

async fn obtener_contenedor(
    State(state): State<OperacionesState>,
    Path(id): Path<i64>,
) -> Result<Json<Contenedor>, AppError> {
    let repository = ContenedorRepository::new(state.pool.clone());
    let contenedor = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contenedor con id {} no encontrado", id)))?;
    Ok(Json(contenedor))
}
