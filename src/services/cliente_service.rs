//! Servicio de Clientes (servicio-operaciones)
//!
//! CRUD plano: los clientes no tienen máquina de estados y pueden existir
//! antes e independientemente de cualquier solicitud.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::solicitud_dto::ClienteCreateDTO;
use crate::models::cliente::Cliente;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct ClienteService {
    pool: PgPool,
    repository: ClienteRepository,
}

impl ClienteService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn obtener_todos(&self) -> AppResult<Vec<Cliente>> {
        self.repository.find_all().await
    }

    pub async fn obtener_por_id(&self, id: i64) -> AppResult<Cliente> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente con id {} no encontrado", id)))
    }

    pub async fn crear_cliente(&self, dto: ClienteCreateDTO) -> AppResult<Cliente> {
        dto.validate()?;

        let mut tx = self.pool.begin().await?;
        let cliente = ClienteRepository::crear(&mut tx, &dto).await?;
        tx.commit().await?;

        Ok(cliente)
    }
}
