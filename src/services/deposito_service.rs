//! Servicio de Depósitos (servicio-flota)

use sqlx::PgPool;
use validator::Validate;

use crate::dto::deposito_dto::{DepositoCreateDTO, DepositoUpdateDTO};
use crate::models::deposito::Deposito;
use crate::repositories::deposito_repository::DepositoRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct DepositoService {
    repository: DepositoRepository,
}

impl DepositoService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DepositoRepository::new(pool),
        }
    }

    pub async fn obtener_todos(&self) -> AppResult<Vec<Deposito>> {
        self.repository.find_all().await
    }

    pub async fn obtener_por_id(&self, id: i64) -> AppResult<Deposito> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Depósito con id {} no encontrado", id)))
    }

    pub async fn crear_deposito(&self, dto: DepositoCreateDTO) -> AppResult<Deposito> {
        dto.validate()?;

        self.repository
            .crear(
                &dto.nombre,
                dto.direccion.as_deref(),
                dto.latitud,
                dto.longitud,
                dto.costo_estadia_dia,
            )
            .await
    }

    pub async fn actualizar_deposito(&self, id: i64, dto: DepositoUpdateDTO) -> AppResult<Deposito> {
        dto.validate()?;

        let mut deposito = self.obtener_por_id(id).await?;

        if let Some(nombre) = dto.nombre {
            deposito.nombre = nombre;
        }
        if let Some(direccion) = dto.direccion {
            deposito.direccion = Some(direccion);
        }
        if let Some(latitud) = dto.latitud {
            deposito.latitud = latitud;
        }
        if let Some(longitud) = dto.longitud {
            deposito.longitud = longitud;
        }
        if let Some(costo) = dto.costo_estadia_dia {
            deposito.costo_estadia_dia = costo;
        }

        self.repository.actualizar(&deposito).await
    }

    pub async fn eliminar_deposito(&self, id: i64) -> AppResult<()> {
        let eliminados = self.repository.eliminar(id).await?;
        if eliminados == 0 {
            return Err(AppError::NotFound(format!("Depósito con id {} no encontrado", id)));
        }
        Ok(())
    }
}
