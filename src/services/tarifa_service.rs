//! Servicio de Tarifas
//!
//! Mantiene la invariante central del lado flota: a lo sumo una tarifa
//! activa en cualquier instante. Activar una tarifa (por creación o
//! actualización) desactiva la anterior y cierra su vigencia dentro de la
//! misma transacción, de modo que ningún lector externo observe dos tarifas
//! activas. El índice único parcial sobre `activa` cierra la carrera entre
//! dos activaciones concurrentes.

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::tarifa_dto::{TarifaCreateDTO, TarifaUpdateDTO};
use crate::models::tarifa::Tarifa;
use crate::repositories::tarifa_repository::TarifaRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct TarifaService {
    pool: PgPool,
    repository: TarifaRepository,
}

impl TarifaService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TarifaRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn obtener_todas(&self) -> AppResult<Vec<Tarifa>> {
        self.repository.find_all().await
    }

    pub async fn obtener_por_id(&self, id: i64) -> AppResult<Tarifa> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tarifa con id {} no encontrada", id)))
    }

    pub async fn obtener_activa(&self) -> AppResult<Option<Tarifa>> {
        self.repository.find_activa().await
    }

    pub async fn existe_activa(&self) -> AppResult<bool> {
        self.repository.existe_activa().await
    }

    /// Crea una tarifa. Por política, la tarifa nueva nace activa salvo que
    /// se pida lo contrario; si nace activa, la anterior se cierra en la
    /// misma transacción.
    pub async fn crear_tarifa(&self, dto: TarifaCreateDTO) -> AppResult<Tarifa> {
        dto.validate()?;

        let activa = dto.activa.unwrap_or(true);
        let vigencia_desde = dto.vigencia_desde.unwrap_or_else(Utc::now);

        let mut tx = self.pool.begin().await?;

        if activa {
            if let Some(anterior) = TarifaRepository::desactivar_activa(&mut tx, Utc::now()).await? {
                log::info!("Tarifa {} desactivada al activar una nueva", anterior.id);
            }
        }

        let tarifa = TarifaRepository::crear(
            &mut tx,
            &dto.tipo,
            dto.valor,
            dto.descripcion.as_deref(),
            vigencia_desde,
            activa,
        )
        .await?;

        tx.commit().await?;

        log::info!("Tarifa {} creada (activa: {})", tarifa.id, tarifa.activa);
        Ok(tarifa)
    }

    /// Actualización parcial. Encender `activa` cierra la tarifa activa
    /// anterior en la misma transacción; apagarla siempre está permitido y
    /// deja al sistema sin tarifa activa.
    pub async fn actualizar_tarifa(&self, id: i64, dto: TarifaUpdateDTO) -> AppResult<Tarifa> {
        dto.validate()?;

        let mut tx = self.pool.begin().await?;

        let mut tarifa = TarifaRepository::find_by_id_for_update(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tarifa con id {} no encontrada", id)))?;

        if let Some(valor) = dto.valor {
            tarifa.valor = valor;
        }
        if let Some(descripcion) = dto.descripcion {
            tarifa.descripcion = Some(descripcion);
        }
        if let Some(vigencia_hasta) = dto.vigencia_hasta {
            tarifa.vigencia_hasta = Some(vigencia_hasta);
        }

        match dto.activa {
            Some(true) if !tarifa.activa => {
                if let Some(anterior) =
                    TarifaRepository::desactivar_activa(&mut tx, Utc::now()).await?
                {
                    log::info!("Tarifa {} desactivada al activar la tarifa {}", anterior.id, id);
                }
                tarifa.activa = true;
                tarifa.vigencia_hasta = None;
            }
            Some(false) if tarifa.activa => {
                tarifa.cerrar_vigencia(Utc::now());
            }
            _ => {}
        }

        let tarifa = TarifaRepository::guardar(&mut tx, &tarifa).await?;

        tx.commit().await?;

        Ok(tarifa)
    }

    /// Una tarifa activa nunca se borra directamente; primero hay que
    /// desactivarla.
    pub async fn eliminar_tarifa(&self, id: i64) -> AppResult<()> {
        let tarifa = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tarifa con id {} no encontrada", id)))?;

        if tarifa.activa {
            return Err(AppError::Conflict(
                "No se puede eliminar una tarifa activa".to_string(),
            ));
        }

        self.repository.eliminar(id).await?;
        Ok(())
    }
}
