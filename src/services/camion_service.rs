//! Servicio de Camiones (servicio-flota)
//!
//! CRUD de la flota más las dos consultas que usa el lado de operaciones:
//! la búsqueda de disponibles con pisos de capacidad y el PATCH de
//! disponibilidad con el que operaciones reserva y libera camiones.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::camion_dto::{CamionCreateDTO, CamionUpdateDTO};
use crate::models::camion::{dominio_valido, Camion};
use crate::repositories::camion_repository::CamionRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct CamionService {
    repository: CamionRepository,
}

impl CamionService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CamionRepository::new(pool),
        }
    }

    pub async fn obtener_todos(&self) -> AppResult<Vec<Camion>> {
        self.repository.find_all().await
    }

    pub async fn obtener_por_id(&self, id: i64) -> AppResult<Camion> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Camión con id {} no encontrado", id)))
    }

    pub async fn crear_camion(&self, dto: CamionCreateDTO) -> AppResult<Camion> {
        dto.validate()?;

        let dominio = dto.dominio.trim().to_uppercase();
        if !dominio_valido(&dominio) {
            return Err(AppError::BadRequest(format!(
                "Dominio inválido: {}. Formatos aceptados: ABC123 o AB123CD",
                dominio
            )));
        }

        if self.repository.dominio_exists(&dominio).await? {
            return Err(AppError::Conflict(format!(
                "Ya existe un camión con dominio {}",
                dominio
            )));
        }

        let camion = self
            .repository
            .crear(
                &dominio,
                dto.modelo.as_deref(),
                dto.capacidad_peso,
                dto.capacidad_volumen,
                dto.disponible.unwrap_or(true),
            )
            .await?;

        log::info!("Camión {} registrado con dominio {}", camion.id, camion.dominio);
        Ok(camion)
    }

    pub async fn actualizar_camion(&self, id: i64, dto: CamionUpdateDTO) -> AppResult<Camion> {
        dto.validate()?;

        let mut camion = self.obtener_por_id(id).await?;

        if let Some(modelo) = dto.modelo {
            camion.modelo = Some(modelo);
        }
        if let Some(capacidad_peso) = dto.capacidad_peso {
            camion.capacidad_peso = capacidad_peso;
        }
        if let Some(capacidad_volumen) = dto.capacidad_volumen {
            camion.capacidad_volumen = capacidad_volumen;
        }
        if let Some(disponible) = dto.disponible {
            camion.disponible = disponible;
        }

        self.repository.actualizar(&camion).await
    }

    pub async fn eliminar_camion(&self, id: i64) -> AppResult<()> {
        let eliminados = self.repository.eliminar(id).await?;
        if eliminados == 0 {
            return Err(AppError::NotFound(format!("Camión con id {} no encontrado", id)));
        }
        Ok(())
    }

    pub async fn buscar_disponibles(
        &self,
        peso_minimo: Option<f64>,
        volumen_minimo: Option<f64>,
    ) -> AppResult<Vec<Camion>> {
        self.repository
            .find_disponibles(peso_minimo, volumen_minimo)
            .await
    }

    /// Reserva o libera un camión. La operación es idempotente: repetirla
    /// con el mismo valor deja el mismo resultado.
    pub async fn actualizar_disponibilidad(&self, id: i64, disponible: bool) -> AppResult<Camion> {
        let camion = self
            .repository
            .actualizar_disponibilidad(id, disponible)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Camión con id {} no encontrado", id)))?;

        log::info!(
            "Disponibilidad del camión {} ({}) actualizada a {}",
            camion.id,
            camion.dominio,
            camion.disponible
        );
        Ok(camion)
    }
}
