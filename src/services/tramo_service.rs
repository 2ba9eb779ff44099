//! Servicio de Tramos (servicio-operaciones)
//!
//! Ciclo de vida de un tramo: asignación de camión, inicio y fin de viaje,
//! con las cascadas de estado hacia el contenedor y la solicitud.
//!
//! La disponibilidad del camión es propiedad del servicio-flota. La
//! asignación la reserva en forma sincrónica antes de commitear la
//! transacción local: si la reserva remota falla, la operación entera se
//! aborta. La liberación al finalizar se confirma localmente y se informa a
//! flota después del commit; una falla ahí sólo se loguea y se reconcilia
//! en la próxima lectura.
//!
//! Orden de locks dentro de una transacción: tramo → solicitud →
//! contenedor/ruta → referencia de camión. Mantener ese orden en cualquier
//! operación nueva; cruzarlo habilita deadlocks entre asignación y fin.

use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use crate::clients::flota_client::FlotaServiceClient;
use crate::dto::tramo_dto::AsignacionCamionDTO;
use crate::models::camion_reference::CamionReference;
use crate::models::solicitud::EstadoSolicitud;
use crate::models::tramo::{estado_contenedor_al_finalizar, EstadoTramo, Tramo};
use crate::repositories::camion_reference_repository::CamionReferenceRepository;
use crate::repositories::contenedor_repository::ContenedorRepository;
use crate::repositories::ruta_repository::RutaRepository;
use crate::repositories::solicitud_repository::SolicitudRepository;
use crate::repositories::tramo_repository::TramoRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct TramoService {
    pool: PgPool,
    tramos: TramoRepository,
    flota: Arc<FlotaServiceClient>,
}

impl TramoService {
    pub fn new(pool: PgPool, flota: Arc<FlotaServiceClient>) -> Self {
        Self {
            tramos: TramoRepository::new(pool.clone()),
            pool,
            flota,
        }
    }

    pub async fn obtener_todos(&self) -> AppResult<Vec<Tramo>> {
        self.tramos.find_all().await
    }

    pub async fn obtener_por_id(&self, id: i64) -> AppResult<Tramo> {
        self.tramos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tramo con id {} no encontrado", id)))
    }

    /// Hoja de trabajo de un transportista: los tramos de su camión.
    pub async fn obtener_por_camion(&self, camion_id: i64) -> AppResult<Vec<Tramo>> {
        self.tramos.find_by_camion(camion_id).await
    }

    /// Asigna un camión a un tramo.
    ///
    /// Valida estado del tramo, disponibilidad del camión y capacidad
    /// contra el contenedor de la solicitud dueña de la ruta. La reserva en
    /// servicio-flota ocurre antes del commit local: sin confirmación de
    /// flota no hay asignación.
    pub async fn asignar_camion(
        &self,
        tramo_id: i64,
        dto: AsignacionCamionDTO,
    ) -> AppResult<Tramo> {
        let mut tx = self.pool.begin().await?;

        let tramo = TramoRepository::find_by_id_for_update(&mut tx, tramo_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Tramo con id {} no encontrado", tramo_id))
            })?;

        // Guardas locales baratas antes de tocar la red
        if tramo.camion_id.is_some() {
            return Err(AppError::Conflict(format!(
                "El tramo {} ya tiene un camión asignado",
                tramo_id
            )));
        }
        if tramo.estado_actual()? != EstadoTramo::Pendiente {
            return Err(AppError::Conflict(format!(
                "El tramo debe estar en estado PENDIENTE para asignar un camión. Estado actual: {}",
                tramo.estado
            )));
        }

        let solicitud = SolicitudRepository::find_by_ruta_for_update(&mut tx, tramo.ruta_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No se encontró solicitud asociada al tramo".to_string())
            })?;

        let contenedor = ContenedorRepository::find_by_id_conn(&mut tx, solicitud.contenedor_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Contenedor con id {} no encontrado",
                    solicitud.contenedor_id
                ))
            })?;

        // Lectura read-through del camión: falla remota y camión inexistente
        // son lo mismo para el llamador, y sin dato confirmado no se asigna
        let camion = self
            .flota
            .obtener_camion(dto.camion_id)
            .await
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Camión con id {} no encontrado en servicio-flota",
                    dto.camion_id
                ))
            })?;

        // Refrescar la réplica local (capacidades); el bit de disponibilidad
        // local manda mientras haya una asignación abierta
        let referencia = CamionReferenceRepository::upsert_desde_flota(&mut tx, &camion).await?;

        let referencia = CamionReference {
            disponible: camion.disponible && referencia.disponible,
            ..referencia
        };

        tramo.validar_asignacion(&referencia, &contenedor)?;

        // Reserva sincrónica en flota antes de commitear: si falla, toda la
        // asignación se revierte
        self.flota
            .actualizar_disponibilidad(camion.id, false)
            .await?;

        CamionReferenceRepository::actualizar_disponibilidad(&mut tx, camion.id, false).await?;

        let tramo = TramoRepository::marcar_asignado(
            &mut tx,
            tramo_id,
            camion.id,
            EstadoTramo::Asignado.as_str(),
        )
        .await?;

        tx.commit().await?;

        log::info!(
            "Camión {} ({}) asignado al tramo {}",
            camion.id,
            camion.dominio,
            tramo_id
        );
        Ok(tramo)
    }

    /// Inicia un tramo: el transportista marca el comienzo del viaje.
    ///
    /// Cascadas: contenedor EN_VIAJE; la solicitud pasa a EN_TRANSITO la
    /// primera vez y los inicios posteriores no la tocan.
    pub async fn iniciar_tramo(&self, tramo_id: i64) -> AppResult<Tramo> {
        let mut tx = self.pool.begin().await?;

        let tramo = TramoRepository::find_by_id_for_update(&mut tx, tramo_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Tramo con id {} no encontrado", tramo_id))
            })?;

        tramo.validar_inicio()?;

        let tramo = TramoRepository::marcar_iniciado(
            &mut tx,
            tramo_id,
            EstadoTramo::Iniciado.as_str(),
            Utc::now(),
        )
        .await?;

        let solicitud = SolicitudRepository::find_by_ruta_for_update(&mut tx, tramo.ruta_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No se encontró solicitud asociada al tramo".to_string())
            })?;

        ContenedorRepository::actualizar_estado(
            &mut tx,
            solicitud.contenedor_id,
            crate::models::contenedor::EstadoContenedor::EnViaje.as_str(),
        )
        .await?;

        let estado_solicitud = EstadoSolicitud::parse(&solicitud.estado).ok_or_else(|| {
            AppError::Internal(format!("Estado de solicitud desconocido: {}", solicitud.estado))
        })?;

        if estado_solicitud != EstadoSolicitud::EnTransito {
            if !estado_solicitud.puede_transicionar_a(EstadoSolicitud::EnTransito) {
                return Err(AppError::Conflict(format!(
                    "La solicitud {} no puede pasar a EN_TRANSITO desde {}",
                    solicitud.id, solicitud.estado
                )));
            }
            SolicitudRepository::actualizar_estado(
                &mut tx,
                solicitud.id,
                EstadoSolicitud::EnTransito.as_str(),
            )
            .await?;
        }

        tx.commit().await?;

        log::info!("Tramo {} iniciado", tramo_id);
        Ok(tramo)
    }

    /// Finaliza un tramo: el transportista marca el fin del viaje.
    ///
    /// El costo real de hoy arrastra el aproximado. El contador
    /// `tramos_restantes` de la ruta decide en forma atómica si este fue el
    /// último tramo: en ese caso contenedor y solicitud quedan entregados y
    /// se estampan costo y tiempo reales totales. El camión se libera
    /// localmente en la transacción y se informa a flota tras el commit.
    pub async fn finalizar_tramo(&self, tramo_id: i64) -> AppResult<Tramo> {
        let mut tx = self.pool.begin().await?;

        let tramo = TramoRepository::find_by_id_for_update(&mut tx, tramo_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Tramo con id {} no encontrado", tramo_id))
            })?;

        tramo.validar_fin()?;

        let tramo = TramoRepository::marcar_finalizado(
            &mut tx,
            tramo_id,
            EstadoTramo::Finalizado.as_str(),
            Utc::now(),
            tramo.costo_aproximado,
        )
        .await?;

        let solicitud = SolicitudRepository::find_by_ruta_for_update(&mut tx, tramo.ruta_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No se encontró solicitud asociada al tramo".to_string())
            })?;

        let restantes = RutaRepository::decrementar_tramos_restantes(&mut tx, tramo.ruta_id).await?;
        if restantes < 0 {
            return Err(AppError::Internal(format!(
                "Contador de tramos de la ruta {} quedó negativo",
                tramo.ruta_id
            )));
        }
        let es_ultimo = restantes == 0;

        if let Some(nuevo_estado) = estado_contenedor_al_finalizar(&tramo.tipo, es_ultimo) {
            ContenedorRepository::actualizar_estado(
                &mut tx,
                solicitud.contenedor_id,
                nuevo_estado.as_str(),
            )
            .await?;
        }

        if es_ultimo {
            let (costo_total, inicio, fin) =
                TramoRepository::totales_reales_por_ruta(&mut tx, tramo.ruta_id).await?;

            let tiempo_real = match (inicio, fin) {
                (Some(inicio), Some(fin)) => (fin - inicio).num_seconds() as f64 / 3600.0,
                _ => 0.0,
            };

            SolicitudRepository::completar(
                &mut tx,
                solicitud.id,
                EstadoSolicitud::Entregada.as_str(),
                costo_total,
                tiempo_real,
            )
            .await?;
        }

        // Liberar el camión: queda asignable de inmediato para una nueva
        // solicitud desde este mismo servicio
        if let Some(camion_id) = tramo.camion_id {
            CamionReferenceRepository::actualizar_disponibilidad(&mut tx, camion_id, true).await?;
        }

        tx.commit().await?;

        // Liberación remota best-effort; flota se reconcilia en la próxima
        // lectura si esto falla
        if let Some(camion_id) = tramo.camion_id {
            if let Err(e) = self.flota.actualizar_disponibilidad(camion_id, true).await {
                log::warn!(
                    "No se pudo liberar el camión {} en servicio-flota: {}",
                    camion_id,
                    e
                );
            }
        }

        log::info!("Tramo {} finalizado (último: {})", tramo_id, es_ultimo);
        Ok(tramo)
    }
}
