//! Servicio de Rutas (servicio-operaciones)
//!
//! Planificación de itinerarios: propone rutas tentativas para una
//! solicitud y consolida el itinerario elegido como la secuencia ordenada
//! de tramos de una ruta definitiva.

use num_traits::ToPrimitive;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

use crate::clients::flota_client::FlotaServiceClient;
use crate::dto::ruta_dto::{
    AsignarRutaDTO, Coordenada, RutaTentativaDTO, TramoTentativoDTO,
};
use crate::models::ruta::Ruta;
use crate::models::solicitud::EstadoSolicitud;
use crate::models::tramo::EstadoTramo;
use crate::repositories::ruta_repository::RutaRepository;
use crate::repositories::solicitud_repository::SolicitudRepository;
use crate::repositories::tramo_repository::TramoRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::geo::{calcular_distancia_haversine, estimar_tiempo_horas};

pub struct RutaService {
    pool: PgPool,
    solicitudes: SolicitudRepository,
    rutas: RutaRepository,
    flota: Arc<FlotaServiceClient>,
}

impl RutaService {
    pub fn new(pool: PgPool, flota: Arc<FlotaServiceClient>) -> Self {
        Self {
            solicitudes: SolicitudRepository::new(pool.clone()),
            rutas: RutaRepository::new(pool.clone()),
            pool,
            flota,
        }
    }

    /// Calcula rutas tentativas para una solicitud.
    ///
    /// Devuelve una lista ordenada de candidatas; hoy la única candidata es
    /// la ruta directa origen→destino. El costo sale de la tarifa activa del
    /// servicio-flota: sin tarifa confirmada no se cotiza (fail safe).
    pub async fn calcular_rutas_tentativas(
        &self,
        solicitud_id: i64,
    ) -> AppResult<Vec<RutaTentativaDTO>> {
        let solicitud = self
            .solicitudes
            .find_by_id(solicitud_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Solicitud con id {} no encontrada", solicitud_id))
            })?;

        let ruta_id = solicitud.ruta_id.ok_or_else(|| {
            AppError::NotFound(format!("La solicitud {} no tiene una ruta asignada", solicitud_id))
        })?;

        let ruta = self.rutas.find_by_id(ruta_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Ruta con id {} no encontrada", ruta_id))
        })?;

        let tarifa = self.flota.obtener_tarifa_activa().await.ok_or_else(|| {
            AppError::ServiceUnavailable(
                "No se pudo obtener la tarifa activa del servicio-flota".to_string(),
            )
        })?;
        let valor_km = tarifa.valor.to_f64().unwrap_or(0.0);

        let distancia_km = calcular_distancia_haversine(
            ruta.latitud_origen,
            ruta.longitud_origen,
            ruta.latitud_destino,
            ruta.longitud_destino,
        );
        let tiempo_horas = estimar_tiempo_horas(distancia_km);
        let costo_estimado = distancia_km * valor_km;

        let tramo = TramoTentativoDTO {
            orden: 1,
            tipo: "ORIGEN_DESTINO".to_string(),
            punto_inicio: Coordenada {
                latitud: ruta.latitud_origen,
                longitud: ruta.longitud_origen,
            },
            punto_fin: Coordenada {
                latitud: ruta.latitud_destino,
                longitud: ruta.longitud_destino,
            },
            distancia_km,
            tiempo_estimado_horas: tiempo_horas,
            costo_aproximado: costo_estimado,
            observaciones: Some("Ruta directa sin paradas intermedias".to_string()),
        };

        let ruta_tentativa = RutaTentativaDTO {
            tramos: vec![tramo],
            distancia_total: distancia_km,
            tiempo_estimado_total: tiempo_horas,
            costo_estimado_total: costo_estimado,
            cantidad_tramos: 1,
            cantidad_depositos: 0,
            tipo_ruta: "DIRECTA".to_string(),
            descripcion: format!(
                "Ruta directa de {:.2} km sin paradas intermedias",
                distancia_km
            ),
        };

        Ok(vec![ruta_tentativa])
    }

    /// Asigna la ruta definitiva a una solicitud.
    ///
    /// Crea la ruta con sus tramos en PENDIENTE y sin camión, en el orden
    /// recibido, y pasa la solicitud a PROGRAMADA. Es la única transición
    /// BORRADOR → PROGRAMADA del sistema; se admite re-planificar mientras
    /// la solicitud siga PROGRAMADA.
    pub async fn asignar_ruta_a_solicitud(
        &self,
        solicitud_id: i64,
        dto: AsignarRutaDTO,
    ) -> AppResult<Ruta> {
        dto.validate()?;

        if dto.tramos.is_empty() {
            return Err(AppError::BadRequest(
                "La ruta debe tener al menos un tramo".to_string(),
            ));
        }

        let solicitud = self
            .solicitudes
            .find_by_id(solicitud_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Solicitud con id {} no encontrada", solicitud_id))
            })?;

        let estado = EstadoSolicitud::parse(&solicitud.estado).ok_or_else(|| {
            AppError::Internal(format!("Estado de solicitud desconocido: {}", solicitud.estado))
        })?;

        if !matches!(estado, EstadoSolicitud::Borrador | EstadoSolicitud::Programada) {
            return Err(AppError::Conflict(format!(
                "No se puede asignar una ruta a la solicitud {} en estado {}",
                solicitud_id, solicitud.estado
            )));
        }

        // La tarifa se usa sólo para costear los tramos; sin tarifa el
        // itinerario igual se consolida con costos en cero.
        let valor_km = match self.flota.obtener_tarifa_activa().await {
            Some(tarifa) => tarifa.valor.to_f64().unwrap_or(0.0),
            None => {
                log::warn!(
                    "Sin tarifa activa al asignar ruta a la solicitud {}; costos en cero",
                    solicitud_id
                );
                0.0
            }
        };

        // Totales a partir de los tramos del itinerario
        let mut distancia_total = 0.0;
        let mut tiempo_total = 0.0;
        for tramo_dto in &dto.tramos {
            let distancia = calcular_distancia_haversine(
                tramo_dto.latitud_inicio,
                tramo_dto.longitud_inicio,
                tramo_dto.latitud_fin,
                tramo_dto.longitud_fin,
            );
            distancia_total += distancia;
            tiempo_total += estimar_tiempo_horas(distancia);
        }
        let costo_total = distancia_total * valor_km;

        let primer_tramo = &dto.tramos[0];
        let ultimo_tramo = &dto.tramos[dto.tramos.len() - 1];

        // La ruta borrador anterior conserva los textos de origen/destino
        let ruta_anterior = match solicitud.ruta_id {
            Some(id) => self.rutas.find_by_id(id).await?,
            None => None,
        };
        let (origen, destino) = match &ruta_anterior {
            Some(r) => (r.origen.clone(), r.destino.clone()),
            None => (None, None),
        };

        let mut tx = self.pool.begin().await?;

        let ruta = RutaRepository::crear_definitiva(
            &mut tx,
            origen.as_deref(),
            destino.as_deref(),
            primer_tramo.latitud_inicio,
            primer_tramo.longitud_inicio,
            ultimo_tramo.latitud_fin,
            ultimo_tramo.longitud_fin,
            distancia_total,
            tiempo_total,
            dto.tramos.len() as i32,
        )
        .await?;

        for tramo_dto in &dto.tramos {
            let distancia = calcular_distancia_haversine(
                tramo_dto.latitud_inicio,
                tramo_dto.longitud_inicio,
                tramo_dto.latitud_fin,
                tramo_dto.longitud_fin,
            );

            TramoRepository::crear(
                &mut tx,
                ruta.id,
                tramo_dto.orden,
                &tramo_dto.tipo,
                EstadoTramo::Pendiente.as_str(),
                tramo_dto.latitud_inicio,
                tramo_dto.longitud_inicio,
                tramo_dto.latitud_fin,
                tramo_dto.longitud_fin,
                distancia,
                estimar_tiempo_horas(distancia),
                distancia * valor_km,
                tramo_dto.fecha_estimada_inicio,
                tramo_dto.fecha_estimada_fin,
            )
            .await?;
        }

        SolicitudRepository::asignar_ruta(
            &mut tx,
            solicitud_id,
            ruta.id,
            EstadoSolicitud::Programada.as_str(),
            costo_total,
            tiempo_total,
        )
        .await?;

        // La ruta que quedó huérfana (borrador o plan anterior) se limpia
        if let Some(anterior) = ruta_anterior {
            TramoRepository::eliminar_por_ruta(&mut tx, anterior.id).await?;
            RutaRepository::eliminar(&mut tx, anterior.id).await?;
        }

        tx.commit().await?;

        log::info!(
            "Ruta {} asignada a la solicitud {} con {} tramo(s), {:.2} km",
            ruta.id,
            solicitud_id,
            dto.tramos.len(),
            distancia_total
        );
        Ok(ruta)
    }
}
