//! Servicio de Solicitudes (servicio-operaciones)
//!
//! Orquesta el alta de una solicitud de transporte: resuelve o crea el
//! cliente, crea el contenedor en origen, crea la ruta borrador y la
//! solicitud en BORRADOR, todo dentro de una única transacción — una falla
//! en cualquier paso no deja ningún registro parcial.
//!
//! También expone la proyección de estado (ubicación del contenedor,
//! progreso y ETA) que consumen los clientes de la API.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::ruta_dto::RutaDTO;
use crate::dto::solicitud_dto::{ContenedorEstadoDTO, SolicitudCreateDTO, SolicitudEstadoDTO};
use crate::dto::tramo_dto::TramoDTO;
use crate::models::contenedor::EstadoContenedor;
use crate::models::solicitud::{EstadoSolicitud, Solicitud};
use crate::models::tramo::EstadoTramo;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::contenedor_repository::ContenedorRepository;
use crate::repositories::ruta_repository::RutaRepository;
use crate::repositories::solicitud_repository::SolicitudRepository;
use crate::repositories::tramo_repository::TramoRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct SolicitudService {
    pool: PgPool,
    solicitudes: SolicitudRepository,
    clientes: ClienteRepository,
    contenedores: ContenedorRepository,
    rutas: RutaRepository,
    tramos: TramoRepository,
}

impl SolicitudService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            solicitudes: SolicitudRepository::new(pool.clone()),
            clientes: ClienteRepository::new(pool.clone()),
            contenedores: ContenedorRepository::new(pool.clone()),
            rutas: RutaRepository::new(pool.clone()),
            tramos: TramoRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn obtener_todas(&self) -> AppResult<Vec<Solicitud>> {
        self.solicitudes.find_all().await
    }

    pub async fn obtener_por_id(&self, id: i64) -> AppResult<Solicitud> {
        self.solicitudes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Solicitud con id {} no encontrada", id)))
    }

    /// Alta orquestada de una solicitud nueva.
    pub async fn crear_nueva_solicitud(&self, dto: SolicitudCreateDTO) -> AppResult<Solicitud> {
        dto.validate()?;
        dto.validar_datos_cliente()?;

        let mut tx = self.pool.begin().await?;

        // 1. Resolver o crear el cliente
        let cliente = match dto.cliente_id {
            Some(cliente_id) => ClienteRepository::find_by_id_conn(&mut tx, cliente_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Cliente con id {} no encontrado", cliente_id))
                })?,
            None => {
                // validar_datos_cliente garantiza que acá hay datos de cliente
                let datos = dto.cliente.as_ref().ok_or_else(|| {
                    AppError::BadRequest("Faltan los datos del cliente nuevo".to_string())
                })?;
                ClienteRepository::crear(&mut tx, datos).await?
            }
        };

        // 2. Crear el contenedor en origen
        let contenedor = ContenedorRepository::crear(
            &mut tx,
            dto.contenedor.peso,
            dto.contenedor.volumen,
            EstadoContenedor::EnOrigen.as_str(),
            cliente.id,
        )
        .await?;

        // 3. Crear la ruta borrador; distancia y tiempo se calculan recién
        //    al consultar las rutas tentativas
        let ruta = RutaRepository::crear_borrador(
            &mut tx,
            dto.direccion_origen.as_deref(),
            dto.direccion_destino.as_deref(),
            dto.latitud_origen,
            dto.longitud_origen,
            dto.latitud_destino,
            dto.longitud_destino,
        )
        .await?;

        // 4. Crear la solicitud en borrador con estimaciones en cero
        let solicitud = SolicitudRepository::crear(
            &mut tx,
            cliente.id,
            contenedor.id,
            ruta.id,
            EstadoSolicitud::Borrador.as_str(),
            dto.observaciones.as_deref(),
        )
        .await?;

        tx.commit().await?;

        log::info!(
            "Solicitud {} creada para el cliente {} (contenedor {})",
            solicitud.id,
            cliente.id,
            contenedor.id
        );
        Ok(solicitud)
    }

    /// Estado completo de una solicitud: contenedor con su ubicación,
    /// ruta vigente, historial de tramos, progreso y ETA.
    pub async fn consultar_estado(&self, id: i64) -> AppResult<SolicitudEstadoDTO> {
        let solicitud = self.obtener_por_id(id).await?;

        let contenedor = self
            .contenedores
            .find_by_id(solicitud.contenedor_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Contenedor con id {} no encontrado",
                    solicitud.contenedor_id
                ))
            })?;

        let cliente = self.clientes.find_by_id(solicitud.cliente_id).await?;

        let (ruta_actual, historial_tramos) = match solicitud.ruta_id {
            Some(ruta_id) => {
                let ruta = self.rutas.find_by_id(ruta_id).await?;
                let tramos = self
                    .tramos
                    .find_by_ruta_ordenados(ruta_id)
                    .await?
                    .into_iter()
                    .map(TramoDTO::from)
                    .collect();
                (
                    ruta.map(|r| RutaDTO::from_ruta(r, Some(solicitud.id))),
                    tramos,
                )
            }
            None => (None, Vec::new()),
        };

        Ok(SolicitudEstadoDTO {
            id: solicitud.id,
            estado: solicitud.estado.clone(),
            contenedor: ContenedorEstadoDTO {
                id: contenedor.id,
                estado: contenedor.estado.clone(),
                ubicacion_actual: determinar_ubicacion_contenedor(&contenedor.estado),
                nombre_cliente: cliente.map(|c| c.nombre),
                solicitud_id: solicitud.id,
            },
            ruta_actual,
            historial_tramos,
            progreso: calcular_progreso(&solicitud.estado),
            eta_destino: calcular_eta(&solicitud),
            fecha_solicitud: solicitud.fecha_solicitud,
        })
    }

    /// Baja de una solicitud. Un envío en curso no se puede borrar: con la
    /// solicitud PROGRAMADA o EN_TRANSITO y tramos sin finalizar la baja se
    /// rechaza con conflicto. La baja arrastra ruta, tramos y contenedor.
    pub async fn eliminar_solicitud(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let solicitud = SolicitudRepository::find_by_id_conn(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Solicitud con id {} no encontrada", id)))?;

        let estado = EstadoSolicitud::parse(&solicitud.estado).ok_or_else(|| {
            AppError::Internal(format!("Estado de solicitud desconocido: {}", solicitud.estado))
        })?;

        if let Some(ruta_id) = solicitud.ruta_id {
            if matches!(estado, EstadoSolicitud::Programada | EstadoSolicitud::EnTransito) {
                let sin_finalizar = TramoRepository::contar_distintos_de(
                    &mut tx,
                    ruta_id,
                    EstadoTramo::Finalizado.as_str(),
                )
                .await?;

                if sin_finalizar > 0 {
                    return Err(AppError::Conflict(format!(
                        "No se puede eliminar la solicitud {}: tiene {} tramo(s) sin finalizar",
                        id, sin_finalizar
                    )));
                }
            }

            TramoRepository::eliminar_por_ruta(&mut tx, ruta_id).await?;
            SolicitudRepository::eliminar(&mut tx, id).await?;
            RutaRepository::eliminar(&mut tx, ruta_id).await?;
        } else {
            SolicitudRepository::eliminar(&mut tx, id).await?;
        }

        ContenedorRepository::eliminar(&mut tx, solicitud.contenedor_id).await?;

        tx.commit().await?;

        log::info!("Solicitud {} eliminada", id);
        Ok(())
    }
}

/// Determina la ubicación textual del contenedor según su estado
pub fn determinar_ubicacion_contenedor(estado: &str) -> String {
    match estado {
        "EN_ORIGEN" => {
            "El contenedor se encuentra en la dirección de origen, listo para ser recogido."
                .to_string()
        }
        "EN_DEPOSITO" => {
            "El contenedor está almacenado en un depósito intermedio de la ruta.".to_string()
        }
        "EN_VIAJE" => {
            "El contenedor está en tránsito hacia el siguiente punto de la ruta.".to_string()
        }
        "ENTREGADO" => {
            "El contenedor ha sido entregado exitosamente en la dirección de destino.".to_string()
        }
        otro => format!("Estado: {}", otro),
    }
}

/// Calcula el porcentaje de progreso basado en el estado de la solicitud
pub fn calcular_progreso(estado: &str) -> f64 {
    match estado {
        "BORRADOR" => 10.0,
        "PROGRAMADA" => 25.0,
        "EN_TRANSITO" => 60.0,
        "ENTREGADA" => 100.0,
        _ => 0.0,
    }
}

/// Calcula el tiempo estimado de llegada (ETA) al destino
pub fn calcular_eta(solicitud: &Solicitud) -> String {
    match solicitud.estado.as_str() {
        "BORRADOR" => "Pendiente de programación".to_string(),
        "PROGRAMADA" => "Esperando inicio de transporte".to_string(),
        "EN_TRANSITO" => {
            if solicitud.tiempo_estimado > 0.0 {
                format!("Aproximadamente {} horas", solicitud.tiempo_estimado.round() as i64)
            } else {
                "Calculando...".to_string()
            }
        }
        "ENTREGADA" => "Ya entregado".to_string(),
        _ => "No disponible".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn solicitud_con(estado: &str, tiempo_estimado: f64) -> Solicitud {
        Solicitud {
            id: 1,
            cliente_id: 1,
            contenedor_id: 1,
            ruta_id: Some(1),
            estado: estado.to_string(),
            observaciones: None,
            costo_estimado: 0.0,
            tiempo_estimado,
            costo_final: None,
            tiempo_real: None,
            fecha_solicitud: Utc::now(),
        }
    }

    #[test]
    fn test_ubicacion_estados_conocidos() {
        assert!(determinar_ubicacion_contenedor("EN_ORIGEN").contains("origen"));
        assert!(determinar_ubicacion_contenedor("EN_DEPOSITO").contains("depósito"));
        assert!(determinar_ubicacion_contenedor("EN_VIAJE").contains("tránsito"));
        assert!(determinar_ubicacion_contenedor("ENTREGADO").contains("entregado"));
    }

    #[test]
    fn test_ubicacion_estado_desconocido() {
        assert_eq!(determinar_ubicacion_contenedor("PERDIDO"), "Estado: PERDIDO");
    }

    #[test]
    fn test_progreso_por_estado() {
        assert_eq!(calcular_progreso("BORRADOR"), 10.0);
        assert_eq!(calcular_progreso("PROGRAMADA"), 25.0);
        assert_eq!(calcular_progreso("EN_TRANSITO"), 60.0);
        assert_eq!(calcular_progreso("ENTREGADA"), 100.0);
        assert_eq!(calcular_progreso("OTRO"), 0.0);
    }

    #[test]
    fn test_eta_en_transito_con_estimacion() {
        let solicitud = solicitud_con("EN_TRANSITO", 8.09);
        assert_eq!(calcular_eta(&solicitud), "Aproximadamente 8 horas");
    }

    #[test]
    fn test_eta_en_transito_sin_estimacion() {
        let solicitud = solicitud_con("EN_TRANSITO", 0.0);
        assert_eq!(calcular_eta(&solicitud), "Calculando...");
    }

    #[test]
    fn test_eta_por_estado() {
        assert_eq!(
            calcular_eta(&solicitud_con("BORRADOR", 0.0)),
            "Pendiente de programación"
        );
        assert_eq!(
            calcular_eta(&solicitud_con("PROGRAMADA", 0.0)),
            "Esperando inicio de transporte"
        );
        assert_eq!(calcular_eta(&solicitud_con("ENTREGADA", 0.0)), "Ya entregado");
        assert_eq!(calcular_eta(&solicitud_con("DESCONOCIDO", 0.0)), "No disponible");
    }
}
