//! DTOs de Ruta
//!
//! Las rutas tentativas se devuelven como lista ordenada de candidatas
//! aunque hoy el planificador proponga una sola (ruta directa): el contrato
//! admite múltiples candidatas rankeadas sin romper compatibilidad.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ruta::Ruta;

/// Par de coordenadas geográficas
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordenada {
    pub latitud: f64,
    pub longitud: f64,
}

/// Un tramo dentro de una ruta tentativa (sólo propuesta, nada persistido)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TramoTentativoDTO {
    pub orden: i32,
    pub tipo: String,
    pub punto_inicio: Coordenada,
    pub punto_fin: Coordenada,
    pub distancia_km: f64,
    pub tiempo_estimado_horas: f64,
    pub costo_aproximado: f64,
    pub observaciones: Option<String>,
}

/// Una ruta candidata para una solicitud
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RutaTentativaDTO {
    pub tramos: Vec<TramoTentativoDTO>,
    pub distancia_total: f64,
    pub tiempo_estimado_total: f64,
    pub costo_estimado_total: f64,
    pub cantidad_tramos: i32,
    pub cantidad_depositos: i32,
    pub tipo_ruta: String,
    pub descripcion: String,
}

/// Un tramo del itinerario elegido por el operador
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TramoCreateDTO {
    #[validate(range(min = 1))]
    pub orden: i32,

    #[validate(length(min = 2, max = 50))]
    pub tipo: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitud_inicio: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitud_inicio: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitud_fin: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitud_fin: f64,

    pub fecha_estimada_inicio: Option<DateTime<Utc>>,
    pub fecha_estimada_fin: Option<DateTime<Utc>>,
}

/// Request para asignar la ruta definitiva a una solicitud
///
/// La lista no puede ser vacía; esa regla se chequea en el servicio.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AsignarRutaDTO {
    #[validate]
    pub tramos: Vec<TramoCreateDTO>,
}

/// Respuesta de ruta para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RutaDTO {
    pub id: i64,
    pub origen: Option<String>,
    pub destino: Option<String>,
    pub latitud_origen: f64,
    pub longitud_origen: f64,
    pub latitud_destino: f64,
    pub longitud_destino: f64,
    pub distancia_km: f64,
    pub tiempo_estimado_horas: f64,
    pub cantidad_tramos: i32,
    pub solicitud_id: Option<i64>,
}

impl RutaDTO {
    pub fn from_ruta(ruta: Ruta, solicitud_id: Option<i64>) -> Self {
        Self {
            id: ruta.id,
            origen: ruta.origen,
            destino: ruta.destino,
            latitud_origen: ruta.latitud_origen,
            longitud_origen: ruta.longitud_origen,
            latitud_destino: ruta.latitud_destino,
            longitud_destino: ruta.longitud_destino,
            distancia_km: ruta.distancia_km,
            tiempo_estimado_horas: ruta.tiempo_estimado_horas,
            cantidad_tramos: ruta.cantidad_tramos,
            solicitud_id,
        }
    }
}
