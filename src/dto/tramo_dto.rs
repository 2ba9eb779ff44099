//! DTOs de Tramo

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::tramo::Tramo;

/// Request para asignar un camión a un tramo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsignacionCamionDTO {
    pub camion_id: i64,
}

/// Respuesta de tramo para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TramoDTO {
    pub id: i64,
    pub ruta_id: i64,
    pub orden: i32,
    pub tipo: String,
    pub estado: String,
    pub punto_inicio_latitud: f64,
    pub punto_inicio_longitud: f64,
    pub punto_fin_latitud: f64,
    pub punto_fin_longitud: f64,
    pub distancia_km: f64,
    pub tiempo_estimado_horas: f64,
    pub costo_aproximado: f64,
    pub costo_real: Option<f64>,
    pub fecha_estimada_inicio: Option<DateTime<Utc>>,
    pub fecha_estimada_fin: Option<DateTime<Utc>>,
    pub fecha_real_inicio: Option<DateTime<Utc>>,
    pub fecha_real_fin: Option<DateTime<Utc>>,
    pub camion_id: Option<i64>,
}

impl From<Tramo> for TramoDTO {
    fn from(tramo: Tramo) -> Self {
        Self {
            id: tramo.id,
            ruta_id: tramo.ruta_id,
            orden: tramo.orden,
            tipo: tramo.tipo,
            estado: tramo.estado,
            punto_inicio_latitud: tramo.latitud_inicio,
            punto_inicio_longitud: tramo.longitud_inicio,
            punto_fin_latitud: tramo.latitud_fin,
            punto_fin_longitud: tramo.longitud_fin,
            distancia_km: tramo.distancia_km,
            tiempo_estimado_horas: tramo.tiempo_estimado_horas,
            costo_aproximado: tramo.costo_aproximado,
            costo_real: tramo.costo_real,
            fecha_estimada_inicio: tramo.fecha_estimada_inicio,
            fecha_estimada_fin: tramo.fecha_estimada_fin,
            fecha_real_inicio: tramo.fecha_real_inicio,
            fecha_real_fin: tramo.fecha_real_fin,
            camion_id: tramo.camion_id,
        }
    }
}
