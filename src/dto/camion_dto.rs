//! DTOs de Camión

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para registrar un camión en la flota
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CamionCreateDTO {
    #[validate(length(min = 6, max = 7))]
    pub dominio: String,

    #[validate(length(min = 2, max = 100))]
    pub modelo: Option<String>,

    #[validate(range(min = 1.0))]
    pub capacidad_peso: f64,

    #[validate(range(min = 0.1))]
    pub capacidad_volumen: f64,

    /// Por defecto: true
    pub disponible: Option<bool>,
}

/// Request para actualizar un camión existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CamionUpdateDTO {
    #[validate(length(min = 2, max = 100))]
    pub modelo: Option<String>,

    #[validate(range(min = 1.0))]
    pub capacidad_peso: Option<f64>,

    #[validate(range(min = 0.1))]
    pub capacidad_volumen: Option<f64>,

    pub disponible: Option<bool>,
}

/// Request del PATCH de disponibilidad (reserva/liberación idempotente)
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisponibilidadDTO {
    pub disponible: bool,
}

/// Filtros de búsqueda de camiones disponibles
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CamionesDisponiblesQuery {
    pub peso_minimo: Option<f64>,
    pub volumen_minimo: Option<f64>,
}
