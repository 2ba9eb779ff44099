//! Modelo de Depósito
//!
//! Punto intermedio de almacenamiento administrado por el servicio-flota.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Deposito {
    pub id: i64,
    pub nombre: String,
    pub direccion: Option<String>,
    pub latitud: f64,
    pub longitud: f64,
    /// Costo diario de estadía de un contenedor en el depósito
    pub costo_estadia_dia: f64,
}
