//! Referencia local de Camión
//!
//! Réplica de lectura, en el servicio-operaciones, de un camión que es
//! propiedad del servicio-flota. El bit `disponible` es autoritativo
//! localmente sólo entre una asignación confirmada y su liberación; las
//! capacidades se refrescan en cada lectura a través del cliente de flota.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CamionReference {
    /// Mismo id que el camión en servicio-flota
    pub id: i64,
    pub dominio: String,
    pub capacidad_peso: f64,
    pub capacidad_volumen: f64,
    pub disponible: bool,
    pub actualizado_en: DateTime<Utc>,
}
