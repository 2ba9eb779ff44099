//! Modelo de Cliente
//!
//! Dueño de contenedores y solicitudes en el servicio-operaciones.
//! Su ciclo de vida es independiente de ambas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}
