//! Modelo de Ruta
//!
//! Itinerario de una solicitud: coordenadas de origen/destino, totales
//! agregados y la colección ordenada de tramos que le pertenecen en forma
//! exclusiva. `tramos_restantes` se decrementa transaccionalmente al
//! finalizar cada tramo; llega a cero exactamente cuando se finaliza el último.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ruta {
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
    /// Tramos aún no finalizados; 0 cuando la ruta está completa
    pub tramos_restantes: i32,
}
