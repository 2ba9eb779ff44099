//! Modelo de Contenedor
//!
//! Unidad física transportada. Se crea junto con la solicitud y su estado
//! sólo es mutado por las transiciones del ciclo de vida de los tramos:
//! el estado del contenedor siempre acompaña al tramo más avanzado de la ruta.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estados posibles de un contenedor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoContenedor {
    EnOrigen,
    EnViaje,
    EnDeposito,
    Entregado,
}

impl EstadoContenedor {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoContenedor::EnOrigen => "EN_ORIGEN",
            EstadoContenedor::EnViaje => "EN_VIAJE",
            EstadoContenedor::EnDeposito => "EN_DEPOSITO",
            EstadoContenedor::Entregado => "ENTREGADO",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "EN_ORIGEN" => Some(EstadoContenedor::EnOrigen),
            "EN_VIAJE" => Some(EstadoContenedor::EnViaje),
            "EN_DEPOSITO" => Some(EstadoContenedor::EnDeposito),
            "ENTREGADO" => Some(EstadoContenedor::Entregado),
            _ => None,
        }
    }
}

/// Contenedor - mapea a la tabla contenedores del servicio-operaciones
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contenedor {
    pub id: i64,
    /// Peso de la carga en kilogramos
    pub peso: f64,
    /// Volumen de la carga en metros cúbicos
    pub volumen: f64,
    pub estado: String,
    pub cliente_id: i64,
}
