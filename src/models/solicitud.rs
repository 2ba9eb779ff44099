//! Modelo de Solicitud
//!
//! Unidad de trabajo de más alto nivel: un cliente + un contenedor + una ruta.
//! El estado avanza en forma monótona BORRADOR → PROGRAMADA → EN_TRANSITO →
//! ENTREGADA; ninguna transición puede saltar hacia atrás.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estados posibles de una solicitud, en orden de avance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoSolicitud {
    Borrador,
    Programada,
    EnTransito,
    Entregada,
}

impl EstadoSolicitud {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoSolicitud::Borrador => "BORRADOR",
            EstadoSolicitud::Programada => "PROGRAMADA",
            EstadoSolicitud::EnTransito => "EN_TRANSITO",
            EstadoSolicitud::Entregada => "ENTREGADA",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "BORRADOR" => Some(EstadoSolicitud::Borrador),
            "PROGRAMADA" => Some(EstadoSolicitud::Programada),
            "EN_TRANSITO" => Some(EstadoSolicitud::EnTransito),
            "ENTREGADA" => Some(EstadoSolicitud::Entregada),
            _ => None,
        }
    }

    /// Posición dentro del orden monótono de estados
    pub fn orden(&self) -> u8 {
        match self {
            EstadoSolicitud::Borrador => 0,
            EstadoSolicitud::Programada => 1,
            EstadoSolicitud::EnTransito => 2,
            EstadoSolicitud::Entregada => 3,
        }
    }

    /// Una transición es válida si no retrocede en el orden de estados.
    pub fn puede_transicionar_a(&self, destino: EstadoSolicitud) -> bool {
        destino.orden() >= self.orden()
    }
}

/// Solicitud - mapea a la tabla solicitudes del servicio-operaciones
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Solicitud {
    pub id: i64,
    pub cliente_id: i64,
    pub contenedor_id: i64,
    /// Nula hasta que se asigna una ruta definitiva
    pub ruta_id: Option<i64>,
    pub estado: String,
    pub observaciones: Option<String>,
    pub costo_estimado: f64,
    /// Tiempo estimado total en horas
    pub tiempo_estimado: f64,
    pub costo_final: Option<f64>,
    /// Tiempo real total en horas, estampado al completarse
    pub tiempo_real: Option<f64>,
    pub fecha_solicitud: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orden_monotono() {
        assert!(EstadoSolicitud::Borrador.puede_transicionar_a(EstadoSolicitud::Programada));
        assert!(EstadoSolicitud::Programada.puede_transicionar_a(EstadoSolicitud::EnTransito));
        assert!(EstadoSolicitud::EnTransito.puede_transicionar_a(EstadoSolicitud::Entregada));
    }

    #[test]
    fn test_no_retrocede() {
        assert!(!EstadoSolicitud::Entregada.puede_transicionar_a(EstadoSolicitud::EnTransito));
        assert!(!EstadoSolicitud::EnTransito.puede_transicionar_a(EstadoSolicitud::Programada));
        assert!(!EstadoSolicitud::Programada.puede_transicionar_a(EstadoSolicitud::Borrador));
    }

    #[test]
    fn test_transicion_al_mismo_estado_es_valida() {
        // el inicio de un segundo tramo no debe fallar aunque la solicitud
        // ya esté EN_TRANSITO
        assert!(EstadoSolicitud::EnTransito.puede_transicionar_a(EstadoSolicitud::EnTransito));
    }

    #[test]
    fn test_parse_round_trip() {
        for estado in [
            EstadoSolicitud::Borrador,
            EstadoSolicitud::Programada,
            EstadoSolicitud::EnTransito,
            EstadoSolicitud::Entregada,
        ] {
            assert_eq!(EstadoSolicitud::parse(estado.as_str()), Some(estado));
        }
        assert_eq!(EstadoSolicitud::parse("CUALQUIERA"), None);
    }
}
