//! Modelo de Camión
//!
//! Recurso de flota con capacidades físicas y flag de disponibilidad.
//! La disponibilidad es la fuente de verdad del sistema: el lado de
//! operaciones la reserva y libera vía PATCH /camiones/{id}/disponibilidad.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

lazy_static! {
    /// Formato de patente argentina: viejo (ABC123) o Mercosur (AB123CD)
    static ref DOMINIO_RE: Regex = Regex::new(r"^[A-Z]{3}\d{3}$|^[A-Z]{2}\d{3}[A-Z]{2}$").unwrap();
}

/// Camión - mapea a la tabla camiones del servicio-flota
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Camion {
    pub id: i64,
    /// Patente del camión
    pub dominio: String,
    pub modelo: Option<String>,
    /// Capacidad de carga en kilogramos
    pub capacidad_peso: f64,
    /// Capacidad de carga en metros cúbicos
    pub capacidad_volumen: f64,
    pub disponible: bool,
    pub created_at: DateTime<Utc>,
}

/// Valida el formato de una patente (dominio)
pub fn dominio_valido(dominio: &str) -> bool {
    DOMINIO_RE.is_match(dominio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominio_formato_viejo() {
        assert!(dominio_valido("ABC123"));
    }

    #[test]
    fn test_dominio_formato_mercosur() {
        assert!(dominio_valido("AB123CD"));
    }

    #[test]
    fn test_dominio_invalido() {
        assert!(!dominio_valido("abc123"));
        assert!(!dominio_valido("AB12CD"));
        assert!(!dominio_valido(""));
        assert!(!dominio_valido("ABCD1234"));
    }
}
