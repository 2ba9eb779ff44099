//! Modelo de Tarifa
//!
//! Registro de precios versionado del servicio-flota. El sistema mantiene
//! a lo sumo una tarifa activa a la vez: activar una tarifa cierra la
//! vigencia de la anterior dentro de la misma transacción.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tarifa - mapea a la tabla tarifas del servicio-flota
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tarifa {
    pub id: i64,
    /// Tipo de tarifa (ej: "COSTO_POR_KM", "ESTADIA_DIARIA_DEPOSITO")
    pub tipo: String,
    /// Valor monetario de la tarifa
    pub valor: Decimal,
    pub descripcion: Option<String>,
    pub vigencia_desde: DateTime<Utc>,
    pub vigencia_hasta: Option<DateTime<Utc>>,
    pub activa: bool,
}

impl Tarifa {
    /// Cierra la ventana de vigencia de una tarifa al desactivarla.
    pub fn cerrar_vigencia(&mut self, instante: DateTime<Utc>) {
        self.activa = false;
        self.vigencia_hasta = Some(instante);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn tarifa_activa() -> Tarifa {
        Tarifa {
            id: 1,
            tipo: "COSTO_POR_KM".to_string(),
            valor: Decimal::new(500, 2),
            descripcion: None,
            vigencia_desde: Utc::now(),
            vigencia_hasta: None,
            activa: true,
        }
    }

    #[test]
    fn test_cerrar_vigencia_desactiva_y_estampa_fin() {
        let mut tarifa = tarifa_activa();
        let instante = Utc::now();

        tarifa.cerrar_vigencia(instante);

        assert!(!tarifa.activa);
        assert_eq!(tarifa.vigencia_hasta, Some(instante));
    }
}
