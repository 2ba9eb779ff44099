//! DTOs de Solicitud
//!
//! La creación de una solicitud acepta un cliente existente (por id) o los
//! datos de un cliente nuevo, pero nunca ambos ni ninguno.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::ruta_dto::RutaDTO;
use crate::dto::tramo_dto::TramoDTO;
use crate::utils::errors::{AppError, AppResult};

/// Datos de un cliente nuevo embebidos en la creación de la solicitud
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClienteCreateDTO {
    #[validate(length(min = 2, max = 100))]
    pub nombre: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 30))]
    pub telefono: Option<String>,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,
}

/// Datos del contenedor a transportar
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContenedorCreateDTO {
    #[validate(range(min = 0.1))]
    pub peso: f64,

    #[validate(range(min = 0.01))]
    pub volumen: f64,
}

/// Request de creación de una solicitud de transporte
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudCreateDTO {
    /// Cliente existente; excluyente con `cliente`
    pub cliente_id: Option<i64>,

    /// Cliente nuevo; excluyente con `clienteId`
    #[validate]
    pub cliente: Option<ClienteCreateDTO>,

    #[validate]
    pub contenedor: ContenedorCreateDTO,

    #[validate(length(max = 200))]
    pub direccion_origen: Option<String>,

    #[validate(length(max = 200))]
    pub direccion_destino: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitud_origen: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitud_origen: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitud_destino: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitud_destino: f64,

    #[validate(length(max = 500))]
    pub observaciones: Option<String>,
}

impl SolicitudCreateDTO {
    /// Debe venir exactamente uno de {clienteId, cliente}.
    pub fn validar_datos_cliente(&self) -> AppResult<()> {
        match (self.cliente_id, &self.cliente) {
            (Some(_), Some(_)) => Err(AppError::BadRequest(
                "Debe proporcionar clienteId O datos de cliente nuevo, pero no ambos".to_string(),
            )),
            (None, None) => Err(AppError::BadRequest(
                "Debe proporcionar clienteId o los datos de un cliente nuevo".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Estado del contenedor dentro de la consulta de estado de la solicitud
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContenedorEstadoDTO {
    pub id: i64,
    pub estado: String,
    /// Descripción textual de la ubicación actual
    pub ubicacion_actual: String,
    pub nombre_cliente: Option<String>,
    pub solicitud_id: i64,
}

/// Respuesta de la consulta de estado completo de una solicitud
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudEstadoDTO {
    pub id: i64,
    pub estado: String,
    pub contenedor: ContenedorEstadoDTO,
    pub ruta_actual: Option<RutaDTO>,
    pub historial_tramos: Vec<TramoDTO>,
    /// Porcentaje de avance derivado del estado
    pub progreso: f64,
    pub eta_destino: String,
    pub fecha_solicitud: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_base() -> SolicitudCreateDTO {
        SolicitudCreateDTO {
            cliente_id: None,
            cliente: None,
            contenedor: ContenedorCreateDTO {
                peso: 500.0,
                volumen: 10.0,
            },
            direccion_origen: None,
            direccion_destino: None,
            latitud_origen: -31.4,
            longitud_origen: -64.2,
            latitud_destino: -34.6,
            longitud_destino: -58.4,
            observaciones: None,
        }
    }

    #[test]
    fn test_rechaza_sin_cliente() {
        let dto = dto_base();
        assert!(dto.validar_datos_cliente().is_err());
    }

    #[test]
    fn test_rechaza_ambos_clientes() {
        let mut dto = dto_base();
        dto.cliente_id = Some(1);
        dto.cliente = Some(ClienteCreateDTO {
            nombre: "Acme".to_string(),
            email: None,
            telefono: None,
            direccion: None,
        });
        assert!(dto.validar_datos_cliente().is_err());
    }

    #[test]
    fn test_acepta_cliente_por_id() {
        let mut dto = dto_base();
        dto.cliente_id = Some(1);
        assert!(dto.validar_datos_cliente().is_ok());
    }

    #[test]
    fn test_acepta_cliente_nuevo() {
        let mut dto = dto_base();
        dto.cliente = Some(ClienteCreateDTO {
            nombre: "Acme".to_string(),
            email: None,
            telefono: None,
            direccion: None,
        });
        assert!(dto.validar_datos_cliente().is_ok());
    }
}
