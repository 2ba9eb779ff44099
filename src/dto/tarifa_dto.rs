//! DTOs de Tarifa

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear una nueva tarifa
///
/// Una tarifa nueva nace activa salvo que se indique lo contrario;
/// activarla cierra la vigencia de la tarifa activa anterior.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TarifaCreateDTO {
    #[validate(length(min = 2, max = 100))]
    pub tipo: String,

    pub valor: Decimal,

    #[validate(length(max = 500))]
    pub descripcion: Option<String>,

    /// Por defecto: ahora
    pub vigencia_desde: Option<DateTime<Utc>>,

    /// Por defecto: true
    pub activa: Option<bool>,
}

/// Request para actualizar una tarifa existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TarifaUpdateDTO {
    pub valor: Option<Decimal>,

    #[validate(length(max = 500))]
    pub descripcion: Option<String>,

    pub vigencia_hasta: Option<DateTime<Utc>>,

    pub activa: Option<bool>,
}

/// Respuesta de la consulta de existencia de tarifa activa
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExisteActivaDTO {
    pub existe_activa: bool,
}
