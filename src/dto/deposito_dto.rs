//! DTOs de Depósito

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepositoCreateDTO {
    #[validate(length(min = 2, max = 100))]
    pub nombre: String,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitud: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitud: f64,

    #[validate(range(min = 0.0))]
    pub costo_estadia_dia: f64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepositoUpdateDTO {
    #[validate(length(min = 2, max = 100))]
    pub nombre: Option<String>,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitud: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitud: Option<f64>,

    #[validate(range(min = 0.0))]
    pub costo_estadia_dia: Option<f64>,
}
