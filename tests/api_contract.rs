//! Contrato HTTP de la API
//!
//! Verifica el mapeo de errores a códigos de estado (404 para ids
//! inexistentes, 400 para conflictos de estado y entradas inválidas) y las
//! formas JSON en camelCase que viajan entre servicios.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use transporte_backend::dto::camion_dto::{CamionesDisponiblesQuery, DisponibilidadDTO};
use transporte_backend::dto::solicitud_dto::SolicitudCreateDTO;
use transporte_backend::dto::tramo_dto::AsignacionCamionDTO;
use transporte_backend::utils::errors::AppError;

#[test]
fn test_not_found_mapea_a_404() {
    let response = AppError::NotFound("Tramo con id 9 no encontrado".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_conflicto_de_estado_mapea_a_400() {
    let response =
        AppError::Conflict("El tramo no está en estado ASIGNADO".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_capacidad_excedida_mapea_a_400() {
    let response = AppError::CapacidadExcedida {
        detalle: "El camión no tiene capacidad de peso suficiente".to_string(),
        requerido: 1500.0,
        disponible: 1000.0,
    }
    .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_camion_no_disponible_mapea_a_400() {
    let response =
        AppError::CamionNoDisponible("El camión AB123CD no está disponible".to_string())
            .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_flota_caida_mapea_a_503() {
    let response =
        AppError::ServiceUnavailable("No se pudo obtener la tarifa activa".to_string())
            .into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_cuerpo_de_error_con_detalles_de_capacidad() {
    let response = AppError::CapacidadExcedida {
        detalle: "El camión no tiene capacidad de peso suficiente".to_string(),
        requerido: 1500.0,
        disponible: 1000.0,
    }
    .into_response();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("el cuerpo del error debe poder leerse");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("el cuerpo debe ser JSON");

    assert_eq!(body["code"], "CAPACIDAD_EXCEDIDA");
    assert_eq!(body["details"]["requerido"], 1500.0);
    assert_eq!(body["details"]["disponible"], 1000.0);
}

#[test]
fn test_solicitud_create_acepta_camel_case() {
    let dto: SolicitudCreateDTO = serde_json::from_value(json!({
        "cliente": {
            "nombre": "Acme",
            "email": "compras@acme.com"
        },
        "contenedor": { "peso": 500.0, "volumen": 10.0 },
        "latitudOrigen": -31.4,
        "longitudOrigen": -64.2,
        "latitudDestino": -34.6,
        "longitudDestino": -58.4,
        "observaciones": "Frágil"
    }))
    .expect("el request camelCase debe deserializar");

    assert_eq!(dto.contenedor.peso, 500.0);
    assert!(dto.validar_datos_cliente().is_ok());
}

#[test]
fn test_asignacion_camion_acepta_camel_case() {
    let dto: AsignacionCamionDTO =
        serde_json::from_value(json!({ "camionId": 7 })).expect("camionId debe deserializar");
    assert_eq!(dto.camion_id, 7);
}

#[test]
fn test_query_disponibles_acepta_camel_case() {
    let query: CamionesDisponiblesQuery =
        serde_json::from_value(json!({ "pesoMinimo": 1000.0, "volumenMinimo": 15.0 }))
            .expect("los filtros camelCase deben deserializar");
    assert_eq!(query.peso_minimo, Some(1000.0));
    assert_eq!(query.volumen_minimo, Some(15.0));
}

#[test]
fn test_disponibilidad_round_trip() {
    let serializado = serde_json::to_value(DisponibilidadDTO { disponible: false })
        .expect("el DTO debe serializar");
    assert_eq!(serializado, json!({ "disponible": false }));
}
