//! Modelo de Tramo
//!
//! Un tramo es una etapa de la ruta y la unidad sobre la que opera la
//! máquina de estados de asignación y viaje:
//!
//! PENDIENTE → ASIGNADO → INICIADO → FINALIZADO
//!
//! Ninguna transición puede saltearse ni revertirse. Un tramo tiene camión
//! asignado si y sólo si su estado es ASIGNADO, INICIADO o FINALIZADO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::camion_reference::CamionReference;
use crate::models::contenedor::{Contenedor, EstadoContenedor};
use crate::utils::errors::{AppError, AppResult};

/// Estados posibles de un tramo, en orden de avance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoTramo {
    Pendiente,
    Asignado,
    Iniciado,
    Finalizado,
}

impl EstadoTramo {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoTramo::Pendiente => "PENDIENTE",
            EstadoTramo::Asignado => "ASIGNADO",
            EstadoTramo::Iniciado => "INICIADO",
            EstadoTramo::Finalizado => "FINALIZADO",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "PENDIENTE" => Some(EstadoTramo::Pendiente),
            "ASIGNADO" => Some(EstadoTramo::Asignado),
            "INICIADO" => Some(EstadoTramo::Iniciado),
            "FINALIZADO" => Some(EstadoTramo::Finalizado),
            _ => None,
        }
    }
}

/// Tramo - mapea a la tabla tramos del servicio-operaciones
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tramo {
    pub id: i64,
    pub ruta_id: i64,
    /// Posición del tramo dentro de la ruta
    pub orden: i32,
    /// Tipo de tramo (ej: ORIGEN_DESTINO, ORIGEN_DEPOSITO, DEPOSITO_DESTINO)
    pub tipo: String,
    pub estado: String,
    pub latitud_inicio: f64,
    pub longitud_inicio: f64,
    pub latitud_fin: f64,
    pub longitud_fin: f64,
    pub distancia_km: f64,
    pub tiempo_estimado_horas: f64,
    pub costo_aproximado: f64,
    pub costo_real: Option<f64>,
    pub fecha_estimada_inicio: Option<DateTime<Utc>>,
    pub fecha_estimada_fin: Option<DateTime<Utc>>,
    pub fecha_real_inicio: Option<DateTime<Utc>>,
    pub fecha_real_fin: Option<DateTime<Utc>>,
    /// Camión asignado (id de la referencia local / camión de flota)
    pub camion_id: Option<i64>,
}

impl Tramo {
    pub fn estado_actual(&self) -> AppResult<EstadoTramo> {
        EstadoTramo::parse(&self.estado)
            .ok_or_else(|| AppError::Internal(format!("Estado de tramo desconocido: {}", self.estado)))
    }

    /// Un tramo pasa por un depósito si su tipo lo nombra
    pub fn es_tramo_deposito(&self) -> bool {
        self.tipo.contains("DEPOSITO")
    }

    /// Valida las precondiciones para asignar un camión a este tramo.
    ///
    /// No muta nada: el servicio aplica los cambios sólo si todas las
    /// validaciones pasan.
    pub fn validar_asignacion(
        &self,
        camion: &CamionReference,
        contenedor: &Contenedor,
    ) -> AppResult<()> {
        if self.camion_id.is_some() {
            return Err(AppError::Conflict(format!(
                "El tramo {} ya tiene un camión asignado",
                self.id
            )));
        }

        if self.estado_actual()? != EstadoTramo::Pendiente {
            return Err(AppError::Conflict(format!(
                "El tramo debe estar en estado PENDIENTE para asignar un camión. Estado actual: {}",
                self.estado
            )));
        }

        if !camion.disponible {
            return Err(AppError::CamionNoDisponible(format!(
                "El camión con dominio {} no está disponible",
                camion.dominio
            )));
        }

        if camion.capacidad_peso < contenedor.peso {
            return Err(AppError::CapacidadExcedida {
                detalle: format!(
                    "El camión no tiene capacidad de peso suficiente. Requerido: {:.2} kg, Disponible: {:.2} kg",
                    contenedor.peso, camion.capacidad_peso
                ),
                requerido: contenedor.peso,
                disponible: camion.capacidad_peso,
            });
        }

        if camion.capacidad_volumen < contenedor.volumen {
            return Err(AppError::CapacidadExcedida {
                detalle: format!(
                    "El camión no tiene capacidad de volumen suficiente. Requerido: {:.2} m³, Disponible: {:.2} m³",
                    contenedor.volumen, camion.capacidad_volumen
                ),
                requerido: contenedor.volumen,
                disponible: camion.capacidad_volumen,
            });
        }

        Ok(())
    }

    /// Valida que el tramo pueda iniciarse (sólo desde ASIGNADO).
    pub fn validar_inicio(&self) -> AppResult<()> {
        if self.estado_actual()? != EstadoTramo::Asignado {
            return Err(AppError::Conflict(format!(
                "El tramo no está en estado ASIGNADO. Estado actual: {}",
                self.estado
            )));
        }
        Ok(())
    }

    /// Valida que el tramo pueda finalizarse (sólo desde INICIADO).
    pub fn validar_fin(&self) -> AppResult<()> {
        if self.estado_actual()? != EstadoTramo::Iniciado {
            return Err(AppError::Conflict(format!(
                "El tramo no está en estado INICIADO. Estado actual: {}",
                self.estado
            )));
        }
        Ok(())
    }
}

/// Decide el nuevo estado del contenedor al finalizar un tramo.
///
/// Si el tramo finalizado era el último de la ruta el contenedor queda
/// ENTREGADO; si no lo era y el tramo pasa por un depósito queda
/// EN_DEPOSITO; en cualquier otro caso el contenedor no cambia.
pub fn estado_contenedor_al_finalizar(tipo: &str, es_ultimo: bool) -> Option<EstadoContenedor> {
    if es_ultimo {
        Some(EstadoContenedor::Entregado)
    } else if tipo.contains("DEPOSITO") {
        Some(EstadoContenedor::EnDeposito)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tramo_base(estado: EstadoTramo, camion_id: Option<i64>) -> Tramo {
        Tramo {
            id: 1,
            ruta_id: 1,
            orden: 1,
            tipo: "ORIGEN_DESTINO".to_string(),
            estado: estado.as_str().to_string(),
            latitud_inicio: -31.4,
            longitud_inicio: -64.2,
            latitud_fin: -34.6,
            longitud_fin: -58.4,
            distancia_km: 647.24,
            tiempo_estimado_horas: 8.09,
            costo_aproximado: 3236.2,
            costo_real: None,
            fecha_estimada_inicio: None,
            fecha_estimada_fin: None,
            fecha_real_inicio: None,
            fecha_real_fin: None,
            camion_id,
        }
    }

    fn camion_disponible() -> CamionReference {
        CamionReference {
            id: 10,
            dominio: "AB123CD".to_string(),
            capacidad_peso: 2000.0,
            capacidad_volumen: 20.0,
            disponible: true,
            actualizado_en: Utc::now(),
        }
    }

    fn contenedor(peso: f64, volumen: f64) -> Contenedor {
        Contenedor {
            id: 5,
            peso,
            volumen,
            estado: "EN_ORIGEN".to_string(),
            cliente_id: 1,
        }
    }

    #[test]
    fn test_asignacion_valida() {
        let tramo = tramo_base(EstadoTramo::Pendiente, None);
        let camion = camion_disponible();
        let cont = contenedor(500.0, 10.0);

        assert!(tramo.validar_asignacion(&camion, &cont).is_ok());
    }

    #[test]
    fn test_asignacion_rechaza_tramo_con_camion() {
        let tramo = tramo_base(EstadoTramo::Asignado, Some(10));
        let camion = camion_disponible();
        let cont = contenedor(500.0, 10.0);

        let err = tramo.validar_asignacion(&camion, &cont).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_asignacion_rechaza_estado_no_pendiente() {
        let tramo = tramo_base(EstadoTramo::Finalizado, None);
        let camion = camion_disponible();
        let cont = contenedor(500.0, 10.0);

        let err = tramo.validar_asignacion(&camion, &cont).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_asignacion_rechaza_camion_no_disponible() {
        let tramo = tramo_base(EstadoTramo::Pendiente, None);
        let mut camion = camion_disponible();
        camion.disponible = false;
        let cont = contenedor(500.0, 10.0);

        let err = tramo.validar_asignacion(&camion, &cont).unwrap_err();
        assert!(matches!(err, AppError::CamionNoDisponible(_)));
    }

    #[test]
    fn test_asignacion_rechaza_peso_excedido() {
        let tramo = tramo_base(EstadoTramo::Pendiente, None);
        let mut camion = camion_disponible();
        camion.capacidad_peso = 1000.0;
        let cont = contenedor(1500.0, 10.0);

        match tramo.validar_asignacion(&camion, &cont).unwrap_err() {
            AppError::CapacidadExcedida {
                requerido,
                disponible,
                ..
            } => {
                assert_eq!(requerido, 1500.0);
                assert_eq!(disponible, 1000.0);
            }
            otro => panic!("se esperaba CapacidadExcedida, se obtuvo {:?}", otro),
        }
    }

    #[test]
    fn test_asignacion_rechaza_volumen_excedido() {
        let tramo = tramo_base(EstadoTramo::Pendiente, None);
        let mut camion = camion_disponible();
        camion.capacidad_volumen = 5.0;
        let cont = contenedor(500.0, 10.0);

        let err = tramo.validar_asignacion(&camion, &cont).unwrap_err();
        assert!(matches!(err, AppError::CapacidadExcedida { .. }));
    }

    #[test]
    fn test_inicio_solo_desde_asignado() {
        assert!(tramo_base(EstadoTramo::Asignado, Some(10)).validar_inicio().is_ok());
        assert!(tramo_base(EstadoTramo::Pendiente, None).validar_inicio().is_err());
        assert!(tramo_base(EstadoTramo::Iniciado, Some(10)).validar_inicio().is_err());
        assert!(tramo_base(EstadoTramo::Finalizado, Some(10)).validar_inicio().is_err());
    }

    #[test]
    fn test_fin_solo_desde_iniciado() {
        assert!(tramo_base(EstadoTramo::Iniciado, Some(10)).validar_fin().is_ok());
        assert!(tramo_base(EstadoTramo::Pendiente, None).validar_fin().is_err());
        assert!(tramo_base(EstadoTramo::Asignado, Some(10)).validar_fin().is_err());
        assert!(tramo_base(EstadoTramo::Finalizado, Some(10)).validar_fin().is_err());
    }

    #[test]
    fn test_contenedor_entregado_en_ultimo_tramo() {
        assert_eq!(
            estado_contenedor_al_finalizar("ORIGEN_DESTINO", true),
            Some(EstadoContenedor::Entregado)
        );
    }

    #[test]
    fn test_contenedor_en_deposito_en_tramo_intermedio() {
        assert_eq!(
            estado_contenedor_al_finalizar("ORIGEN_DEPOSITO", false),
            Some(EstadoContenedor::EnDeposito)
        );
        assert_eq!(estado_contenedor_al_finalizar("ORIGEN_DESTINO", false), None);
    }

    #[test]
    fn test_ciclo_completo_del_tramo() {
        // recorrido completo de la máquina de estados con las cascadas
        // esperadas sobre el contenedor
        let mut tramo = tramo_base(EstadoTramo::Pendiente, None);
        let mut camion = camion_disponible();
        let mut cont = contenedor(500.0, 10.0);

        tramo.validar_asignacion(&camion, &cont).unwrap();
        tramo.camion_id = Some(camion.id);
        tramo.estado = EstadoTramo::Asignado.as_str().to_string();
        camion.disponible = false;

        tramo.validar_inicio().unwrap();
        tramo.estado = EstadoTramo::Iniciado.as_str().to_string();
        cont.estado = EstadoContenedor::EnViaje.as_str().to_string();

        tramo.validar_fin().unwrap();
        tramo.estado = EstadoTramo::Finalizado.as_str().to_string();
        let nuevo_estado = estado_contenedor_al_finalizar(&tramo.tipo, true).unwrap();
        cont.estado = nuevo_estado.as_str().to_string();
        camion.disponible = true;

        assert_eq!(tramo.estado, "FINALIZADO");
        assert_eq!(cont.estado, "ENTREGADO");
        assert!(camion.disponible);
    }
}
