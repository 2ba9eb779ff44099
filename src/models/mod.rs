//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL de cada servicio. Los modelos de flota (camión,
//! depósito, tarifa) y de operaciones (cliente, contenedor, solicitud,
//! ruta, tramo) comparten crate pero viven en bases de datos separadas.

pub mod camion;
pub mod camion_reference;
pub mod cliente;
pub mod contenedor;
pub mod deposito;
pub mod ruta;
pub mod solicitud;
pub mod tarifa;
pub mod tramo;
