//! Clients - clientes HTTP hacia otros servicios
//!
//! Este módulo contiene el cliente con el que servicio-operaciones
//! consulta y reserva recursos del servicio-flota.

pub mod flota_client;

pub use flota_client::FlotaServiceClient;
