//! Routers de la API
//!
//! Un router por recurso. El binario de cada servicio monta los suyos:
//! flota monta tarifas, camiones y depósitos; operaciones monta clientes,
//! contenedores, solicitudes y tramos.

pub mod camion_routes;
pub mod cliente_routes;
pub mod contenedor_routes;
pub mod deposito_routes;
pub mod solicitud_routes;
pub mod tarifa_routes;
pub mod tramo_routes;
