//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula las consultas SQL de una entidad. Las
//! operaciones que forman parte de una transacción de servicio reciben la
//! conexión de la transacción (`&mut PgConnection`); las lecturas sueltas
//! usan el pool.

pub mod camion_reference_repository;
pub mod camion_repository;
pub mod cliente_repository;
pub mod contenedor_repository;
pub mod deposito_repository;
pub mod ruta_repository;
pub mod solicitud_repository;
pub mod tarifa_repository;
pub mod tramo_repository;
