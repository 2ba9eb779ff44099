//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS compartido por ambos servicios.

pub mod cors;

pub use cors::*;
