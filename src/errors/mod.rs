//! Errores de la capa de aplicación (configuración y modelo).
pub mod core_error;

pub use core_error::CoreError;
