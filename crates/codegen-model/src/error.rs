// error.rs
use thiserror::Error;

/// Errores del modelo de código generado
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ModelError {
    /// Un nombre o posición no resuelve a un parámetro existente
    #[error("No encontrado: {0}")]
    NotFound(String),

    /// Posición fuera del rango válido de inserción
    #[error("Argumento inválido: {0}")]
    InvalidArgument(String),

    #[error("Error de serialización: {0}")]
    Serialization(String),
}

// Conversión desde serde_json::Error a ModelError
impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Serialization(e.to_string())
    }
}
