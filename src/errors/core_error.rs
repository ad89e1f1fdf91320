use codegen_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de modelo: {0}")]
    Model(#[from] ModelError),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Model(ModelError::from(e))
    }
}
