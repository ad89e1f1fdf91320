//! Hash determinista de firmas.
//!
//! Los modelos serializan sus campos en orden fijo y los mapas de
//! `serde_json` se mantienen ordenados por clave, así que el JSON compacto
//! ya es estable: dos listas con los mismos parámetros en el mismo orden
//! producen el mismo hash.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::ModelError;

/// SHA-256 (hex) del JSON compacto de cualquier valor serializable
pub fn hash_serializable<T: Serialize + ?Sized>(value: &T) -> Result<String, ModelError> {
    let bytes = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
