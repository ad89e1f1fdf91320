//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`) usada por el binario de demostración.
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Salida JSON indentada (`CODEGEN_PRETTY_JSON`, por defecto `true`).
    pub pretty_json: bool,
    /// Namespace por defecto para funciones generadas (`CODEGEN_NAMESPACE`).
    pub namespace: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { pretty_json: true, namespace: None }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración desde una función de búsqueda arbitraria
    /// (útil en tests para no tocar el entorno del proceso).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let pretty_json = match lookup("CODEGEN_PRETTY_JSON") {
            None => true,
            Some(v) => parse_bool(&v).ok_or_else(|| CoreError::Config(format!("CODEGEN_PRETTY_JSON inválido: {v}")))?,
        };
        let namespace = lookup("CODEGEN_NAMESPACE").map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Ok(Self { pretty_json, namespace })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa; si el entorno es inválido usa los valores por defecto.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::from_env().unwrap_or_else(|e| {
        log::warn!("config:fallback reason={e}");
        AppConfig::default()
    })
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
