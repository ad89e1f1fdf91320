//! php-codegen
//!
//! Este crate actúa como fachada del generador de código PHP:
//! - Reexporta el modelo (`codegen_model`) de funciones, métodos y parámetros.
//! - Expone `errors` y `config` para la capa de aplicación.
//! - Expone `demo` con el escenario usado por el binario `codegen-demo`.

pub mod config;
pub mod demo;
pub mod errors;

pub use codegen_model::{HasParameters, ModelError, ParameterList, ParameterRef, PhpFunction, PhpMethod, PhpParameter, PhpValue,
                        Visibility};
pub use config::{AppConfig, CONFIG};
pub use errors::CoreError;
