//! Escenario de demostración: construye una función y un método, aplica
//! todas las operaciones de la lista de parámetros y serializa el resultado.

use serde::Serialize;

use crate::{AppConfig, CoreError, HasParameters, PhpFunction, PhpMethod, PhpParameter, PhpValue, Visibility};

/// Instantánea serializable de la demo
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub function: PhpFunction,
    pub method: PhpMethod,
    pub function_signature_hash: String,
    pub method_signature_hash: String,
}

/// Función `str_pad`-like: add, add_simple, add_simple_desc, replace y remove
pub fn build_demo_function(config: &AppConfig) -> Result<PhpFunction, CoreError> {
    let mut function = PhpFunction::new("pad").with_return_type("string")
                                              .with_description("Rellena una cadena hasta la longitud dada");
    if let Some(ns) = &config.namespace {
        function = function.with_namespace(ns.clone());
    }
    function.add_simple_parameter("input", Some("string"), None)
            .add_simple_parameter("length", Some("int"), None)
            .add_simple_desc_parameter("padding", Some("string"), Some("relleno"), Some(PhpValue::from(" ")))
            .add_parameter(PhpParameter::new("side").with_type("int").with_default_value(PhpValue::expression("STR_PAD_RIGHT")))
            .add_simple_parameter("scratch", None, Some(PhpValue::Null));

    // `scratch` sobra: se elimina y las posiciones se compactan
    let position = function.get_parameters()
                           .iter()
                           .position(|p| p.name() == "scratch")
                           .ok_or_else(|| CoreError::Internal("scratch no agregado".into()))?;
    function.remove_parameter(position)?;

    // `length` pasa a aceptar null
    let length = function.get_parameter("length")?.clone().with_type("?int");
    function.replace_parameter(1, length)?;
    function.set_body("return str_pad($input, $length ?? 0, $padding, $side);");
    Ok(function)
}

pub fn build_demo_method() -> Result<PhpMethod, CoreError> {
    let mut method = PhpMethod::new("fromArray").with_visibility(Visibility::Public).with_return_type("static");
    method.set_static(true);
    method.set_parameters(vec![PhpParameter::new("data").with_type("array"),
                               PhpParameter::new("strict").with_type("bool").with_default_value(false)]);
    // posición == len agrega al final
    let len = method.parameter_count();
    method.replace_parameter(len, PhpParameter::new("errors").with_type("array").by_reference())?;
    Ok(method)
}

pub fn run(config: &AppConfig) -> Result<DemoReport, CoreError> {
    let function = build_demo_function(config)?;
    let method = build_demo_method()?;
    Ok(DemoReport { function_signature_hash: function.signature_hash()?,
                    method_signature_hash: method.signature_hash()?,
                    function,
                    method })
}

pub fn to_json(report: &DemoReport, config: &AppConfig) -> Result<String, CoreError> {
    let out = if config.pretty_json {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_function_has_compacted_parameters() {
        let f = build_demo_function(&AppConfig::default()).unwrap();
        assert_eq!(f.parameter_names(), vec!["input", "length", "padding", "side"]);
        assert_eq!(f.get_parameter(1usize).unwrap().type_hint(), Some("?int"));
    }

    #[test]
    fn demo_method_appends_at_len() {
        let m = build_demo_method().unwrap();
        assert_eq!(m.parameter_names(), vec!["data", "strict", "errors"]);
        assert!(m.get_parameter("errors").unwrap().is_passed_by_reference());
    }
}
