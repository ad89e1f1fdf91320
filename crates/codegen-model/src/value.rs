//! Valores por defecto de parámetros PHP.
//!
//! `PhpValue::Null` es un valor por defecto presente (`$x = null`); la
//! ausencia de valor por defecto se modela con `Option::None` en el
//! parámetro, nunca con esta enum.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    /// `NAN`, `INF` y `-INF` se serializan como su constante PHP
    Float(#[serde(with = "php_float")] f64),
    String(String),
    Array(Vec<PhpValue>),
    /// Expresión o constante PHP tal cual (`PHP_EOL`, `self::FOO`, ...)
    Expression(String),
}

mod php_float {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Constant(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NAN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "INF" } else { "-INF" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(x) => Ok(x),
            Raw::Constant(c) => match c.as_str() {
                "NAN" => Ok(f64::NAN),
                "INF" => Ok(f64::INFINITY),
                "-INF" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!("constante float desconocida: {other}"))),
            },
        }
    }
}

impl PhpValue {
    pub fn expression(expr: impl Into<String>) -> Self {
        PhpValue::Expression(expr.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PhpValue::Null)
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, PhpValue::Expression(_))
    }
}

impl From<bool> for PhpValue {
    fn from(v: bool) -> Self { PhpValue::Bool(v) }
}

impl From<i64> for PhpValue {
    fn from(v: i64) -> Self { PhpValue::Int(v) }
}

impl From<i32> for PhpValue {
    fn from(v: i32) -> Self { PhpValue::Int(i64::from(v)) }
}

impl From<f64> for PhpValue {
    fn from(v: f64) -> Self { PhpValue::Float(v) }
}

impl From<&str> for PhpValue {
    fn from(v: &str) -> Self { PhpValue::String(v.to_string()) }
}

impl From<String> for PhpValue {
    fn from(v: String) -> Self { PhpValue::String(v) }
}

impl<T: Into<PhpValue>> From<Vec<T>> for PhpValue {
    fn from(items: Vec<T>) -> Self {
        PhpValue::Array(items.into_iter().map(Into::into).collect())
    }
}

// Resumen legible para logs; no es código PHP emitido
impl fmt::Display for PhpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhpValue::Null => write!(f, "null"),
            PhpValue::Bool(b) => write!(f, "{b}"),
            PhpValue::Int(i) => write!(f, "{i}"),
            PhpValue::Float(x) => write!(f, "{x}"),
            PhpValue::String(s) => write!(f, "{s:?}"),
            PhpValue::Array(items) => write!(f, "array({})", items.len()),
            PhpValue::Expression(e) => write!(f, "{e}"),
        }
    }
}
