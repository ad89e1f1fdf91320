// parameter.rs
use crate::PhpValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadatos de un parámetro formal de función o método PHP.
///
/// El valor por defecto distingue "sin valor por defecto" (`None`) de
/// "valor por defecto null" (`Some(PhpValue::Null)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhpParameter {
    name: String,
    type_hint: Option<String>,
    type_description: Option<String>,
    default_value: Option<PhpValue>,
    passed_by_reference: bool,
    description: Option<String>,
}

impl PhpParameter {
    pub fn new(name: impl Into<String>) -> Self {
        PhpParameter { name: name.into(),
                       type_hint: None,
                       type_description: None,
                       default_value: None,
                       passed_by_reference: false,
                       description: None }
    }

    /// Construye un parámetro con tipo y valor por defecto opcionales
    pub fn simple(name: impl Into<String>, type_hint: Option<&str>, default_value: Option<PhpValue>) -> Self {
        let mut parameter = PhpParameter::new(name);
        parameter.set_type(type_hint.map(str::to_string));
        if let Some(value) = default_value {
            parameter.set_default_value(value);
        }
        parameter
    }

    // Builders
    pub fn with_type(mut self, type_hint: impl Into<String>) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    pub fn with_type_description(mut self, type_description: impl Into<String>) -> Self {
        self.type_description = Some(type_description.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<PhpValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn by_reference(mut self) -> Self {
        self.passed_by_reference = true;
        self
    }

    // Setters
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_type(&mut self, type_hint: Option<String>) -> &mut Self {
        self.type_hint = type_hint;
        self
    }

    pub fn set_type_description(&mut self, type_description: Option<String>) -> &mut Self {
        self.type_description = type_description;
        self
    }

    pub fn set_default_value(&mut self, value: impl Into<PhpValue>) -> &mut Self {
        self.default_value = Some(value.into());
        self
    }

    /// Elimina el valor por defecto (distinto de fijarlo a null)
    pub fn unset_default_value(&mut self) -> &mut Self {
        self.default_value = None;
        self
    }

    pub fn set_passed_by_reference(&mut self, by_reference: bool) -> &mut Self {
        self.passed_by_reference = by_reference;
        self
    }

    pub fn set_description(&mut self, description: Option<String>) -> &mut Self {
        self.description = description;
        self
    }

    // Getters
    pub fn name(&self) -> &str { &self.name }
    pub fn type_hint(&self) -> Option<&str> { self.type_hint.as_deref() }
    pub fn type_description(&self) -> Option<&str> { self.type_description.as_deref() }
    pub fn default_value(&self) -> Option<&PhpValue> { self.default_value.as_ref() }
    pub fn has_default_value(&self) -> bool { self.default_value.is_some() }
    pub fn is_passed_by_reference(&self) -> bool { self.passed_by_reference }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
}

impl fmt::Display for PhpParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "<param: {}{}, type: {}, default: {}>",
               if self.passed_by_reference { "&" } else { "" },
               self.name,
               self.type_hint.as_deref().unwrap_or("mixed"),
               self.default_value.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()))
    }
}
