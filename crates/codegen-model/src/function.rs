// function.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HasParameters, ParameterList};

/// Modelo de una función PHP libre (fuera de clases)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhpFunction {
    name: String,
    namespace: Option<String>,
    description: Option<String>,
    return_type: Option<String>,
    return_type_description: Option<String>,
    reference_returned: bool,
    body: String,
    parameters: ParameterList,
}

impl PhpFunction {
    pub fn new(name: impl Into<String>) -> Self {
        PhpFunction { name: name.into(), ..Default::default() }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn set_return_type_description(&mut self, description: Option<String>) -> &mut Self {
        self.return_type_description = description;
        self
    }

    pub fn set_reference_returned(&mut self, by_reference: bool) -> &mut Self {
        self.reference_returned = by_reference;
        self
    }

    pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = body.into();
        self
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn namespace(&self) -> Option<&str> { self.namespace.as_deref() }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn return_type(&self) -> Option<&str> { self.return_type.as_deref() }
    pub fn return_type_description(&self) -> Option<&str> { self.return_type_description.as_deref() }
    pub fn is_reference_returned(&self) -> bool { self.reference_returned }
    pub fn body(&self) -> &str { &self.body }

    /// Nombre completo con namespace (`App\Util\format`)
    pub fn qualified_name(&self) -> String {
        match self.namespace.as_deref().map(|ns| ns.trim_matches('\\')) {
            Some(ns) if !ns.is_empty() => format!("{ns}\\{}", self.name),
            _ => self.name.clone(),
        }
    }
}

impl HasParameters for PhpFunction {
    fn parameter_list(&self) -> &ParameterList { &self.parameters }
    fn parameter_list_mut(&mut self) -> &mut ParameterList { &mut self.parameters }
}

impl fmt::Display for PhpFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "PhpFunction(name: {}, parameters: [{}], returns: {})",
               self.qualified_name(),
               self.parameters.names().join(", "),
               self.return_type.as_deref().unwrap_or("mixed"))
    }
}
