// method.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HasParameters, ParameterList};

/// Visibilidad de un miembro de clase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        };
        f.write_str(s)
    }
}

/// Modelo de un método de clase, interfaz o trait PHP
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhpMethod {
    name: String,
    visibility: Visibility,
    is_static: bool,
    is_abstract: bool,
    is_final: bool,
    description: Option<String>,
    return_type: Option<String>,
    reference_returned: bool,
    body: String,
    parameters: ParameterList,
}

impl PhpMethod {
    pub fn new(name: impl Into<String>) -> Self {
        PhpMethod { name: name.into(), ..Default::default() }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_static(&mut self, is_static: bool) -> &mut Self {
        self.is_static = is_static;
        self
    }

    /// Un método abstracto no puede ser final; marcarlo abstracto limpia
    /// `is_final` y el cuerpo.
    pub fn set_abstract(&mut self, is_abstract: bool) -> &mut Self {
        self.is_abstract = is_abstract;
        if is_abstract {
            self.is_final = false;
            self.body.clear();
        }
        self
    }

    pub fn set_final(&mut self, is_final: bool) -> &mut Self {
        self.is_final = is_final;
        if is_final {
            self.is_abstract = false;
        }
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
    pub fn visibility(&self) -> Visibility { self.visibility }
    pub fn is_static(&self) -> bool { self.is_static }
    pub fn is_abstract(&self) -> bool { self.is_abstract }
    pub fn is_final(&self) -> bool { self.is_final }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn return_type(&self) -> Option<&str> { self.return_type.as_deref() }
    pub fn is_reference_returned(&self) -> bool { self.reference_returned }
    pub fn body(&self) -> &str { &self.body }
}

impl HasParameters for PhpMethod {
    fn parameter_list(&self) -> &ParameterList { &self.parameters }
    fn parameter_list_mut(&mut self) -> &mut ParameterList { &mut self.parameters }
}

impl fmt::Display for PhpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "PhpMethod({} {}{}, parameters: [{}])",
               self.visibility,
               if self.is_static { "static " } else { "" },
               self.name,
               self.parameters.names().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModelError, PhpParameter};

    #[test]
    fn test_abstract_and_final_are_exclusive() {
        let mut m = PhpMethod::new("run");
        m.set_body("return 1;").set_final(true).set_abstract(true);
        assert!(m.is_abstract());
        assert!(!m.is_final());
        assert_eq!(m.body(), "");
    }

    #[test]
    fn test_replace_parameter_through_method() -> Result<(), ModelError> {
        let mut m = PhpMethod::new("find").with_visibility(Visibility::Protected);
        m.add_parameter(PhpParameter::new("id"));
        m.replace_parameter(0, PhpParameter::new("uuid").with_type("string"))?;
        assert_eq!(m.parameter_names(), vec!["uuid"]);
        assert_eq!(m.to_string(), "PhpMethod(protected find, parameters: [uuid])");
        Ok(())
    }
}
