//! Lista ordenada de parámetros de una función o método.
//!
//! `ParameterList` es dueña de la secuencia; las posiciones son índices
//! contiguos desde cero tras cualquier mutación. `HasParameters` expone las
//! mismas operaciones en cualquier modelo que contenga una lista, delegando
//! en el campo compuesto.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{hashing, ModelError, PhpParameter, PhpValue};

/// Referencia a un parámetro por posición o por nombre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterRef<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for ParameterRef<'_> {
    fn from(index: usize) -> Self { ParameterRef::Index(index) }
}

impl<'a> From<&'a str> for ParameterRef<'a> {
    fn from(name: &'a str) -> Self { ParameterRef::Name(name) }
}

impl<'a> From<&'a String> for ParameterRef<'a> {
    fn from(name: &'a String) -> Self { ParameterRef::Name(name.as_str()) }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterList {
    parameters: Vec<PhpParameter>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza la secuencia completa. No valida nombres duplicados.
    pub fn set_parameters<I>(&mut self, parameters: I) -> &mut Self
        where I: IntoIterator<Item = PhpParameter>
    {
        self.parameters = parameters.into_iter().collect();
        debug!("set_parameters count={}", self.parameters.len());
        self
    }

    pub fn add_parameter(&mut self, parameter: PhpParameter) -> &mut Self {
        debug!("add_parameter name={} position={}", parameter.name(), self.parameters.len());
        self.parameters.push(parameter);
        self
    }

    /// Crea y agrega un parámetro. `default_value = None` significa sin
    /// valor por defecto; `Some(PhpValue::Null)` es un default null.
    pub fn add_simple_parameter(&mut self,
                                name: impl Into<String>,
                                type_hint: Option<&str>,
                                default_value: Option<PhpValue>)
                                -> &mut Self {
        self.add_parameter(PhpParameter::simple(name, type_hint, default_value))
    }

    /// Igual que `add_simple_parameter` con descripción del tipo
    pub fn add_simple_desc_parameter(&mut self,
                                     name: impl Into<String>,
                                     type_hint: Option<&str>,
                                     type_description: Option<&str>,
                                     default_value: Option<PhpValue>)
                                     -> &mut Self {
        let mut parameter = PhpParameter::simple(name, type_hint, default_value);
        parameter.set_type_description(type_description.map(str::to_string));
        self.add_parameter(parameter)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name() == name)
    }

    fn position_of(&self, reference: ParameterRef<'_>) -> Result<usize, ModelError> {
        match reference {
            ParameterRef::Index(index) if index < self.parameters.len() => Ok(index),
            ParameterRef::Index(index) => {
                debug!("get_parameter:miss position={index} len={}", self.parameters.len());
                Err(ModelError::NotFound(format!("no hay parámetro en la posición {index}")))
            }
            ParameterRef::Name(name) => self.parameters.iter().position(|p| p.name() == name).ok_or_else(|| {
                debug!("get_parameter:miss name={name}");
                ModelError::NotFound(format!("no hay parámetro llamado \"{name}\""))
            }),
        }
    }

    /// Devuelve el parámetro por posición o por el primer nombre que coincida
    pub fn get_parameter<'a>(&self, reference: impl Into<ParameterRef<'a>>) -> Result<&PhpParameter, ModelError> {
        let position = self.position_of(reference.into())?;
        Ok(&self.parameters[position])
    }

    pub fn get_parameter_mut<'a>(&mut self, reference: impl Into<ParameterRef<'a>>) -> Result<&mut PhpParameter, ModelError> {
        let position = self.position_of(reference.into())?;
        Ok(&mut self.parameters[position])
    }

    /// Sobrescribe el parámetro en `position`. Se admite `position == len`,
    /// que equivale a agregar al final.
    pub fn replace_parameter(&mut self, position: usize, parameter: PhpParameter) -> Result<&mut Self, ModelError> {
        let len = self.parameters.len();
        if position > len {
            return Err(ModelError::InvalidArgument(format!("la posición debe estar en el rango [0, {len}]")));
        }
        debug!("replace_parameter position={position} name={}", parameter.name());
        if position == len {
            self.parameters.push(parameter);
        } else {
            self.parameters[position] = parameter;
        }
        Ok(self)
    }

    /// Elimina el parámetro en `position` y compacta las posiciones restantes
    pub fn remove_parameter(&mut self, position: usize) -> Result<PhpParameter, ModelError> {
        if position >= self.parameters.len() {
            return Err(ModelError::NotFound(format!("no existe parámetro en la posición {position}")));
        }
        let removed = self.parameters.remove(position);
        debug!("remove_parameter position={position} name={} remaining={}", removed.name(), self.parameters.len());
        Ok(removed)
    }

    pub fn get_parameters(&self) -> &[PhpParameter] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.parameters.iter().map(PhpParameter::name).collect()
    }

    /// Hash SHA-256 de la secuencia; sensible al orden
    pub fn signature_hash(&self) -> Result<String, ModelError> {
        hashing::hash_serializable(&self.parameters)
    }
}

impl FromIterator<PhpParameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = PhpParameter>>(iter: I) -> Self {
        ParameterList { parameters: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a PhpParameter;
    type IntoIter = std::slice::Iter<'a, PhpParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl IntoIterator for ParameterList {
    type Item = PhpParameter;
    type IntoIter = std::vec::IntoIter<PhpParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

/// Modelos con lista de parámetros (funciones, métodos).
///
/// Basta con implementar `parameter_list` y `parameter_list_mut`; el resto
/// de operaciones delega en la `ParameterList` compuesta.
pub trait HasParameters {
    fn parameter_list(&self) -> &ParameterList;
    fn parameter_list_mut(&mut self) -> &mut ParameterList;

    fn set_parameters<I>(&mut self, parameters: I) -> &mut Self
        where I: IntoIterator<Item = PhpParameter>
    {
        self.parameter_list_mut().set_parameters(parameters);
        self
    }

    fn add_parameter(&mut self, parameter: PhpParameter) -> &mut Self {
        self.parameter_list_mut().add_parameter(parameter);
        self
    }

    fn add_simple_parameter(&mut self,
                            name: impl Into<String>,
                            type_hint: Option<&str>,
                            default_value: Option<PhpValue>)
                            -> &mut Self {
        self.parameter_list_mut().add_simple_parameter(name, type_hint, default_value);
        self
    }

    fn add_simple_desc_parameter(&mut self,
                                 name: impl Into<String>,
                                 type_hint: Option<&str>,
                                 type_description: Option<&str>,
                                 default_value: Option<PhpValue>)
                                 -> &mut Self {
        self.parameter_list_mut().add_simple_desc_parameter(name, type_hint, type_description, default_value);
        self
    }

    fn has_parameter(&self, name: &str) -> bool {
        self.parameter_list().has_parameter(name)
    }

    fn get_parameter<'a>(&self, reference: impl Into<ParameterRef<'a>>) -> Result<&PhpParameter, ModelError> {
        self.parameter_list().get_parameter(reference)
    }

    fn get_parameter_mut<'a>(&mut self, reference: impl Into<ParameterRef<'a>>) -> Result<&mut PhpParameter, ModelError> {
        self.parameter_list_mut().get_parameter_mut(reference)
    }

    fn replace_parameter(&mut self, position: usize, parameter: PhpParameter) -> Result<&mut Self, ModelError> {
        self.parameter_list_mut().replace_parameter(position, parameter)?;
        Ok(self)
    }

    fn remove_parameter(&mut self, position: usize) -> Result<PhpParameter, ModelError> {
        self.parameter_list_mut().remove_parameter(position)
    }

    fn get_parameters(&self) -> &[PhpParameter] {
        self.parameter_list().get_parameters()
    }

    fn parameter_count(&self) -> usize {
        self.parameter_list().len()
    }

    fn parameter_names(&self) -> Vec<&str> {
        self.parameter_list().names()
    }

    fn signature_hash(&self) -> Result<String, ModelError> {
        self.parameter_list().signature_hash()
    }
}
