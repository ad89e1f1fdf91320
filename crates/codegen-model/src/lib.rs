// codegen-model library entry point
pub mod error;
pub mod function;
pub mod hashing;
pub mod method;
pub mod parameter;
pub mod parameters;
pub mod value;
pub use error::ModelError;
pub use function::PhpFunction;
pub use method::{PhpMethod, Visibility};
pub use parameter::PhpParameter;
pub use parameters::{HasParameters, ParameterList, ParameterRef};
pub use value::PhpValue;
