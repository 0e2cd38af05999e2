mod descriptor;
mod model;

pub use descriptor::{CanonicalType, DynamicTag, TypeArg, TypeDescriptor};
pub use model::{ModelObject, ModelProperty};
