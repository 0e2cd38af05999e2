use crate::known_types::classify;
use crate::models::ModelObject;
use crate::parser::parse_generic_suffix;

use super::type_mapper::resolve_static;
use super::GeneratorContext;

/// Generate the TypeScript ambient declaration module
pub fn generate_declarations(objects: &[ModelObject], ctx: &GeneratorContext) -> String {
    let interfaces: String = objects
        .iter()
        .map(|object| generate_interface(object, ctx))
        .collect();

    format!("declare module {} {{\n\n{}}}\n", ctx.namespace(), interfaces)
}

/// Generate one interface block
fn generate_interface(object: &ModelObject, ctx: &GeneratorContext) -> String {
    let header = match generic_parameter(&object.full_name) {
        Some(param) => format!("\tinterface {}<{}> {{\n", object.name, param),
        None => format!("\tinterface {}{{\n", object.name),
    };

    let members: String = object
        .properties
        .iter()
        .map(|property| {
            format!(
                "\t\t{}: {};\n",
                ctx.format_property_name(&property.name),
                resolve_static(&property.ty)
            )
        })
        .collect();

    format!("{}{}}}\n", header, members)
}

/// Generic parameter of a qualified name, canonicalized when it is a scalar
fn generic_parameter(full_name: &str) -> Option<String> {
    let raw = parse_generic_suffix(full_name)?;

    Some(match classify(raw) {
        Some(canonical) => canonical.to_string(),
        None => raw.to_string(),
    })
}
