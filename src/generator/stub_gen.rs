use crate::models::{ModelObject, ModelProperty};
use crate::utils::{collapse_line_breaks, escape_xml};

use super::type_mapper::resolve_dynamic;
use super::GeneratorContext;

/// Generate the JavaScript IntelliSense stub module
pub fn generate_stubs(objects: &[ModelObject], ctx: &GeneratorContext) -> String {
    let namespace = ctx.namespace();
    let header = format!("var {0} = {0} || {{}};\n", namespace);

    let body: String = objects
        .iter()
        .map(|object| generate_object(object, ctx))
        .collect();

    header + &body
}

/// Generate one constructor function assigned onto the namespace object
fn generate_object(object: &ModelObject, ctx: &GeneratorContext) -> String {
    let properties: String = object
        .properties
        .iter()
        .map(|property| generate_property(property, object, ctx))
        .collect();

    format!(
        "{}.{} = function()  {{\n{}}};\n\n",
        ctx.namespace(),
        object.name,
        properties
    )
}

/// Generate the `/// <field>` annotation and default assignment for a property
fn generate_property(
    property: &ModelProperty,
    owner: &ModelObject,
    ctx: &GeneratorContext,
) -> String {
    let tag = resolve_dynamic(&property.ty);
    let name = ctx.format_property_name(&property.name);

    format!(
        "\t/// <field name=\"{name}\" type=\"{tag}\">{comment}</field>\n\tthis.{name} = new {tag}();\n",
        comment = field_comment(property, owner),
    )
}

/// Summary text, or a generated sentence when the property has none
fn field_comment(property: &ModelProperty, owner: &ModelObject) -> String {
    let comment = match &property.summary {
        Some(summary) => summary.clone(),
        None => format!(
            "The {} property as defined in {}",
            property.name, owner.full_name
        ),
    };

    escape_xml(&collapse_line_breaks(&comment))
}
