use crate::known_types::{self, classify};
use crate::models::{DynamicTag, TypeArg, TypeDescriptor};
use crate::parser::parse_descriptor;

/// Resolve a descriptor to the constructor tag used by JavaScript stubs.
///
/// Only scalars are told apart; anything list-like is `Array` and the rest
/// is `Object`. Nullable markers are not stripped here, so `int?` is `Object`.
pub fn resolve_dynamic(descriptor: &str) -> DynamicTag {
    if let Some(canonical) = classify(descriptor) {
        return DynamicTag::Canonical(canonical);
    }

    if known_types::is_collection_type(descriptor) || descriptor.contains("[]") {
        return DynamicTag::Array;
    }

    DynamicTag::Object
}

/// Resolve a descriptor to a TypeScript type expression
pub fn resolve_static(descriptor: &str) -> String {
    let parsed = parse_descriptor(descriptor);

    if let TypeDescriptor::Opaque(name) = &parsed {
        log::debug!("Unrecognized descriptor '{}', using '{}'", descriptor, name);
    }

    descriptor_to_typescript(&parsed)
}

/// Render a parsed descriptor in TypeScript declaration syntax
pub fn descriptor_to_typescript(descriptor: &TypeDescriptor) -> String {
    match descriptor {
        TypeDescriptor::Primitive(canonical) => canonical.to_string(),

        TypeDescriptor::Collection { arg, .. } => match arg {
            TypeArg::Primitive(canonical) => format!("Array<{}>", canonical),
            // Only the class name is kept from a qualified argument
            TypeArg::Raw(raw) => format!("Array<{}>", last_segment(raw)),
        },

        // The element name is emitted as written, `int[]` stays `Array<int>`
        TypeDescriptor::Array(element) => format!("Array<{}>", element),

        // A scalar argument is appended to the class name without brackets,
        // `Nullable<int>` renders as `NullableNumber`
        TypeDescriptor::GenericClass { name, arg, matched } => match arg {
            TypeArg::Primitive(canonical) => format!("{}{}", name, canonical),
            TypeArg::Raw(_) => matched.clone(),
        },

        TypeDescriptor::Opaque(name) => name.clone(),
    }
}

fn last_segment(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
