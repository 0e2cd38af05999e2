pub mod declaration_gen;
pub mod stub_gen;
pub mod type_mapper;

use std::fmt;
use std::path::Path;

use crate::config::NamingConfig;
use crate::models::ModelObject;
use crate::utils::to_camel_case;

pub use declaration_gen::generate_declarations;
pub use stub_gen::generate_stubs;

/// Output notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// JavaScript IntelliSense stubs
    Dynamic,
    /// TypeScript ambient declarations
    Static,
}

impl Notation {
    /// Pick the notation for an output file: `.ts` (and so `.d.ts`) is static,
    /// everything else dynamic
    pub fn from_path(path: &Path) -> Self {
        let is_typescript = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("ts"))
            .unwrap_or(false);

        if is_typescript {
            Notation::Static
        } else {
            Notation::Dynamic
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Dynamic => f.write_str("JavaScript stubs"),
            Notation::Static => f.write_str("TypeScript declarations"),
        }
    }
}

/// Context for code generation
pub struct GeneratorContext {
    /// Naming configuration
    pub naming: NamingConfig,
}

impl GeneratorContext {
    pub fn new(naming: NamingConfig) -> Self {
        Self { naming }
    }

    /// Name of the namespace object / declared module
    pub fn namespace(&self) -> &str {
        &self.naming.namespace
    }

    /// Apply naming configuration to a property name
    pub fn format_property_name(&self, name: &str) -> String {
        if self.naming.camel_case_properties {
            to_camel_case(name)
        } else {
            name.to_string()
        }
    }
}

/// Generate text for the given notation
pub fn generate(objects: &[ModelObject], notation: Notation, ctx: &GeneratorContext) -> String {
    match notation {
        Notation::Dynamic => generate_stubs(objects, ctx),
        Notation::Static => generate_declarations(objects, ctx),
    }
}
