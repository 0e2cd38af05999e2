pub mod descriptor_parser;
pub mod manifest_parser;

pub use descriptor_parser::{parse_descriptor, parse_generic_suffix};
pub use manifest_parser::{load_manifest, parse_manifest};
