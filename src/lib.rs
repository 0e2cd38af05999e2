//! # intellisense-generator
//!
//! A CLI tool and library that turns a model of named objects with typed
//! properties into editor-facing declarations.
//!
//! Two notations are produced from the same model:
//! - **JavaScript IntelliSense stubs**: a namespace object with one constructor
//!   per model object, `/// <field>` annotations and placeholder values.
//! - **TypeScript ambient declarations**: a `declare module` block with one
//!   interface per model object.
//!
//! Property types arrive as free-form descriptors from the host type system
//! (`int?`, `System.Collections.Generic.List<Order>`, `Customer[]`, ...). They
//! are parsed into a [`models::TypeDescriptor`] and mapped onto a small set of
//! canonical types. Generation never fails: unrecognized shapes degrade to a
//! bare identifier instead of aborting.
//!
//! ## Usage
//!
//! ```rust
//! use intellisense_generator::config::NamingConfig;
//! use intellisense_generator::generator::{generate, GeneratorContext, Notation};
//! use intellisense_generator::models::{ModelObject, ModelProperty};
//!
//! let objects = vec![ModelObject::new("Customer", "Shop.Customer")
//!     .with_property(ModelProperty::new("Id", "int"))];
//! let ctx = GeneratorContext::new(NamingConfig::default());
//!
//! let declarations = generate(&objects, Notation::Static, &ctx);
//! assert!(declarations.contains("Id: Number;"));
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod known_types;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod utils;
