//! Known types module - centralized table of scalar descriptors and their canonical types
//!
//! This module provides a single source of truth for type recognition,
//! shared by the stub and declaration resolvers so the two never drift apart.

use crate::models::CanonicalType;

/// Descriptors that map to `Number`
pub const NUMBER_TYPES: &[&str] = &["int", "int32", "int64", "long", "double", "float", "decimal"];

/// Descriptors that map to `Date`
pub const DATE_TYPES: &[&str] = &["system.datetime"];

/// Descriptors that map to `String`
pub const STRING_TYPES: &[&str] = &["string"];

/// Descriptors that map to `Boolean`
pub const BOOLEAN_TYPES: &[&str] = &["bool", "boolean"];

/// Marker found in fully qualified collection descriptors
pub const COLLECTION_NAMESPACE: &str = "System.Collections";

/// Classify a descriptor against the table, ignoring case.
///
/// Returns `None` when the descriptor is not a known scalar.
pub fn classify(descriptor: &str) -> Option<CanonicalType> {
    let lower = descriptor.to_lowercase();
    let lower = lower.as_str();

    if NUMBER_TYPES.contains(&lower) {
        return Some(CanonicalType::Number);
    }
    if DATE_TYPES.contains(&lower) {
        return Some(CanonicalType::Date);
    }
    if STRING_TYPES.contains(&lower) {
        return Some(CanonicalType::String);
    }
    if BOOLEAN_TYPES.contains(&lower) {
        return Some(CanonicalType::Boolean);
    }
    None
}

/// Check if a descriptor looks like a collection (namespace marker or `Array` token)
pub fn is_collection_type(descriptor: &str) -> bool {
    descriptor.contains(COLLECTION_NAMESPACE) || descriptor.contains("Array")
}
