use std::fmt;

/// Scalar types every descriptor notation agrees on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalType {
    Number,
    Date,
    String,
    Boolean,
}

impl CanonicalType {
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalType::Number => "Number",
            CanonicalType::Date => "Date",
            CanonicalType::String => "String",
            CanonicalType::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constructor tag used by the JavaScript stub notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicTag {
    Canonical(CanonicalType),
    Array,
    Object,
}

impl fmt::Display for DynamicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicTag::Canonical(canonical) => fmt::Display::fmt(canonical, f),
            DynamicTag::Array => f.write_str("Array"),
            DynamicTag::Object => f.write_str("Object"),
        }
    }
}

/// The single generic argument of a collection or generic class.
///
/// Arguments are never parsed further than one classification, so a nested
/// generic such as `List<List<int>>` keeps its inner `List<int>` as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArg {
    Primitive(CanonicalType),
    Raw(String),
}

/// Structured view of a free-form type descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// Scalar from the shared table (`int`, `System.DateTime`, ...)
    Primitive(CanonicalType),
    /// `Element[]`, element name kept verbatim
    Array(String),
    /// `System.Collections.Generic.List<T>` and friends
    Collection { name: String, arg: TypeArg },
    /// Any other `Name<T>`; `matched` is the text from `Name` to the end
    GenericClass {
        name: String,
        arg: TypeArg,
        matched: String,
    },
    /// Bare identifier extracted from an unrecognized shape
    Opaque(String),
}
