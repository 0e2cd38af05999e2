use serde::{Deserialize, Serialize};

/// A named entity whose properties are rendered as declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelObject {
    /// Short identifier used as the member/interface name
    pub name: String,
    /// Qualified identifier, may end in a generic suffix (e.g. `Shop.Page<Customer>`)
    pub full_name: String,
    /// Properties in declaration order
    #[serde(default, rename = "property")]
    pub properties: Vec<ModelProperty>,
}

/// A single typed property of a model object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProperty {
    /// Property name
    pub name: String,
    /// Free-form type descriptor in the host notation (e.g. `int?`, `List<Order>`)
    #[serde(rename = "type")]
    pub ty: String,
    /// Documentation text, only rendered in the stub notation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ModelObject {
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property, keeping declaration order
    pub fn with_property(mut self, property: ModelProperty) -> Self {
        self.properties.push(property);
        self
    }
}

impl ModelProperty {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
