use serde::{Deserialize, Serialize};

use crate::engine::schema::label::humanize;
use crate::engine::types::FieldType;

/// Name, type and display label of one column in a record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
}

impl FieldDescriptor {
    /// Descriptor with a label derived from the field name.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        let label = humanize(&name);
        Self {
            name,
            field_type,
            label,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
