use serde::Serialize;

use crate::engine::core::Record;
use crate::engine::schema::{FieldDescriptor, infer_schema};

/// A loaded record set together with the schema inferred at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub fields: Vec<FieldDescriptor>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        let fields = infer_schema(&records);
        Self { fields, records }
    }

    pub fn with_fields(fields: Vec<FieldDescriptor>, records: Vec<Record>) -> Self {
        Self { fields, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
