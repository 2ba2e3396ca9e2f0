use crate::engine::core::{Dataset, Record};
use crate::engine::schema::FieldDescriptor;
use crate::test_helpers::factories::records_from_json;
use serde_json::json;

pub struct DatasetFactory {
    records: Vec<Record>,
    fields: Option<Vec<FieldDescriptor>>,
}

impl DatasetFactory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            fields: None,
        }
    }

    /// The three-row dept/sales set used throughout the grouping tests.
    pub fn sales_example() -> Self {
        Self::new().with_records(records_from_json(json!([
            {"dept": "Eng", "sales": 10},
            {"dept": "Eng", "sales": 20},
            {"dept": "Sales", "sales": 5}
        ])))
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDescriptor>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn create(self) -> Dataset {
        match self.fields {
            Some(fields) => Dataset::with_fields(fields, self.records),
            None => Dataset::new(self.records),
        }
    }
}
