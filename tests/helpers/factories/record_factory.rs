use crate::engine::core::Record;
use crate::engine::types::Value;
use indexmap::IndexMap;
use rand::Rng;
use serde_json::Value as JsonValue;

const DEPTS: &[&str] = &["Eng", "Sales", "Ops", "Support"];

pub struct RecordFactory {
    params: IndexMap<String, Value>,
}

impl RecordFactory {
    pub fn new() -> Self {
        let mut params = IndexMap::new();
        params.insert("dept".into(), Value::from("Eng"));
        params.insert("sales".into(), Value::Number(10.0));
        Self { params }
    }

    pub fn empty() -> Self {
        Self {
            params: IndexMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.params.shift_remove(key);
        self
    }

    pub fn create(self) -> Record {
        Record::from(self.params)
    }

    /// Random dept/sales rows on top of the configured fields, tagged with an `index`.
    pub fn create_list(self, count: usize) -> Vec<Record> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|i| {
                let mut record = Record::from(self.params.clone());
                record.insert("dept", DEPTS[rng.gen_range(0..DEPTS.len())]);
                record.insert("sales", Value::Number(rng.gen_range(0..1000) as f64));
                record.insert("index", Value::Number(i as f64));
                record
            })
            .collect()
    }
}

/// Builds records from a JSON array of flat objects.
pub fn records_from_json(value: JsonValue) -> Vec<Record> {
    match value {
        JsonValue::Array(items) => items
            .into_iter()
            .map(|item| match item {
                JsonValue::Object(map) => map
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
                other => panic!("expected object, got {other}"),
            })
            .collect(),
        other => panic!("expected array, got {other}"),
    }
}
