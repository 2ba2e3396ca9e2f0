use indexmap::IndexMap;

use crate::engine::core::Record;
use crate::engine::schema::FieldDescriptor;
use crate::engine::types::{FieldType, Value};

/// Builds the load-time schema of a record set.
///
/// Fields appear in first-seen order across all records. Each field takes the type of
/// its first non-null, non-empty value; fields that never carry one are typed `string`.
pub fn infer_schema(records: &[Record]) -> Vec<FieldDescriptor> {
    let mut seen: IndexMap<&str, Option<FieldType>> = IndexMap::new();

    for record in records {
        for (name, value) in record.iter() {
            let slot = seen.entry(name).or_insert(None);
            if slot.is_none() && !value.is_empty() {
                *slot = Some(FieldType::infer(value));
            }
        }
    }

    seen.into_iter()
        .map(|(name, ty)| FieldDescriptor::new(name, ty.unwrap_or(FieldType::String)))
        .collect()
}

/// Type of a synthesized column, taken from the value it carries in the first result row.
pub(crate) fn infer_from_sample(sample: Option<&Value>) -> FieldType {
    match sample {
        Some(value) => FieldType::infer(value),
        None => FieldType::String,
    }
}
