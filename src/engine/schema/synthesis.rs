use crate::engine::aggregate::{AggregationSpec, DEFAULT_COUNT_COLUMN};
use crate::engine::core::Record;
use crate::engine::schema::FieldDescriptor;
use crate::engine::schema::inference::infer_from_sample;

/// Extends `existing` with the columns a grouping run added.
///
/// Every aggregate output column (or `count` when there are no aggregations) that is not
/// already described gets a descriptor typed from its value in the first result row.
pub fn synthesize_fields(
    existing: &[FieldDescriptor],
    rows: &[Record],
    aggregations: &[AggregationSpec],
) -> Vec<FieldDescriptor> {
    let produced: Vec<String> = if aggregations.is_empty() {
        vec![DEFAULT_COUNT_COLUMN.to_string()]
    } else {
        aggregations.iter().map(|a| a.output_name()).collect()
    };
    synthesize_columns(existing, rows, &produced)
}

/// Same as `synthesize_fields` for already resolved column names, see
/// `GroupingPlan::output_columns`.
pub fn synthesize_columns(
    existing: &[FieldDescriptor],
    rows: &[Record],
    columns: &[String],
) -> Vec<FieldDescriptor> {
    let mut fields = existing.to_vec();
    let first = rows.first();
    for name in columns {
        if fields.iter().any(|f| &f.name == name) {
            continue;
        }
        let sample = first.and_then(|row| row.get(name)).filter(|v| !v.is_null());
        fields.push(FieldDescriptor::new(name.as_str(), infer_from_sample(sample)));
    }
    fields
}
