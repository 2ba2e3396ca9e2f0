use super::ordering::compare_rows;
use super::sink::Bucket;
use crate::engine::aggregate::GroupingPlan;
use crate::engine::core::Record;

/// Sorts buckets by the plan's group specs and flattens each into an output row:
/// group fields first, then aggregate columns, both in plan order.
pub(crate) fn into_rows(mut buckets: Vec<Bucket>, plan: &GroupingPlan) -> Vec<Record> {
    // sort_by is stable: ties keep first-seen bucket order
    buckets.sort_by(|a, b| compare_rows(&a.values, &b.values, &plan.groups));

    let columns = plan.output_columns();
    let width = plan.groups.len() + columns.len();

    buckets
        .into_iter()
        .map(|bucket| {
            let mut row = Record::with_capacity(width);
            for (spec, value) in plan.groups.iter().zip(bucket.values) {
                row.insert(spec.field.clone(), value);
            }
            for (name, agg) in columns.iter().zip(bucket.aggs.iter()) {
                row.insert(name.clone(), agg.finalize());
            }
            row
        })
        .collect()
}
