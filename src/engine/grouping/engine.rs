use serde::Serialize;
use tracing::debug;

use super::record_sink::{PassthroughSink, RecordSink};
use super::sink::AggregateSink;
use crate::engine::aggregate::{AggregationSpec, GroupSpec, GroupingPlan};
use crate::engine::core::{Dataset, Record};
use crate::engine::schema::{FieldDescriptor, synthesize_columns};

/// Grouped rows plus the field list describing them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedResult {
    pub rows: Vec<Record>,
    pub fields: Vec<FieldDescriptor>,
}

/// Groups and aggregates `records`.
///
/// With no group specs the records come back unchanged. With no aggregation specs each
/// bucket reports a `count` of its members. Inputs are never mutated and malformed values
/// never cause a failure.
pub fn apply_grouping_and_aggregation(
    records: &[Record],
    group_specs: &[GroupSpec],
    aggregation_specs: &[AggregationSpec],
) -> Vec<Record> {
    let plan = GroupingPlan::new(group_specs.to_vec(), aggregation_specs.to_vec());
    GroupingEngine::new(&plan).apply(records)
}

/// Runs one grouping plan over full record sets. Holds no state between runs.
pub struct GroupingEngine<'a> {
    plan: &'a GroupingPlan,
}

impl<'a> GroupingEngine<'a> {
    pub fn new(plan: &'a GroupingPlan) -> Self {
        Self { plan }
    }

    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        if self.plan.is_passthrough() {
            debug!(
                target: "report_wizard::grouping",
                records = records.len(),
                "No group fields configured, passing records through"
            );
            return drain(PassthroughSink::with_capacity(records.len()), records);
        }

        let mut sink = AggregateSink::new(self.plan);
        for record in records {
            sink.on_record(record);
        }
        debug!(
            target: "report_wizard::grouping",
            records = records.len(),
            buckets = sink.group_count(),
            group_fields = self.plan.groups.len(),
            aggregations = self.plan.aggregations.len(),
            "Grouped records"
        );
        sink.into_rows()
    }

    /// Groups a dataset and extends its field list with the synthesized aggregate columns.
    pub fn run(&self, dataset: &Dataset) -> GroupedResult {
        let rows = self.apply(&dataset.records);
        let fields = if self.plan.is_passthrough() {
            dataset.fields.clone()
        } else {
            synthesize_columns(&dataset.fields, &rows, &self.plan.output_columns())
        };
        GroupedResult { rows, fields }
    }
}

fn drain<S: RecordSink>(mut sink: S, records: &[Record]) -> Vec<Record> {
    for record in records {
        sink.on_record(record);
    }
    sink.into_rows()
}
