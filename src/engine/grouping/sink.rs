use ahash::RandomState as AHashRandomState;
use indexmap::IndexMap;

use super::finalization::into_rows;
use super::group_key::GroupKey;
use super::record_sink::RecordSink;
use crate::engine::aggregate::{AggregatorImpl, GroupingPlan};
use crate::engine::core::Record;
use crate::engine::types::Value;

/// Transient accumulator for one distinct combination of group-by values.
#[derive(Debug, Clone)]
pub(crate) struct Bucket {
    /// Group-by values copied verbatim from the first member record
    pub(crate) values: Vec<Value>,
    pub(crate) aggs: Vec<AggregatorImpl>,
}

/// Buckets records by composite key and accumulates aggregates per bucket.
/// Buckets keep first-seen order so that ties in the final sort stay stable.
pub struct AggregateSink<'a> {
    plan: &'a GroupingPlan,
    groups: IndexMap<GroupKey, Bucket, AHashRandomState>,
}

impl<'a> AggregateSink<'a> {
    pub fn new(plan: &'a GroupingPlan) -> Self {
        Self {
            plan,
            groups: IndexMap::with_hasher(AHashRandomState::new()),
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl RecordSink for AggregateSink<'_> {
    fn on_record(&mut self, record: &Record) {
        let key = GroupKey::from_record(self.plan.group_fields(), record);

        // Enforce group limit: if key not present and limit reached, skip creating new group
        if !self.groups.contains_key(&key) {
            if let Some(max) = self.plan.group_limit {
                if self.groups.len() >= max {
                    return;
                }
            }
        }

        let plan = self.plan;
        let bucket = self.groups.entry(key).or_insert_with(|| Bucket {
            values: plan
                .group_fields()
                .map(|name| record.get(name).cloned().unwrap_or(Value::Null))
                .collect(),
            aggs: AggregatorImpl::for_specs(&plan.aggregations),
        });
        for agg in bucket.aggs.iter_mut() {
            agg.update(record);
        }
    }

    fn into_rows(self) -> Vec<Record> {
        into_rows(self.groups.into_values().collect(), self.plan)
    }
}
