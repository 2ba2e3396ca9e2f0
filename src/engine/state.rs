use tracing::debug;

use crate::engine::aggregate::{AggregationSpec, GroupSpec, GroupingPlan};
use crate::engine::core::Dataset;
use crate::engine::grouping::{GroupedResult, GroupingEngine};

/// Wizard state for one report, owned by the caller and passed to whatever needs it.
///
/// Every `apply` re-runs grouping over the full dataset; nothing is updated incrementally.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    dataset: Dataset,
    plan: GroupingPlan,
    result: Option<GroupedResult>,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group_limit(mut self, limit: Option<usize>) -> Self {
        self.plan.group_limit = limit;
        self
    }

    /// Replaces the loaded dataset. Configured groupings are kept, the last result dropped.
    pub fn load(&mut self, dataset: Dataset) {
        debug!(target: "report_wizard::state", records = dataset.len(), "Dataset loaded");
        self.dataset = dataset;
        self.result = None;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn plan(&self) -> &GroupingPlan {
        &self.plan
    }

    pub fn result(&self) -> Option<&GroupedResult> {
        self.result.as_ref()
    }

    /// Adds a group-by dimension; an existing spec for the same field is replaced in place.
    pub fn add_group(&mut self, spec: GroupSpec) {
        match self.plan.groups.iter_mut().find(|g| g.field == spec.field) {
            Some(existing) => *existing = spec,
            None => self.plan.groups.push(spec),
        }
    }

    /// Returns true when a spec for `field` was removed.
    pub fn remove_group(&mut self, field: &str) -> bool {
        let before = self.plan.groups.len();
        self.plan.groups.retain(|g| g.field != field);
        before != self.plan.groups.len()
    }

    /// Adds an aggregation; a spec with the same output column is replaced in place.
    pub fn add_aggregation(&mut self, spec: AggregationSpec) {
        let name = spec.output_name();
        match self
            .plan
            .aggregations
            .iter_mut()
            .find(|a| a.output_name() == name)
        {
            Some(existing) => *existing = spec,
            None => self.plan.aggregations.push(spec),
        }
    }

    /// Removes the aggregation producing `output_name`. Returns true when one was removed.
    pub fn remove_aggregation(&mut self, output_name: &str) -> bool {
        let before = self.plan.aggregations.len();
        self.plan
            .aggregations
            .retain(|a| a.output_name() != output_name);
        before != self.plan.aggregations.len()
    }

    /// Drops all groupings and aggregations along with the last result.
    pub fn clear(&mut self) {
        self.plan.groups.clear();
        self.plan.aggregations.clear();
        self.result = None;
    }

    pub fn apply(&mut self) -> &GroupedResult {
        let result = GroupingEngine::new(&self.plan).run(&self.dataset);
        self.result.insert(result)
    }
}
