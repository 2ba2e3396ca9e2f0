use crate::engine::aggregate::{AggregationSpec, GroupSpec, GroupingPlan};

pub struct GroupingPlanFactory {
    groups: Vec<GroupSpec>,
    aggregations: Vec<AggregationSpec>,
    group_limit: Option<usize>,
}

impl GroupingPlanFactory {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            aggregations: Vec::new(),
            group_limit: None,
        }
    }

    pub fn group_by(mut self, field: &str) -> Self {
        self.groups.push(GroupSpec::asc(field));
        self
    }

    pub fn group_by_desc(mut self, field: &str) -> Self {
        self.groups.push(GroupSpec::desc(field));
        self
    }

    pub fn agg(mut self, spec: AggregationSpec) -> Self {
        self.aggregations.push(spec);
        self
    }

    pub fn with_group_limit(mut self, limit: usize) -> Self {
        self.group_limit = Some(limit);
        self
    }

    pub fn create(self) -> GroupingPlan {
        GroupingPlan::new(self.groups, self.aggregations).with_group_limit(self.group_limit)
    }
}
