use crate::engine::aggregate::{AggregationSpec, SortOrder};
use crate::test_helpers::factory::Factory;

#[test]
fn test_grouping_plan_factory() {
    let plan = Factory::plan()
        .group_by("dept")
        .group_by_desc("region")
        .agg(AggregationSpec::sum("sales"))
        .with_group_limit(3)
        .create();

    assert_eq!(plan.groups.len(), 2);
    assert_eq!(plan.groups[1].sort_order, SortOrder::Desc);
    assert_eq!(plan.aggregations.len(), 1);
    assert_eq!(plan.group_limit, Some(3));
}
