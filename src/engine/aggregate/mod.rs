pub mod ops;
pub mod plan;

pub use ops::AggregatorImpl;
pub use plan::{
    AggregateFunction, AggregationSpec, DEFAULT_COUNT_COLUMN, GroupSpec, GroupingPlan, SortOrder,
};
