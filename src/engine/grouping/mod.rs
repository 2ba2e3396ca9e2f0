mod engine;
mod finalization;
mod group_key;
mod ordering;
mod record_sink;
mod sink;

pub use engine::{GroupedResult, GroupingEngine, apply_grouping_and_aggregation};
pub use group_key::{GroupKey, GroupValue};
pub use ordering::compare_group_values;
pub use record_sink::{PassthroughSink, RecordSink};
pub use sink::AggregateSink;
