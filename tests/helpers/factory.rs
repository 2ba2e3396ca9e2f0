pub use super::factories::{DatasetFactory, GroupingPlanFactory, RecordFactory};

pub struct Factory;

impl Factory {
    pub fn record() -> RecordFactory {
        RecordFactory::new()
    }

    pub fn dataset() -> DatasetFactory {
        DatasetFactory::new()
    }

    pub fn plan() -> GroupingPlanFactory {
        GroupingPlanFactory::new()
    }
}
