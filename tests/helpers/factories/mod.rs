pub mod dataset_factory;
pub mod grouping_plan_factory;
pub mod record_factory;

pub use dataset_factory::DatasetFactory;
pub use grouping_plan_factory::GroupingPlanFactory;
pub use record_factory::{RecordFactory, records_from_json};

#[cfg(test)]
mod dataset_factory_test;
#[cfg(test)]
mod grouping_plan_factory_test;
#[cfg(test)]
mod record_factory_test;
