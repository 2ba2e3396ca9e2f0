pub mod record;

pub use record::dataset::Dataset;
pub use record::record::Record;
pub use record::FieldMap;
