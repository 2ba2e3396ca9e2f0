pub mod field;
pub mod inference;
pub mod label;
pub mod synthesis;

pub use field::FieldDescriptor;
pub use inference::infer_schema;
pub use label::humanize;
pub use synthesis::{synthesize_columns, synthesize_fields};

#[cfg(test)]
mod inference_test;
