use crate::engine::types::Value;
use indexmap::IndexMap;

pub type FieldMap = IndexMap<String, Value>;

pub mod dataset;
pub mod record;
