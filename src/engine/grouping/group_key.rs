use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState as AHashRandomState;
use chrono::NaiveDateTime;

use crate::engine::core::Record;
use crate::engine::types::Value;

/// Typed component of a composite group key.
///
/// Absent fields, nulls and empty text all collapse into `Empty`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum GroupValue {
    Empty,
    /// Bit pattern of the number, with `-0.0` folded into `0.0`
    Number(u64),
    Bool(bool),
    Date(NaiveDateTime),
    Text(String),
}

impl GroupValue {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => GroupValue::Empty,
            Some(Value::Text(s)) if s.is_empty() => GroupValue::Empty,
            Some(Value::Text(s)) => GroupValue::Text(s.clone()),
            Some(Value::Number(n)) => GroupValue::Number(normalize_bits(*n)),
            Some(Value::Bool(b)) => GroupValue::Bool(*b),
            Some(Value::Date(d)) => GroupValue::Date(*d),
        }
    }
}

#[inline]
fn normalize_bits(n: f64) -> u64 {
    if n == 0.0 {
        0.0f64.to_bits()
    } else if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

/// Composite key identifying one bucket: one `GroupValue` per group-by field, in plan order.
#[derive(Clone, Debug, Eq)]
pub struct GroupKey {
    // Precomputed 64-bit hash to speed up map lookups
    pub(crate) prehash: u64,
    pub(crate) groups: Vec<GroupValue>,
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        // prehash is a cache; equality must be defined by the actual key fields
        self.groups == other.groups
    }
}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prehash.hash(state);
    }
}

impl GroupKey {
    pub fn new(groups: Vec<GroupValue>) -> Self {
        let prehash = Self::compute_prehash(&groups);
        Self { prehash, groups }
    }

    /// Construct a GroupKey from a record, reading the group-by fields in order.
    pub fn from_record<'a, I>(group_by: I, record: &Record) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let groups = group_by
            .into_iter()
            .map(|name| GroupValue::from_value(record.get(name)))
            .collect();
        Self::new(groups)
    }

    pub fn groups(&self) -> &[GroupValue] {
        &self.groups
    }

    #[inline]
    fn compute_prehash(groups: &[GroupValue]) -> u64 {
        let mut hasher = AHashRandomState::with_seeds(0, 0, 0, 0).build_hasher();
        for g in groups {
            g.hash(&mut hasher);
        }
        hasher.finish()
    }
}
