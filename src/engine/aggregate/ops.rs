use crate::engine::aggregate::plan::{AggregateFunction, AggregationSpec};
use crate::engine::core::Record;
use crate::engine::types::Value;

/// Aggregator enum with concrete implementations per operation
#[derive(Debug, Clone, PartialEq)]
pub enum AggregatorImpl {
    CountAll(CountAll),
    Count(Count),
    Sum(Sum),
    Avg(Avg),
    Min(Min),
    Max(Max),
}

impl AggregatorImpl {
    pub fn from_spec(spec: &AggregationSpec) -> Self {
        let field = spec.field.clone();
        match spec.function {
            AggregateFunction::Count => Self::Count(Count::new(field)),
            AggregateFunction::Sum => Self::Sum(Sum::new(field)),
            AggregateFunction::Avg => Self::Avg(Avg::new(field)),
            AggregateFunction::Min => Self::Min(Min::new(field)),
            AggregateFunction::Max => Self::Max(Max::new(field)),
        }
    }

    /// Accumulators for a fresh bucket; a lone `CountAll` when the plan has no aggregations.
    pub fn for_specs(specs: &[AggregationSpec]) -> Vec<Self> {
        if specs.is_empty() {
            vec![Self::CountAll(CountAll::new())]
        } else {
            specs.iter().map(Self::from_spec).collect()
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            AggregatorImpl::CountAll(_) => None,
            AggregatorImpl::Count(a) => Some(&a.field),
            AggregatorImpl::Sum(a) => Some(&a.field),
            AggregatorImpl::Avg(a) => Some(&a.field),
            AggregatorImpl::Min(a) => Some(&a.field),
            AggregatorImpl::Max(a) => Some(&a.field),
        }
    }

    /// Update aggregator with a member record.
    /// Values that are not numeric-coercible are skipped by sum/avg/min/max.
    pub fn update(&mut self, record: &Record) {
        match self {
            AggregatorImpl::CountAll(a) => a.update(),
            AggregatorImpl::Count(a) => a.update(),
            AggregatorImpl::Sum(a) => a.update_value(record.get(&a.field)),
            AggregatorImpl::Avg(a) => a.update_value(record.get(&a.field)),
            AggregatorImpl::Min(a) => a.update_value(record.get(&a.field)),
            AggregatorImpl::Max(a) => a.update_value(record.get(&a.field)),
        }
    }

    pub fn finalize(&self) -> Value {
        match self {
            AggregatorImpl::CountAll(a) => a.finalize(),
            AggregatorImpl::Count(a) => a.finalize(),
            AggregatorImpl::Sum(a) => a.finalize(),
            AggregatorImpl::Avg(a) => a.finalize(),
            AggregatorImpl::Min(a) => a.finalize(),
            AggregatorImpl::Max(a) => a.finalize(),
        }
    }
}

#[inline]
fn numeric(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountAll {
    count: u64,
}

impl CountAll {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    #[inline]
    pub fn update(&mut self) {
        self.count += 1;
    }

    pub fn finalize(&self) -> Value {
        Value::Number(self.count as f64)
    }
}

/// Counts every member record, whatever the field holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    pub field: String,
    count: u64,
}

impl Count {
    pub fn new(field: String) -> Self {
        Self { field, count: 0 }
    }

    #[inline]
    pub fn update(&mut self) {
        self.count += 1;
    }

    pub fn finalize(&self) -> Value {
        Value::Number(self.count as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sum {
    pub field: String,
    sum: f64,
}

impl Sum {
    pub fn new(field: String) -> Self {
        Self { field, sum: 0.0 }
    }

    pub fn update_value(&mut self, value: Option<&Value>) {
        if let Some(v) = numeric(value) {
            self.sum += v;
        }
    }

    pub fn finalize(&self) -> Value {
        Value::Number(self.sum)
    }
}

/// Running sum and count of numeric values; the denominator ignores skipped values.
#[derive(Debug, Clone, PartialEq)]
pub struct Avg {
    pub field: String,
    sum: f64,
    count: u64,
}

impl Avg {
    pub fn new(field: String) -> Self {
        Self {
            field,
            sum: 0.0,
            count: 0,
        }
    }

    pub fn update_value(&mut self, value: Option<&Value>) {
        if let Some(v) = numeric(value) {
            self.sum += v;
            self.count += 1;
        }
    }

    pub fn finalize(&self) -> Value {
        if self.count == 0 {
            Value::Null
        } else {
            Value::Number(self.sum / self.count as f64)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Min {
    pub field: String,
    min: Option<f64>,
}

impl Min {
    pub fn new(field: String) -> Self {
        Self { field, min: None }
    }

    pub fn update_value(&mut self, value: Option<&Value>) {
        if let Some(v) = numeric(value) {
            match self.min {
                Some(cur) if cur <= v => {}
                _ => self.min = Some(v),
            }
        }
    }

    pub fn finalize(&self) -> Value {
        self.min.map(Value::Number).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Max {
    pub field: String,
    max: Option<f64>,
}

impl Max {
    pub fn new(field: String) -> Self {
        Self { field, max: None }
    }

    pub fn update_value(&mut self, value: Option<&Value>) {
        if let Some(v) = numeric(value) {
            match self.max {
                Some(cur) if cur >= v => {}
                _ => self.max = Some(v),
            }
        }
    }

    pub fn finalize(&self) -> Value {
        self.max.map(Value::Number).unwrap_or(Value::Null)
    }
}
