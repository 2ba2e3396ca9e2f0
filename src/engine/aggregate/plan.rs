use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::WizardError;

/// Output column produced when no aggregation is requested.
pub const DEFAULT_COUNT_COLUMN: &str = "count";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(WizardError::InvalidSpec(format!(
                "unknown sort order '{}', expected asc or desc",
                other
            ))),
        }
    }
}

/// One group-by dimension. Position in the plan defines sort precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupSpec {
    pub field: String,
    #[serde(default, rename = "sortOrder", alias = "sort_order")]
    pub sort_order: SortOrder,
}

impl GroupSpec {
    pub fn new(field: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            field: field.into(),
            sort_order,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Desc)
    }
}

/// Parses `field` or `field:asc|desc`.
impl FromStr for GroupSpec {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_default(s, SortOrder::default())
    }
}

impl GroupSpec {
    /// Like `FromStr`, but a spec without a direction suffix gets `default`.
    /// Only a trailing `:asc` or `:desc` is a direction; other colons belong to the field name.
    pub fn parse_with_default(s: &str, default: SortOrder) -> Result<Self, WizardError> {
        let (field, order) = match s.rsplit_once(':') {
            Some((field, suffix)) => match suffix.parse::<SortOrder>() {
                Ok(order) => (field, order),
                Err(_) => (s, default),
            },
            None => (s, default),
        };
        let field = field.trim();
        if field.is_empty() {
            return Err(WizardError::InvalidSpec(format!(
                "group spec '{}' has no field",
                s
            )));
        }
        Ok(Self::new(field, order))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFunction {
    Sum,
    Avg,
    Min,
    Max,
    Count,
}

impl AggregateFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Sum => "sum",
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
            AggregateFunction::Count => "count",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateFunction {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" | "total" => Ok(AggregateFunction::Sum),
            "avg" | "average" | "mean" => Ok(AggregateFunction::Avg),
            "min" => Ok(AggregateFunction::Min),
            "max" => Ok(AggregateFunction::Max),
            "count" => Ok(AggregateFunction::Count),
            other => Err(WizardError::InvalidSpec(format!(
                "unknown aggregation function '{}'",
                other
            ))),
        }
    }
}

/// One aggregation applied to a field within each bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregationSpec {
    pub field: String,
    pub function: AggregateFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl AggregationSpec {
    pub fn new(function: AggregateFunction, field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            function,
            alias: None,
        }
    }

    pub fn sum(field: impl Into<String>) -> Self {
        Self::new(AggregateFunction::Sum, field)
    }

    pub fn avg(field: impl Into<String>) -> Self {
        Self::new(AggregateFunction::Avg, field)
    }

    pub fn min(field: impl Into<String>) -> Self {
        Self::new(AggregateFunction::Min, field)
    }

    pub fn max(field: impl Into<String>) -> Self {
        Self::new(AggregateFunction::Max, field)
    }

    pub fn count(field: impl Into<String>) -> Self {
        Self::new(AggregateFunction::Count, field)
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Column name in the grouped output: the alias if set, else `{function}_{field}`.
    pub fn output_name(&self) -> String {
        match self.alias.as_deref() {
            Some(alias) if !alias.is_empty() => alias.to_string(),
            _ => format!("{}_{}", self.function.as_str(), self.field),
        }
    }
}

/// Parses `function:field` or `function:field:alias`.
impl FromStr for AggregationSpec {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let function = parts.next().unwrap_or_default();
        let Some(field) = parts.next().map(str::trim).filter(|f| !f.is_empty()) else {
            return Err(WizardError::InvalidSpec(format!(
                "aggregation spec '{}' must look like function:field[:alias]",
                s
            )));
        };
        let mut spec = Self::new(function.parse()?, field);
        if let Some(alias) = parts.next().map(str::trim).filter(|a| !a.is_empty()) {
            spec = spec.with_alias(alias);
        }
        Ok(spec)
    }
}

/// Group-by fields plus aggregations for one run of the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingPlan {
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
    #[serde(default)]
    pub aggregations: Vec<AggregationSpec>,
    /// Cap on distinct buckets; records that would open a bucket past it are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_limit: Option<usize>,
}

impl GroupingPlan {
    pub fn new(groups: Vec<GroupSpec>, aggregations: Vec<AggregationSpec>) -> Self {
        Self {
            groups,
            aggregations,
            group_limit: None,
        }
    }

    pub fn with_group_limit(mut self, limit: Option<usize>) -> Self {
        self.group_limit = limit;
        self
    }

    pub fn is_passthrough(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_fields(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.field.as_str())
    }

    /// Names of the aggregate columns, in output order.
    ///
    /// A name already taken by a group field or an earlier column gets a numeric suffix
    /// (`count` becomes `count_2`), so aggregates never overwrite group values.
    pub fn output_columns(&self) -> Vec<String> {
        let names: Vec<String> = if self.aggregations.is_empty() {
            vec![DEFAULT_COUNT_COLUMN.to_string()]
        } else {
            self.aggregations.iter().map(|a| a.output_name()).collect()
        };

        let mut taken: Vec<String> = self.group_fields().map(str::to_string).collect();
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let mut candidate = name.clone();
            let mut suffix = 2;
            while taken.contains(&candidate) {
                candidate = format!("{}_{}", name, suffix);
                suffix += 1;
            }
            taken.push(candidate.clone());
            columns.push(candidate);
        }
        columns
    }
}
