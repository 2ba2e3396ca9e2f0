use std::cmp::Ordering;

use crate::engine::aggregate::{GroupSpec, SortOrder};
use crate::engine::types::Value;

/// Compares two group values for one sort dimension.
/// Empty values (null, absent, empty text) sort last in both directions.
pub fn compare_group_values(a: &Value, b: &Value, order: SortOrder) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.compare(b);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
    }
}

/// Lexicographic comparison over all group dimensions; the first differing field decides.
pub(crate) fn compare_rows(a: &[Value], b: &[Value], specs: &[GroupSpec]) -> Ordering {
    for (idx, spec) in specs.iter().enumerate() {
        let ord = match (a.get(idx), b.get(idx)) {
            (Some(x), Some(y)) => compare_group_values(x, y, spec.sort_order),
            _ => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
