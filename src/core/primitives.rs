use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Returns `(min, max)` of the values, or `None` when there are none.
pub fn value_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut extent: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
    for value in values.into_iter().map(OrderedFloat) {
        extent = Some(match extent {
            None => (value, value),
            Some((min, max)) => (min.min(value), max.max(value)),
        });
    }
    extent.map(|(min, max)| (min.into_inner(), max.into_inner()))
}
