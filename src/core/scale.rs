use serde::{Deserialize, Serialize};

use crate::core::primitives::value_extent;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain `[min, max]` onto a pixel range `[start, end]`.
///
/// `start > end` is allowed and yields an inverted axis (the usual case for y).
/// A flat domain (`min == max`) maps with a unit span, so every domain value
/// lands on `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_min: domain_min.min(domain_max),
            domain_max: domain_min.max(domain_max),
            range_start,
            range_end,
        })
    }

    /// Fits the domain to the extent of `values`. Returns `Ok(None)` for no values.
    pub fn from_values(
        values: impl IntoIterator<Item = f64>,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Option<Self>> {
        value_extent(values)
            .map(|(min, max)| Self::new(min, max, range_start, range_end))
            .transpose()
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// True when all domain values are identical.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_max == self.domain_min
    }

    /// Position of `value` within the domain, `0` at `min` and `1` at `max`.
    ///
    /// Domains wider than `f64::MAX` are measured in halves so the span stays finite.
    fn normalize(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return value - self.domain_min;
        }
        let span = self.domain_max - self.domain_min;
        if span.is_finite() {
            (value - self.domain_min) / span
        } else {
            (value / 2.0 - self.domain_min / 2.0) / (self.domain_max / 2.0 - self.domain_min / 2.0)
        }
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        self.range_start + self.normalize(value) * (self.range_end - self.range_start)
    }

    /// Inverse of [`LinearScale::map`].
    ///
    /// Flat domains and zero-width ranges have no inverse and return `domain_min`.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let extent = self.range_end - self.range_start;
        if extent == 0.0 || self.is_degenerate() {
            return self.domain_min;
        }
        let normalized = (pixel - self.range_start) / extent;
        let span = self.domain_max - self.domain_min;
        if span.is_finite() {
            self.domain_min + normalized * span
        } else {
            self.domain_min * (1.0 - normalized) + self.domain_max * normalized
        }
    }
}
