use serde::{Deserialize, Serialize};

use crate::core::scale::Scale;
use crate::core::types::Interval;
use crate::error::{ChartError, ChartResult, DomainContext};

/// Most categories a band scale accepts.
pub const MAX_BAND_COUNT: usize = 100_000;

/// Categorical scale dividing the range into equal slots, one per index.
///
/// `padding` is the share of each slot left empty: a full `padding` slot
/// between neighbouring bands and half of it at both outer edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: Interval,
    range: Interval,
    padding: f64,
    count: usize,
}

impl BandScale {
    pub fn new(domain: Interval, range: Interval, padding: f64) -> ChartResult<Self> {
        Self::with_context(domain, range, padding, DomainContext::Cartesian)
    }

    pub(crate) fn with_context(
        domain: Interval,
        range: Interval,
        padding: f64,
        context: DomainContext,
    ) -> ChartResult<Self> {
        if !domain.is_finite() {
            return Err(ChartError::invalid_domain(context));
        }
        if !range.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        let (low, high) = domain.ordered();
        let bands = (high.round() - low.round()).max(0.0) + 1.0;
        if bands > MAX_BAND_COUNT as f64 {
            return Err(ChartError::invalid_domain(context));
        }
        let count = bands as usize;
        let padding = if padding.is_finite() {
            padding.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Ok(Self {
            domain: Interval::new(low.round(), high.round()),
            range,
            padding,
            count,
        })
    }

    /// Number of categories covered by the domain.
    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn padding(self) -> f64 {
        self.padding
    }

    /// Distance between the leading edges of adjacent bands.
    ///
    /// Negative when the range is inverted.
    #[must_use]
    pub fn step(self) -> f64 {
        self.range.span() / self.count as f64
    }

    /// Pixel width of a single band, net of padding.
    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.step().abs() * (1.0 - self.padding)
    }

    /// Middle of the band at `index`, following the range orientation.
    #[must_use]
    pub fn center(self, index: f64) -> f64 {
        self.apply(index) + self.step().signum() * self.bandwidth() / 2.0
    }

    /// Returns `true` when `index` names one of the bands.
    #[must_use]
    pub fn contains_index(self, index: f64) -> bool {
        index.fract() == 0.0 && index >= self.domain.min && index <= self.domain.max
    }

    /// Indices of every band, in ascending order.
    pub fn indices(self) -> impl Iterator<Item = f64> {
        let start = self.domain.min;
        (0..self.count).map(move |offset| start + offset as f64)
    }
}

impl Scale for BandScale {
    /// Leading edge of the band at `index`.
    fn apply(&self, index: f64) -> f64 {
        let step = self.step();
        self.range.min + step * (index - self.domain.min) + step * self.padding / 2.0
    }

    fn domain(&self) -> Interval {
        self.domain
    }

    fn range(&self) -> Interval {
        self.range
    }
}
