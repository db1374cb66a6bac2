use serde::{Deserialize, Serialize};

use crate::core::nice_ticks::{log_ladder_ticks, nice_domain, nice_ticks};
use crate::core::types::Interval;
use crate::error::{ChartError, ChartResult, DomainContext};

/// Scale family requested by axis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ScaleType {
    #[default]
    Linear,
    Log,
    Band,
}

/// Capabilities shared by every scale.
pub trait Scale {
    fn apply(&self, value: f64) -> f64;

    fn domain(&self) -> Interval;

    fn range(&self) -> Interval;
}

/// Continuous mapping between a numeric domain and a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousScale {
    domain: Interval,
    range: Interval,
    kind: ContinuousKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum ContinuousKind {
    Linear,
    Log,
}

impl ContinuousScale {
    /// Builds a linear or log scale.
    ///
    /// `ScaleType::Band` is accepted and treated as linear; use
    /// [`crate::core::BandScale`] for categorical axes.
    pub fn new(domain: Interval, range: Interval, scale_type: ScaleType) -> ChartResult<Self> {
        Self::with_context(domain, range, scale_type, DomainContext::Cartesian)
    }

    pub(crate) fn with_context(
        domain: Interval,
        range: Interval,
        scale_type: ScaleType,
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

        let kind = match scale_type {
            ScaleType::Log => {
                if domain.min <= 0.0 || domain.max <= 0.0 {
                    return Err(ChartError::invalid_domain(DomainContext::Log));
                }
                ContinuousKind::Log
            }
            ScaleType::Linear | ScaleType::Band => ContinuousKind::Linear,
        };

        Ok(Self {
            domain,
            range,
            kind,
        })
    }

    #[must_use]
    pub fn scale_type(self) -> ScaleType {
        match self.kind {
            ContinuousKind::Linear => ScaleType::Linear,
            ContinuousKind::Log => ScaleType::Log,
        }
    }

    fn transform(self, value: f64) -> f64 {
        match self.kind {
            ContinuousKind::Linear => value,
            ContinuousKind::Log => value.ln(),
        }
    }

    fn untransform(self, value: f64) -> f64 {
        match self.kind {
            ContinuousKind::Linear => value,
            ContinuousKind::Log => value.exp(),
        }
    }

    #[must_use]
    pub fn invert(self, position: f64) -> f64 {
        let range_span = self.range.span();
        if range_span == 0.0 || self.domain.span() == 0.0 {
            return self.domain.min;
        }
        let t0 = self.transform(self.domain.min);
        let t1 = self.transform(self.domain.max);
        let normalized = (position - self.range.min) / range_span;
        self.untransform(t0 + normalized * (t1 - t0))
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        match self.kind {
            ContinuousKind::Linear => nice_ticks(self.domain.min, self.domain.max, count),
            ContinuousKind::Log => log_ladder_ticks(self.domain.min, self.domain.max, count),
        }
    }

    /// Returns a copy whose domain is extended to round step multiples.
    ///
    /// Log scales extend to whole powers of ten instead.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let domain = match self.kind {
            ContinuousKind::Linear => {
                let (min, max) = nice_domain(self.domain.min, self.domain.max, count);
                Interval::new(min, max)
            }
            ContinuousKind::Log => {
                let (low, high) = self.domain.ordered();
                let low = 10_f64.powi(low.log10().floor() as i32);
                let high = 10_f64.powi(high.log10().ceil() as i32);
                if self.domain.min <= self.domain.max {
                    Interval::new(low, high)
                } else {
                    Interval::new(high, low)
                }
            }
        };
        Self { domain, ..self }
    }
}

impl Scale for ContinuousScale {
    fn apply(&self, value: f64) -> f64 {
        let t0 = self.transform(self.domain.min);
        let t1 = self.transform(self.domain.max);
        let span = t1 - t0;
        if span == 0.0 {
            // Single-valued domains (e.g. empty series) sit mid-range.
            return self.range.min + self.range.span() / 2.0;
        }
        let normalized = (self.transform(value) - t0) / span;
        self.range.min * (1.0 - normalized) + self.range.max * normalized
    }

    fn domain(&self) -> Interval {
        self.domain
    }

    fn range(&self) -> Interval {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{ContinuousScale, Scale, ScaleType};
    use crate::core::types::Interval;
    use crate::error::ChartError;

    #[test]
    fn linear_scale_maps_endpoints_and_midpoint() {
        let scale =
            ContinuousScale::new(Interval::new(10.0, 110.0), Interval::new(0.0, 1000.0), ScaleType::Linear)
                .expect("valid scale");
        assert_eq!(scale.apply(10.0), 0.0);
        assert_eq!(scale.apply(110.0), 1000.0);
        assert_relative_eq!(scale.apply(60.0), 500.0);
        assert_relative_eq!(scale.invert(250.0), 35.0);
    }

    #[test]
    fn log_scale_interpolates_on_logarithm() {
        let scale =
            ContinuousScale::new(Interval::new(1.0, 100.0), Interval::new(0.0, 200.0), ScaleType::Log)
                .expect("valid log scale");
        assert_relative_eq!(scale.apply(1.0), 0.0);
        assert_relative_eq!(scale.apply(10.0), 100.0, epsilon = 1e-9);
        assert_relative_eq!(scale.apply(100.0), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn log_scale_rejects_non_positive_domain() {
        let result =
            ContinuousScale::new(Interval::new(0.0, 10.0), Interval::new(0.0, 100.0), ScaleType::Log);
        assert!(matches!(result, Err(ChartError::InvalidDomain { .. })));
    }

    #[test]
    fn zero_width_domain_maps_to_range_midpoint() {
        let scale =
            ContinuousScale::new(Interval::zero(), Interval::new(0.0, 400.0), ScaleType::Linear)
                .expect("zero domain is allowed");
        assert_eq!(scale.apply(0.0), 200.0);
        assert_eq!(scale.invert(123.0), 0.0);
    }

    #[test]
    fn nice_extends_log_domain_to_decades() {
        let scale =
            ContinuousScale::new(Interval::new(3.0, 420.0), Interval::new(0.0, 100.0), ScaleType::Log)
                .expect("valid log scale")
                .nice(10);
        assert_eq!(scale.domain(), Interval::new(1.0, 1000.0));
    }
}
