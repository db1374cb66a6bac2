use serde::{Deserialize, Serialize};

use crate::core::band_scale::BandScale;
use crate::core::scale::{ContinuousScale, Scale, ScaleType};
use crate::core::types::Interval;

/// Scale attached to a resolved axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    Continuous(ContinuousScale),
    Band(BandScale),
}

impl AxisScale {
    #[must_use]
    pub fn scale_type(self) -> ScaleType {
        match self {
            Self::Continuous(scale) => scale.scale_type(),
            Self::Band(_) => ScaleType::Band,
        }
    }

    #[must_use]
    pub fn as_band(self) -> Option<BandScale> {
        match self {
            Self::Band(scale) => Some(scale),
            Self::Continuous(_) => None,
        }
    }

    #[must_use]
    pub fn as_continuous(self) -> Option<ContinuousScale> {
        match self {
            Self::Continuous(scale) => Some(scale),
            Self::Band(_) => None,
        }
    }

    /// Position used for marks and ticks: band scales report the band center.
    #[must_use]
    pub fn point(self, value: f64) -> f64 {
        match self {
            Self::Continuous(scale) => scale.apply(value),
            Self::Band(scale) => scale.center(value),
        }
    }
}

impl Scale for AxisScale {
    fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Continuous(scale) => scale.apply(value),
            Self::Band(scale) => scale.apply(value),
        }
    }

    fn domain(&self) -> Interval {
        match self {
            Self::Continuous(scale) => scale.domain(),
            Self::Band(scale) => scale.domain(),
        }
    }

    fn range(&self) -> Interval {
        match self {
            Self::Continuous(scale) => scale.range(),
            Self::Band(scale) => scale.range(),
        }
    }
}

impl From<ContinuousScale> for AxisScale {
    fn from(value: ContinuousScale) -> Self {
        Self::Continuous(value)
    }
}

impl From<BandScale> for AxisScale {
    fn from(value: BandScale) -> Self {
        Self::Band(value)
    }
}
