use serde::{Deserialize, Serialize};

/// Closed numeric interval used for domains and ranges.
///
/// Y-axis pixel ranges may carry `min > max` to express inverted screen
/// coordinates, so no ordering is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self { min: 0.0, max: 0.0 }
    }

    /// Signed distance from `min` to `max`.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns `true` when `value` lies between the bounds, in either orientation.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let (low, high) = self.ordered();
        value >= low && value <= high
    }

    /// Returns the bounds as `(low, high)` regardless of orientation.
    #[must_use]
    pub fn ordered(self) -> (f64, f64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            min: self.max,
            max: self.min,
        }
    }
}

/// Interval with optional bounds, as authored in axis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialInterval {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PartialInterval {
    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Fills missing bounds from `fallback`.
    #[must_use]
    pub fn merge_onto(self, fallback: Interval) -> Interval {
        Interval {
            min: self.min.unwrap_or(fallback.min),
            max: self.max.unwrap_or(fallback.max),
        }
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.min.is_some() && self.max.is_some()
    }
}

impl From<Interval> for PartialInterval {
    fn from(value: Interval) -> Self {
        Self {
            min: Some(value.min),
            max: Some(value.max),
        }
    }
}

/// Drawing area handed over by the rendering host, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> Interval {
        Interval::new(self.x, self.x + self.width)
    }

    #[must_use]
    pub fn vertical(self) -> Interval {
        Interval::new(self.y, self.y + self.height)
    }
}
