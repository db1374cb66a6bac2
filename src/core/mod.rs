pub mod axis_scale;
pub mod band_scale;
pub mod nice_ticks;
pub mod scale;
pub mod series;
pub mod types;

pub use axis_scale::AxisScale;
pub use band_scale::BandScale;
pub use scale::{ContinuousScale, Scale, ScaleType};
pub use series::{CartesianSeries, PolarData, PolarSeries};
pub use types::{Interval, LayoutRect, PartialInterval};
