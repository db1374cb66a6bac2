//! chart-axis: axis, scale and tick resolution for Cartesian and polar charts.
//!
//! The crate turns axis configuration plus series data into resolved domains,
//! pixel ranges, scales and tick positions. Rendering stays with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{
    AxisConfig, AxisTick, ResolvedAxis, format_axis_tick, generate_ticks, normalize_axis_config,
    resolve_cartesian_axis, resolve_polar_axis,
};
pub use error::{ChartError, ChartResult};
