pub mod axis_config;
pub mod axis_label_format;
pub mod axis_pipeline;
pub mod axis_scale_builder;
pub mod axis_ticks;
pub mod domain_resolver;
pub mod range_resolver;

pub use axis_config::{
    AxisBounds, AxisConfig, AxisConfigInput, AxisData, AxisKind, BoundsTransform, CartesianKind,
    DEFAULT_AXIS_ID, DomainLimit, NormalizedAxisConfig, PolarKind, normalize_axis_config,
};
pub use axis_label_format::{FormattedTick, TickFormatter, format_axis_tick};
pub use axis_pipeline::{ResolvedAxis, resolve_cartesian_axis, resolve_polar_axis};
pub use axis_scale_builder::{cartesian_axis_scale, polar_axis_scale};
pub use axis_ticks::{AxisTick, TickFilter, TickOptions, TickRequest, TickSelector, generate_ticks};
pub use domain_resolver::{resolve_cartesian_domain, resolve_polar_domain};
pub use range_resolver::{resolve_axis_range, resolve_polar_range};
