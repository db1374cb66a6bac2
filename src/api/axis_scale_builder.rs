use tracing::{debug, warn};

use crate::core::{AxisScale, BandScale, ContinuousScale, Interval, ScaleType};
use crate::error::{ChartError, ChartResult, DomainContext};

use super::axis_config::{CartesianKind, DomainLimit, NormalizedAxisConfig, PolarKind};

/// Tick count used when widening a domain to nice bounds.
pub const NICE_DOMAIN_TICK_COUNT: usize = 10;

/// Builds the scale for a Cartesian axis.
///
/// Y scales map the domain minimum to the bottom of the range, so the pixel
/// range is swapped before the scale is built.
pub fn cartesian_axis_scale(
    config: &NormalizedAxisConfig,
    kind: CartesianKind,
    domain: Interval,
    range: Interval,
) -> ChartResult<AxisScale> {
    let range = match kind {
        CartesianKind::X => range,
        CartesianKind::Y => range.swapped(),
    };
    build_axis_scale(config, domain, range, DomainContext::Cartesian)
}

/// Builds the scale for a polar axis. Angular ranges are in degrees.
pub fn polar_axis_scale(
    config: &NormalizedAxisConfig,
    kind: PolarKind,
    domain: Interval,
    range: Interval,
) -> ChartResult<AxisScale> {
    debug!(axis = %config.id, ?kind, "building polar axis scale");
    build_axis_scale(config, domain, range, DomainContext::Polar)
}

fn build_axis_scale(
    config: &NormalizedAxisConfig,
    domain: Interval,
    range: Interval,
    context: DomainContext,
) -> ChartResult<AxisScale> {
    if !domain.is_finite() {
        warn!(axis = %config.id, min = domain.min, max = domain.max, "rejecting non-finite axis domain");
        return Err(ChartError::invalid_domain(context));
    }

    match config.scale_type {
        ScaleType::Band => {
            BandScale::with_context(domain, range, config.category_padding, context)
                .map(AxisScale::Band)
        }
        scale_type @ (ScaleType::Linear | ScaleType::Log) => {
            let scale = ContinuousScale::with_context(domain, range, scale_type, context)?;
            let scale = match config.domain_limit {
                DomainLimit::Nice => scale.nice(NICE_DOMAIN_TICK_COUNT),
                DomainLimit::Strict => scale,
            };
            Ok(AxisScale::Continuous(scale))
        }
    }
}
