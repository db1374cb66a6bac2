use tracing::trace;

use crate::core::{Interval, LayoutRect};

use super::axis_config::{CartesianKind, NormalizedAxisConfig, PolarKind};

/// Full turn, in degrees, covered by an angular axis by default.
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

/// Pixel interval a Cartesian axis maps onto.
///
/// The base range is the layout rect's horizontal (`X`) or vertical (`Y`)
/// extent; an explicit range replaces it and a derived range transforms it.
/// Y inversion happens when the scale is built, not here.
#[must_use]
pub fn resolve_axis_range(
    config: &NormalizedAxisConfig,
    rect: LayoutRect,
    kind: CartesianKind,
) -> Interval {
    let base = match kind {
        CartesianKind::X => rect.horizontal(),
        CartesianKind::Y => rect.vertical(),
    };
    let range = config
        .range
        .as_ref()
        .map_or(base, |bounds| bounds.resolve(base));
    trace!(axis = %config.id, ?kind, min = range.min, max = range.max, "resolved axis range");
    range
}

/// Range of a polar axis: degrees for angular axes, pixels for radial ones.
#[must_use]
pub fn resolve_polar_range(
    config: &NormalizedAxisConfig,
    kind: PolarKind,
    outer_radius_px: f64,
) -> Interval {
    let base = match kind {
        PolarKind::Angular => Interval::new(0.0, FULL_CIRCLE_DEGREES),
        PolarKind::Radial => Interval::new(0.0, outer_radius_px),
    };
    let range = config
        .range
        .as_ref()
        .map_or(base, |bounds| bounds.resolve(base));
    trace!(axis = %config.id, ?kind, min = range.min, max = range.max, "resolved polar range");
    range
}
