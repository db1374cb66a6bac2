use serde::Serialize;
use tracing::debug;

use crate::core::{AxisScale, CartesianSeries, Interval, LayoutRect, PolarSeries, Scale};
use crate::error::ChartResult;

use super::axis_config::{AxisKind, CartesianKind, NormalizedAxisConfig, PolarKind};
use super::axis_scale_builder::{cartesian_axis_scale, polar_axis_scale};
use super::axis_ticks::TickRequest;
use super::domain_resolver::{resolve_cartesian_domain, resolve_polar_domain};
use super::range_resolver::{resolve_axis_range, resolve_polar_range};

/// Axis after domain, range and scale resolution.
///
/// `domain` is the scale domain, widened when the axis uses
/// `DomainLimit::Nice`; ticks and labels should follow it. `data_domain` keeps
/// the bounds resolved from config and data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAxis {
    pub id: String,
    pub kind: AxisKind,
    pub domain: Interval,
    pub data_domain: Interval,
    pub range: Interval,
    pub scale: AxisScale,
    pub categories: Option<Vec<String>>,
}

impl ResolvedAxis {
    /// Tick request bound to this axis' scale and category labels.
    #[must_use]
    pub fn tick_request(&self) -> TickRequest<'_> {
        let request = TickRequest::new(self.scale);
        match self.categories.as_deref() {
            Some(categories) => request.with_categories(categories),
            None => request,
        }
    }
}

pub fn resolve_cartesian_axis(
    config: &NormalizedAxisConfig,
    series: &[CartesianSeries],
    rect: LayoutRect,
    kind: CartesianKind,
) -> ChartResult<ResolvedAxis> {
    let domain = resolve_cartesian_domain(config, series, kind);
    let range = resolve_axis_range(config, rect, kind);
    let scale = cartesian_axis_scale(config, kind, domain, range)?;
    debug!(axis = %config.id, ?kind, scale = ?scale.scale_type(), "resolved cartesian axis");
    Ok(resolved(config, kind.into(), domain, range, scale))
}

/// Resolves a polar axis; `outer_radius_px` bounds the radial range.
pub fn resolve_polar_axis(
    config: &NormalizedAxisConfig,
    series: &[PolarSeries],
    kind: PolarKind,
    outer_radius_px: f64,
) -> ChartResult<ResolvedAxis> {
    let domain = resolve_polar_domain(config, series, kind);
    let range = resolve_polar_range(config, kind, outer_radius_px);
    let scale = polar_axis_scale(config, kind, domain, range)?;
    debug!(axis = %config.id, ?kind, scale = ?scale.scale_type(), "resolved polar axis");
    Ok(resolved(config, kind.into(), domain, range, scale))
}

fn resolved(
    config: &NormalizedAxisConfig,
    kind: AxisKind,
    domain: Interval,
    range: Interval,
    scale: AxisScale,
) -> ResolvedAxis {
    ResolvedAxis {
        id: config.id.clone(),
        kind,
        domain: scale.domain(),
        data_domain: domain,
        range,
        scale,
        categories: config.categories().map(<[String]>::to_vec),
    }
}
