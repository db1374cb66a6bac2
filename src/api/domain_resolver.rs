use tracing::{debug, trace};

use crate::core::{CartesianSeries, Interval, PolarSeries, ScaleType};

use super::axis_config::{AxisBounds, AxisData, CartesianKind, NormalizedAxisConfig, PolarKind};

/// Domain covered by a Cartesian axis.
///
/// Priority: complete explicit domain, then explicit/derived override applied
/// to the computed bounds, then axis data, then series data.
#[must_use]
pub fn resolve_cartesian_domain(
    config: &NormalizedAxisConfig,
    series: &[CartesianSeries],
    kind: CartesianKind,
) -> Interval {
    if let Some(explicit) = config.domain.as_ref().and_then(AxisBounds::as_complete) {
        return explicit;
    }

    let computed = config
        .data
        .as_ref()
        .map(axis_data_bounds)
        .unwrap_or_else(|| cartesian_series_bounds(config, series, kind));
    let domain = apply_override(config.domain.as_ref(), computed);
    trace!(axis = %config.id, ?kind, min = domain.min, max = domain.max, "resolved cartesian domain");
    domain
}

/// Domain covered by a polar axis.
///
/// Angular axes index one slice per series; radial axes span from zero to the
/// largest value.
#[must_use]
pub fn resolve_polar_domain(
    config: &NormalizedAxisConfig,
    series: &[PolarSeries],
    kind: PolarKind,
) -> Interval {
    if let Some(explicit) = config.domain.as_ref().and_then(AxisBounds::as_complete) {
        return explicit;
    }

    let computed = config
        .data
        .as_ref()
        .map(axis_data_bounds)
        .unwrap_or_else(|| match kind {
            PolarKind::Angular => index_domain(series.len()),
            PolarKind::Radial => {
                let max = series
                    .iter()
                    .flat_map(PolarSeries::values)
                    .fold(None, |acc: Option<f64>, value| {
                        Some(acc.map_or(value, |best| best.max(value)))
                    });
                match max {
                    Some(max) => Interval::new(0.0, max),
                    None => {
                        debug!(axis = %config.id, "no polar values, using zero domain");
                        Interval::zero()
                    }
                }
            }
        });
    let domain = apply_override(config.domain.as_ref(), computed);
    trace!(axis = %config.id, ?kind, min = domain.min, max = domain.max, "resolved polar domain");
    domain
}

fn apply_override(bounds: Option<&AxisBounds>, computed: Interval) -> Interval {
    bounds.map_or(computed, |bounds| bounds.resolve(computed))
}

fn axis_data_bounds(data: &AxisData) -> Interval {
    match data {
        AxisData::Categories(labels) => index_domain(labels.len()),
        AxisData::Values(values) => {
            value_bounds(values.iter().copied().filter(|v| v.is_finite())).unwrap_or_else(Interval::zero)
        }
    }
}

fn cartesian_series_bounds(
    config: &NormalizedAxisConfig,
    series: &[CartesianSeries],
    kind: CartesianKind,
) -> Interval {
    let longest = series.iter().map(|s| s.data.len()).max().unwrap_or(0);
    if kind == CartesianKind::X || config.scale_type == ScaleType::Band {
        if longest == 0 {
            debug!(axis = %config.id, ?kind, "no series items, using zero domain");
        }
        return index_domain(longest);
    }

    value_bounds(series.iter().flat_map(CartesianSeries::values)).unwrap_or_else(|| {
        debug!(axis = %config.id, ?kind, "no series values, using zero domain");
        Interval::zero()
    })
}

/// `{0, count - 1}`, or the zero domain when there is nothing to index.
fn index_domain(count: usize) -> Interval {
    Interval::new(0.0, count.saturating_sub(1) as f64)
}

fn value_bounds(values: impl Iterator<Item = f64>) -> Option<Interval> {
    values.fold(None, |acc: Option<Interval>, value| {
        Some(match acc {
            Some(bounds) => Interval::new(bounds.min.min(value), bounds.max.max(value)),
            None => Interval::new(value, value),
        })
    })
}
