use chart_axis::api::{
    AxisBounds, AxisConfig, AxisData, AxisKind, CartesianKind, NormalizedAxisConfig, PolarKind,
    resolve_axis_range, resolve_cartesian_domain, resolve_polar_domain, resolve_polar_range,
};
use chart_axis::core::{CartesianSeries, Interval, LayoutRect, PartialInterval, PolarSeries};

fn normalized(config: AxisConfig, kind: AxisKind) -> NormalizedAxisConfig {
    config.into_normalized(kind).expect("valid config")
}

fn sample_series() -> Vec<CartesianSeries> {
    vec![
        CartesianSeries::from_values("a", [3.0, 7.0, 1.0]),
        CartesianSeries::new("b", vec![Some(-2.0), None, Some(5.0), Some(4.0), None]),
    ]
}

#[test]
fn x_domain_indexes_longest_series() {
    let config = NormalizedAxisConfig::for_kind(AxisKind::X);
    let domain = resolve_cartesian_domain(&config, &sample_series(), CartesianKind::X);

    assert_eq!(domain, Interval::new(0.0, 4.0));
}

#[test]
fn y_domain_spans_values_and_skips_gaps() {
    let config = NormalizedAxisConfig::for_kind(AxisKind::Y);
    let domain = resolve_cartesian_domain(&config, &sample_series(), CartesianKind::Y);

    assert_eq!(domain, Interval::new(-2.0, 7.0));
}

#[test]
fn empty_series_resolve_to_zero_domain() {
    let config = NormalizedAxisConfig::for_kind(AxisKind::Y);

    assert_eq!(
        resolve_cartesian_domain(&config, &[], CartesianKind::Y),
        Interval::zero()
    );
    assert_eq!(
        resolve_cartesian_domain(&config, &[], CartesianKind::X),
        Interval::zero()
    );
}

#[test]
fn explicit_domain_is_returned_verbatim() {
    let config = normalized(
        AxisConfig::new().with_domain(Interval::new(100.0, -100.0)),
        AxisKind::Y,
    );
    let domain = resolve_cartesian_domain(&config, &sample_series(), CartesianKind::Y);

    assert_eq!(domain, Interval::new(100.0, -100.0));
}

#[test]
fn partial_explicit_domain_keeps_derived_side() {
    let config = normalized(
        AxisConfig::new().with_domain(AxisBounds::Explicit(PartialInterval::new(Some(0.0), None))),
        AxisKind::Y,
    );
    let domain = resolve_cartesian_domain(&config, &sample_series(), CartesianKind::Y);

    assert_eq!(domain, Interval::new(0.0, 7.0));
}

#[test]
fn derived_domain_receives_computed_bounds() {
    let config = normalized(
        AxisConfig::new().with_domain(AxisBounds::derived(|bounds| {
            Interval::new(bounds.min - 1.0, bounds.max * 2.0)
        })),
        AxisKind::Y,
    );
    let domain = resolve_cartesian_domain(&config, &sample_series(), CartesianKind::Y);

    assert_eq!(domain, Interval::new(-3.0, 14.0));
}

#[test]
fn axis_categories_define_index_domain() {
    let config = normalized(
        AxisConfig::new().with_categories(["q1", "q2", "q3", "q4"]),
        AxisKind::X,
    );
    let domain = resolve_cartesian_domain(&config, &sample_series(), CartesianKind::X);

    assert_eq!(domain, Interval::new(0.0, 3.0));
}

#[test]
fn axis_values_define_value_domain() {
    let config = normalized(
        AxisConfig::new().with_data(AxisData::Values(vec![12.0, -4.0, 30.0])),
        AxisKind::X,
    );
    let domain = resolve_cartesian_domain(&config, &[], CartesianKind::X);

    assert_eq!(domain, Interval::new(-4.0, 30.0));
}

#[test]
fn angular_domain_indexes_series() {
    let config = NormalizedAxisConfig::for_kind(AxisKind::Angular);
    let series = [
        PolarSeries::single("a", 3.0),
        PolarSeries::single("b", 5.0),
        PolarSeries::single("c", 2.0),
    ];

    assert_eq!(
        resolve_polar_domain(&config, &series, PolarKind::Angular),
        Interval::new(0.0, 2.0)
    );
}

#[test]
fn radial_domain_starts_at_zero() {
    let config = NormalizedAxisConfig::for_kind(AxisKind::Radial);
    let series = [
        PolarSeries::many("a", vec![3.0, 9.0, 1.0]),
        PolarSeries::single("b", 6.0),
    ];

    assert_eq!(
        resolve_polar_domain(&config, &series, PolarKind::Radial),
        Interval::new(0.0, 9.0)
    );
    assert_eq!(
        resolve_polar_domain(&config, &[], PolarKind::Radial),
        Interval::zero()
    );
}

#[test]
fn cartesian_range_follows_layout_rect() {
    let config = NormalizedAxisConfig::for_kind(AxisKind::X);
    let rect = LayoutRect::new(40.0, 10.0, 400.0, 300.0);

    assert_eq!(
        resolve_axis_range(&config, rect, CartesianKind::X),
        Interval::new(40.0, 440.0)
    );
    assert_eq!(
        resolve_axis_range(&config, rect, CartesianKind::Y),
        Interval::new(10.0, 310.0)
    );
}

#[test]
fn range_overrides_apply_to_layout_base() {
    let rect = LayoutRect::new(0.0, 0.0, 400.0, 300.0);
    let explicit = normalized(
        AxisConfig::new().with_range(Interval::new(20.0, 380.0)),
        AxisKind::X,
    );
    let derived = normalized(
        AxisConfig::new().with_range(AxisBounds::derived(|base| {
            Interval::new(base.min + 16.0, base.max - 16.0)
        })),
        AxisKind::X,
    );

    assert_eq!(
        resolve_axis_range(&explicit, rect, CartesianKind::X),
        Interval::new(20.0, 380.0)
    );
    assert_eq!(
        resolve_axis_range(&derived, rect, CartesianKind::X),
        Interval::new(16.0, 384.0)
    );
}

#[test]
fn polar_ranges_use_degrees_and_radius() {
    let angular = NormalizedAxisConfig::for_kind(AxisKind::Angular);
    let radial = NormalizedAxisConfig::for_kind(AxisKind::Radial);

    assert_eq!(
        resolve_polar_range(&angular, PolarKind::Angular, 150.0),
        Interval::new(0.0, 360.0)
    );
    assert_eq!(
        resolve_polar_range(&radial, PolarKind::Radial, 150.0),
        Interval::new(0.0, 150.0)
    );
}
