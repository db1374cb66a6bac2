use chart_axis::api::{
    AxisConfig, AxisConfigInput, AxisKind, DEFAULT_AXIS_ID, DomainLimit, normalize_axis_config,
};
use chart_axis::core::ScaleType;
use chart_axis::error::ChartError;

#[test]
fn missing_config_yields_single_default_axis() {
    let configs = normalize_axis_config(AxisKind::X, AxisConfigInput::None).expect("defaults");

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].id, DEFAULT_AXIS_ID);
    assert_eq!(configs[0].scale_type, ScaleType::Linear);
    assert_eq!(configs[0].domain_limit, DomainLimit::Strict);
}

#[test]
fn empty_list_yields_single_default_axis() {
    let configs =
        normalize_axis_config(AxisKind::Y, Vec::<AxisConfig>::new().into()).expect("defaults");

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].id, DEFAULT_AXIS_ID);
    assert_eq!(configs[0].domain_limit, DomainLimit::Nice);
}

#[test]
fn single_config_without_id_gets_default_id() {
    let configs = normalize_axis_config(
        AxisKind::Y,
        AxisConfig::new().with_scale_type(ScaleType::Log).into(),
    )
    .expect("single config");

    assert_eq!(configs[0].id, DEFAULT_AXIS_ID);
    assert_eq!(configs[0].scale_type, ScaleType::Log);
}

#[test]
fn single_element_list_may_omit_id() {
    let configs = normalize_axis_config(AxisKind::X, vec![AxisConfig::new()].into())
        .expect("one axis needs no id");

    assert_eq!(configs[0].id, DEFAULT_AXIS_ID);
}

#[test]
fn multiple_axes_require_ids() {
    let err = normalize_axis_config(
        AxisKind::Y,
        vec![AxisConfig::new().with_id("left"), AxisConfig::new()].into(),
    )
    .expect_err("second axis has no id");

    assert!(matches!(err, ChartError::Configuration(_)));
    assert_eq!(
        err.to_string(),
        "When defining multiple y axes, each must have a unique id"
    );
}

#[test]
fn multiple_axes_reject_duplicate_ids() {
    let err = normalize_axis_config(
        AxisKind::X,
        vec![
            AxisConfig::new().with_id("top"),
            AxisConfig::new().with_id("top"),
        ]
        .into(),
    )
    .expect_err("duplicate id");

    assert!(matches!(err, ChartError::Configuration(_)));
    assert!(err.to_string().contains("duplicate: top"));
}

#[test]
fn multiple_axes_keep_their_order() {
    let configs = normalize_axis_config(
        AxisKind::Y,
        vec![
            AxisConfig::new().with_id("left"),
            AxisConfig::new()
                .with_id("right")
                .with_domain_limit(DomainLimit::Strict),
        ]
        .into(),
    )
    .expect("distinct ids");

    let ids: Vec<&str> = configs.iter().map(|config| config.id.as_str()).collect();
    assert_eq!(ids, ["left", "right"]);
    assert_eq!(configs[0].domain_limit, DomainLimit::Nice);
    assert_eq!(configs[1].domain_limit, DomainLimit::Strict);
}

#[test]
fn category_padding_out_of_bounds_is_rejected() {
    let err = normalize_axis_config(
        AxisKind::X,
        AxisConfig::new().with_category_padding(1.5).into(),
    )
    .expect_err("padding above one");

    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn categories_switch_axis_to_band() {
    let configs = normalize_axis_config(
        AxisKind::X,
        AxisConfig::new().with_categories(["a", "b", "c"]).into(),
    )
    .expect("band axis");

    assert_eq!(configs[0].scale_type, ScaleType::Band);
    assert_eq!(configs[0].categories().map(<[String]>::len), Some(3));
}

#[test]
fn json_array_input_normalizes_each_axis() {
    let input = AxisConfigInput::from_json_str(
        r#"[{"id":"left"},{"id":"right","scaleType":"log","domain":{"min":1,"max":100}}]"#,
    )
    .expect("valid json");
    let configs = normalize_axis_config(AxisKind::Y, input).expect("distinct ids");

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[1].scale_type, ScaleType::Log);
}

#[test]
fn json_object_input_is_single_axis() {
    let input = AxisConfigInput::from_json_str(r#"{"categoryPadding":0.25}"#).expect("valid json");
    let configs = normalize_axis_config(AxisKind::X, input).expect("single axis");

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].category_padding, 0.25);
}

#[test]
fn multiple_polar_axes_name_their_kind() {
    for (kind, message) in [
        (
            AxisKind::Angular,
            "When defining multiple angular axes, each must have a unique id",
        ),
        (
            AxisKind::Radial,
            "When defining multiple radial axes, each must have a unique id",
        ),
    ] {
        let err = normalize_axis_config(kind, vec![AxisConfig::new(), AxisConfig::new()].into())
            .expect_err("polar axes without ids");

        assert!(matches!(err, ChartError::Configuration(_)));
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn duplicate_radial_ids_name_the_kind() {
    let err = normalize_axis_config(
        AxisKind::Radial,
        vec![
            AxisConfig::new().with_id("r"),
            AxisConfig::new().with_id("r"),
        ]
        .into(),
    )
    .expect_err("duplicate radial id");

    assert_eq!(
        err.to_string(),
        "When defining multiple radial axes, ids must be unique (duplicate: r)"
    );
}
