use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Interval, PartialInterval, ScaleType};
use crate::error::{ChartError, ChartResult};

/// Identifier given to an axis declared without an explicit `id`.
pub const DEFAULT_AXIS_ID: &str = "DEFAULT_AXIS_ID";

/// Default inter-band padding for band scales.
pub const DEFAULT_CATEGORY_PADDING: f64 = 0.1;

/// Role of an axis inside its chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    X,
    Y,
    Angular,
    Radial,
}

impl AxisKind {
    #[must_use]
    pub fn is_polar(self) -> bool {
        matches!(self, Self::Angular | Self::Radial)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Angular => "angular",
            Self::Radial => "radial",
        }
    }

    /// Value axes round their domain to nice numbers unless told otherwise.
    #[must_use]
    pub fn default_domain_limit(self) -> DomainLimit {
        match self {
            Self::Y => DomainLimit::Nice,
            Self::X | Self::Angular | Self::Radial => DomainLimit::Strict,
        }
    }
}

/// Axis of a Cartesian chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CartesianKind {
    X,
    Y,
}

/// Axis of a polar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PolarKind {
    Angular,
    Radial,
}

impl From<CartesianKind> for AxisKind {
    fn from(value: CartesianKind) -> Self {
        match value {
            CartesianKind::X => Self::X,
            CartesianKind::Y => Self::Y,
        }
    }
}

impl From<PolarKind> for AxisKind {
    fn from(value: PolarKind) -> Self {
        match value {
            PolarKind::Angular => Self::Angular,
            PolarKind::Radial => Self::Radial,
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the resolved domain is widened to round numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainLimit {
    Strict,
    Nice,
}

/// Function deriving final bounds from computed ones.
#[derive(Clone)]
pub struct BoundsTransform(Arc<dyn Fn(Interval) -> Interval + Send + Sync>);

impl BoundsTransform {
    pub fn new(transform: impl Fn(Interval) -> Interval + Send + Sync + 'static) -> Self {
        Self(Arc::new(transform))
    }

    #[must_use]
    pub fn apply(&self, bounds: Interval) -> Interval {
        (self.0)(bounds)
    }
}

impl fmt::Debug for BoundsTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoundsTransform(..)")
    }
}

impl PartialEq for BoundsTransform {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Authored `domain` / `range` override.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisBounds {
    /// Fixed bounds. Missing sides fall back to the computed bounds.
    Explicit(PartialInterval),
    /// Bounds computed from the data (domain) or layout (range), then transformed.
    Derived(BoundsTransform),
}

impl AxisBounds {
    #[must_use]
    pub fn explicit(min: f64, max: f64) -> Self {
        Self::Explicit(PartialInterval::new(Some(min), Some(max)))
    }

    pub fn derived(transform: impl Fn(Interval) -> Interval + Send + Sync + 'static) -> Self {
        Self::Derived(BoundsTransform::new(transform))
    }

    /// Returns the complete explicit interval, if the override does not need
    /// computed bounds at all.
    #[must_use]
    pub fn as_complete(&self) -> Option<Interval> {
        match self {
            Self::Explicit(PartialInterval {
                min: Some(min),
                max: Some(max),
            }) => Some(Interval::new(*min, *max)),
            Self::Explicit(_) | Self::Derived(_) => None,
        }
    }

    /// Resolves the override against `computed` bounds.
    #[must_use]
    pub fn resolve(&self, computed: Interval) -> Interval {
        match self {
            Self::Explicit(partial) => partial.merge_onto(computed),
            Self::Derived(transform) => transform.apply(computed),
        }
    }
}

impl From<Interval> for AxisBounds {
    fn from(value: Interval) -> Self {
        Self::Explicit(value.into())
    }
}

/// Data attached directly to an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisData {
    /// Category labels, indexed from zero.
    Categories(Vec<String>),
    /// Numeric positions (e.g. x values of a scatter plot).
    Values(Vec<f64>),
}

impl AxisData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Categories(labels) => labels.len(),
            Self::Values(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn categories(&self) -> Option<&[String]> {
        match self {
            Self::Categories(labels) => Some(labels),
            Self::Values(_) => None,
        }
    }
}

/// Axis configuration as supplied by the chart author.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub id: Option<String>,
    pub scale_type: ScaleType,
    /// `None` picks the default for the axis kind.
    pub domain_limit: Option<DomainLimit>,
    pub domain: Option<AxisBounds>,
    pub range: Option<AxisBounds>,
    pub data: Option<AxisData>,
    pub category_padding: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            id: None,
            scale_type: ScaleType::Linear,
            domain_limit: None,
            domain: None,
            range: None,
            data: None,
            category_padding: DEFAULT_CATEGORY_PADDING,
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_scale_type(mut self, scale_type: ScaleType) -> Self {
        self.scale_type = scale_type;
        self
    }

    #[must_use]
    pub fn with_domain_limit(mut self, domain_limit: DomainLimit) -> Self {
        self.domain_limit = Some(domain_limit);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<AxisBounds>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: impl Into<AxisBounds>) -> Self {
        self.range = Some(range.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: AxisData) -> Self {
        self.data = Some(data);
        self
    }

    /// Shorthand for a band axis over `labels`.
    #[must_use]
    pub fn with_categories<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.data = Some(AxisData::Categories(
            labels.into_iter().map(Into::into).collect(),
        ));
        self.scale_type = ScaleType::Band;
        self
    }

    #[must_use]
    pub fn with_category_padding(mut self, padding: f64) -> Self {
        self.category_padding = padding;
        self
    }

    /// Parses a single axis config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let json: AxisConfigJson = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse axis config json: {e}"))
        })?;
        Ok(json.into())
    }

    /// Applies kind defaults and validates the config.
    pub fn into_normalized(self, kind: AxisKind) -> ChartResult<NormalizedAxisConfig> {
        if !self.category_padding.is_finite() || !(0.0..=1.0).contains(&self.category_padding) {
            warn!(
                axis = %kind,
                padding = self.category_padding,
                "rejecting axis config with invalid category padding"
            );
            return Err(ChartError::InvalidData(
                "category padding must be finite and within [0, 1]".to_owned(),
            ));
        }

        Ok(NormalizedAxisConfig {
            id: self.id.unwrap_or_else(|| DEFAULT_AXIS_ID.to_owned()),
            scale_type: self.scale_type,
            domain_limit: self
                .domain_limit
                .unwrap_or_else(|| kind.default_domain_limit()),
            domain: self.domain,
            range: self.range,
            data: self.data,
            category_padding: self.category_padding,
        })
    }
}

/// Axis configuration with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAxisConfig {
    pub id: String,
    pub scale_type: ScaleType,
    pub domain_limit: DomainLimit,
    pub domain: Option<AxisBounds>,
    pub range: Option<AxisBounds>,
    pub data: Option<AxisData>,
    pub category_padding: f64,
}

impl NormalizedAxisConfig {
    /// Default config for an axis of `kind`.
    #[must_use]
    pub fn for_kind(kind: AxisKind) -> Self {
        Self {
            id: DEFAULT_AXIS_ID.to_owned(),
            scale_type: ScaleType::Linear,
            domain_limit: kind.default_domain_limit(),
            domain: None,
            range: None,
            data: None,
            category_padding: DEFAULT_CATEGORY_PADDING,
        }
    }

    #[must_use]
    pub fn categories(&self) -> Option<&[String]> {
        self.data.as_ref().and_then(AxisData::categories)
    }
}

/// Axis configuration as it arrives from the host: absent, one, or many.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AxisConfigInput {
    #[default]
    None,
    Single(AxisConfig),
    Many(Vec<AxisConfig>),
}

impl AxisConfigInput {
    /// Parses either a single JSON object or an array of them.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let json: AxisConfigInputJson = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse axis config json: {e}"))
        })?;
        Ok(match json {
            AxisConfigInputJson::Single(config) => Self::Single(config.into()),
            AxisConfigInputJson::Many(configs) => {
                Self::Many(configs.into_iter().map(Into::into).collect())
            }
        })
    }
}

impl From<AxisConfig> for AxisConfigInput {
    fn from(value: AxisConfig) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<AxisConfig>> for AxisConfigInput {
    fn from(value: Vec<AxisConfig>) -> Self {
        Self::Many(value)
    }
}

impl From<Option<AxisConfig>> for AxisConfigInput {
    fn from(value: Option<AxisConfig>) -> Self {
        value.map_or(Self::None, Self::Single)
    }
}

/// Normalizes host-supplied axis config into one entry per axis.
///
/// Multiple axes are keyed by id downstream, so every entry of a multi-axis
/// list must carry a distinct explicit id.
pub fn normalize_axis_config(
    kind: AxisKind,
    input: AxisConfigInput,
) -> ChartResult<Vec<NormalizedAxisConfig>> {
    match input {
        AxisConfigInput::None => Ok(vec![NormalizedAxisConfig::for_kind(kind)]),
        AxisConfigInput::Single(config) => Ok(vec![config.into_normalized(kind)?]),
        AxisConfigInput::Many(configs) if configs.is_empty() => {
            debug!(axis = %kind, "empty axis config list, using defaults");
            Ok(vec![NormalizedAxisConfig::for_kind(kind)])
        }
        AxisConfigInput::Many(configs) => {
            if configs.len() > 1 {
                validate_axis_ids(kind, &configs)?;
            }
            configs
                .into_iter()
                .map(|config| config.into_normalized(kind))
                .collect()
        }
    }
}

fn validate_axis_ids(kind: AxisKind, configs: &[AxisConfig]) -> ChartResult<()> {
    if configs.iter().any(|config| config.id.is_none()) {
        warn!(axis = %kind, count = configs.len(), "multiple axes without ids");
        return Err(ChartError::Configuration(format!(
            "When defining multiple {kind} axes, each must have a unique id"
        )));
    }

    let mut seen = HashSet::with_capacity(configs.len());
    for id in configs.iter().filter_map(|config| config.id.as_deref()) {
        if !seen.insert(id) {
            warn!(axis = %kind, id, "duplicate axis id");
            return Err(ChartError::Configuration(format!(
                "When defining multiple {kind} axes, ids must be unique (duplicate: {id})"
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AxisConfigJson {
    id: Option<String>,
    scale_type: ScaleType,
    domain_limit: Option<DomainLimit>,
    domain: Option<PartialInterval>,
    range: Option<PartialInterval>,
    data: Option<AxisData>,
    category_padding: f64,
}

impl Default for AxisConfigJson {
    fn default() -> Self {
        Self {
            id: None,
            scale_type: ScaleType::Linear,
            domain_limit: None,
            domain: None,
            range: None,
            data: None,
            category_padding: DEFAULT_CATEGORY_PADDING,
        }
    }
}

impl From<AxisConfigJson> for AxisConfig {
    fn from(value: AxisConfigJson) -> Self {
        Self {
            id: value.id,
            scale_type: value.scale_type,
            domain_limit: value.domain_limit,
            domain: value.domain.map(AxisBounds::Explicit),
            range: value.range.map(AxisBounds::Explicit),
            data: value.data,
            category_padding: value.category_padding,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AxisConfigInputJson {
    Many(Vec<AxisConfigJson>),
    Single(AxisConfigJson),
}
