use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::nice_ticks::{approx_equal, evenly_sample};
use crate::core::{AxisScale, BandScale, ContinuousScale, Scale, ScaleType};

/// Tick count used when neither a count nor a pixel interval is requested.
pub const DEFAULT_TICK_COUNT: usize = 5;
/// Fewest ticks produced from a pixel interval.
pub const MIN_INTERVAL_TICK_COUNT: usize = 4;

const MAX_INTEGER_CANDIDATES: f64 = 10_000.0;
const MAX_LOG_CANDIDATES: usize = 256;
const MAX_NICE_COUNT_SEARCH: usize = 64;
const MAX_MIN_COUNT_BISECTIONS: usize = 64;

/// A tick value with its resolved position on the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Domain value; the category index for band scales.
    pub tick: f64,
    pub position: f64,
}

/// Predicate deciding whether a candidate tick is kept.
#[derive(Clone)]
pub struct TickFilter(Arc<dyn Fn(f64) -> bool + Send + Sync>);

impl TickFilter {
    pub fn new(predicate: impl Fn(f64) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    #[must_use]
    pub fn accepts(&self, value: f64) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for TickFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TickFilter(..)")
    }
}

/// Authored `ticks` prop: a fixed list, or a predicate over candidates.
#[derive(Debug, Clone)]
pub enum TickSelector {
    Values(Vec<f64>),
    Filter(TickFilter),
}

impl TickSelector {
    pub fn filter(predicate: impl Fn(f64) -> bool + Send + Sync + 'static) -> Self {
        Self::Filter(TickFilter::new(predicate))
    }
}

impl From<Vec<f64>> for TickSelector {
    fn from(value: Vec<f64>) -> Self {
        Self::Values(value)
    }
}

/// Spacing constraints applied after tick selection.
///
/// `min_step` and `max_step` bound the gap between neighbouring ticks.
/// `min_tick_count` is a hint: it never overrides `min_step`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickOptions {
    pub min_step: Option<f64>,
    pub max_step: Option<f64>,
    pub min_tick_count: Option<usize>,
}

/// Everything the tick generator looks at for one axis.
#[derive(Debug, Clone)]
pub struct TickRequest<'a> {
    pub scale: AxisScale,
    pub categories: Option<&'a [String]>,
    pub ticks: Option<TickSelector>,
    /// Desired pixel distance between ticks.
    pub tick_interval: Option<f64>,
    /// Desired number of ticks; wins over `tick_interval`.
    pub requested_tick_count: Option<usize>,
    pub possible_tick_values: Option<&'a [f64]>,
    pub options: TickOptions,
}

impl<'a> TickRequest<'a> {
    #[must_use]
    pub fn new(scale: impl Into<AxisScale>) -> Self {
        Self {
            scale: scale.into(),
            categories: None,
            ticks: None,
            tick_interval: None,
            requested_tick_count: None,
            possible_tick_values: None,
            options: TickOptions::default(),
        }
    }

    #[must_use]
    pub fn with_categories(mut self, categories: &'a [String]) -> Self {
        self.categories = Some(categories);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: impl Into<TickSelector>) -> Self {
        self.ticks = Some(ticks.into());
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: f64) -> Self {
        self.tick_interval = Some(tick_interval);
        self
    }

    #[must_use]
    pub fn with_requested_tick_count(mut self, count: usize) -> Self {
        self.requested_tick_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_possible_tick_values(mut self, values: &'a [f64]) -> Self {
        self.possible_tick_values = Some(values);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: TickOptions) -> Self {
        self.options = options;
        self
    }
}

/// Produces tick values and positions for an axis scale.
///
/// Explicit tick lists are kept in the given order; generated ticks ascend.
#[must_use]
pub fn generate_ticks(request: &TickRequest<'_>) -> Vec<AxisTick> {
    let ticks = match request.scale {
        AxisScale::Band(scale) => band_ticks(scale, request),
        AxisScale::Continuous(scale) => continuous_ticks(scale, request),
    };
    trace!(
        scale = ?request.scale.scale_type(),
        count = ticks.len(),
        "generated axis ticks"
    );
    ticks
}

fn band_ticks(scale: BandScale, request: &TickRequest<'_>) -> Vec<AxisTick> {
    let is_valid = |index: f64| {
        scale.contains_index(index)
            && request
                .categories
                .is_none_or(|categories| index >= 0.0 && index < categories.len() as f64)
    };
    let to_tick = |index: f64| AxisTick {
        tick: index,
        position: scale.center(index),
    };

    match &request.ticks {
        Some(TickSelector::Values(values)) => values
            .iter()
            .copied()
            .filter(|index| is_valid(*index))
            .map(to_tick)
            .collect(),
        Some(TickSelector::Filter(filter)) => scale
            .indices()
            .filter(|index| is_valid(*index) && filter.accepts(*index))
            .map(to_tick)
            .collect(),
        None => scale.indices().filter(|index| is_valid(*index)).map(to_tick).collect(),
    }
}

fn continuous_ticks(scale: ContinuousScale, request: &TickRequest<'_>) -> Vec<AxisTick> {
    let to_tick = |value: f64| AxisTick {
        tick: value,
        position: scale.apply(value),
    };

    let values = match &request.ticks {
        Some(TickSelector::Values(values)) => {
            return values.iter().copied().map(to_tick).collect();
        }
        Some(TickSelector::Filter(filter)) => {
            let candidates = match request.possible_tick_values {
                Some(possible) => candidates_within_domain(scale, possible),
                None => count_ticks(
                    scale,
                    request.requested_tick_count.unwrap_or(DEFAULT_TICK_COUNT),
                    &request.options,
                ),
            };
            let constrained = apply_step_constraints(candidates, &request.options);
            return constrained
                .into_iter()
                .filter(|value| filter.accepts(*value))
                .map(to_tick)
                .collect();
        }
        None => select_continuous_values(scale, request),
    };

    apply_step_constraints(values, &request.options)
        .into_iter()
        .map(to_tick)
        .collect()
}

fn select_continuous_values(scale: ContinuousScale, request: &TickRequest<'_>) -> Vec<f64> {
    let possible = request
        .possible_tick_values
        .map(|values| candidates_within_domain(scale, values))
        .filter(|values| !values.is_empty());

    if let Some(count) = request.requested_tick_count {
        return match possible {
            Some(candidates) => evenly_sample(&candidates, count),
            None => count_ticks(scale, count, &request.options),
        };
    }

    if let Some(interval) = request.tick_interval {
        let desired = interval_tick_count(scale.range().span().abs(), interval);
        let candidates = possible.unwrap_or_else(|| whole_number_candidates(scale));
        return evenly_sample(&candidates, desired);
    }

    possible.unwrap_or_else(|| count_ticks(scale, DEFAULT_TICK_COUNT, &request.options))
}

/// Tick count for a pixel interval, never below [`MIN_INTERVAL_TICK_COUNT`].
#[must_use]
pub fn interval_tick_count(range_span_px: f64, tick_interval_px: f64) -> usize {
    if !range_span_px.is_finite() || !tick_interval_px.is_finite() || tick_interval_px <= 0.0 {
        return MIN_INTERVAL_TICK_COUNT;
    }
    let raw = (range_span_px / tick_interval_px).round();
    (raw.min(MAX_INTEGER_CANDIDATES) as usize).max(MIN_INTERVAL_TICK_COUNT)
}

fn count_ticks(scale: ContinuousScale, count: usize, options: &TickOptions) -> Vec<f64> {
    let base = sorted(scale.ticks(count));
    if scale.scale_type() != ScaleType::Linear {
        return base;
    }

    let (min_step, max_step) = step_bounds(options);
    let step = tick_step_hint_from_values(&base);
    if let Some(min_step) = min_step.filter(|min| step > 0.0 && step < *min) {
        for candidate in (1..count).rev() {
            let ticks = sorted(scale.ticks(candidate));
            if tick_step_hint_from_values(&ticks) >= min_step || ticks.len() <= 2 {
                return ticks;
            }
        }
    }
    if let Some(max_step) = max_step.filter(|max| step > *max) {
        for candidate in count + 1..=count + MAX_NICE_COUNT_SEARCH {
            let ticks = sorted(scale.ticks(candidate));
            let candidate_step = tick_step_hint_from_values(&ticks);
            if candidate_step > 0.0 && candidate_step <= max_step {
                return ticks;
            }
        }
    }
    base
}

fn candidates_within_domain(scale: ContinuousScale, possible: &[f64]) -> Vec<f64> {
    let domain = scale.domain();
    let mut values: Vec<f64> = possible
        .iter()
        .copied()
        .filter(|value| value.is_finite() && domain.contains(*value))
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup_by(|lhs, rhs| approx_equal(*lhs, *rhs));
    values
}

fn whole_number_candidates(scale: ContinuousScale) -> Vec<f64> {
    let (low, high) = scale.domain().ordered();
    if scale.scale_type() == ScaleType::Log {
        return sorted(scale.ticks(MAX_LOG_CANDIDATES));
    }

    let mut values = vec![low];
    if high - low > MAX_INTEGER_CANDIDATES {
        values.extend(sorted(scale.ticks(MAX_INTEGER_CANDIDATES as usize / 10)));
    } else {
        let mut whole = low.ceil();
        while whole <= high {
            values.push(whole);
            whole += 1.0;
        }
    }
    values.push(high);
    values.sort_by(f64::total_cmp);
    values.dedup_by(|lhs, rhs| approx_equal(*lhs, *rhs));
    values
}

fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}

fn step_bounds(options: &TickOptions) -> (Option<f64>, Option<f64>) {
    let valid = |step: f64| step.is_finite() && step > 0.0;
    let min_step = options.min_step.filter(|step| valid(*step));
    let max_step = options.max_step.filter(|step| valid(*step));
    match (min_step, max_step) {
        (Some(min), Some(max)) if min > max => {
            warn!(min_step = min, max_step = max, "min_step exceeds max_step, ignoring max_step");
            (Some(min), None)
        }
        bounds => bounds,
    }
}

fn step_tolerance(step: f64) -> f64 {
    step.abs().max(1.0) * 1e-9
}

fn apply_step_constraints(values: Vec<f64>, options: &TickOptions) -> Vec<f64> {
    let (min_step, max_step) = step_bounds(options);
    let mut values = sorted(values);
    if let Some(min_step) = min_step {
        values = select_ticks_with_min_step(values, min_step);
    }
    if let Some(max_step) = max_step {
        values = fill_ticks_to_max_step(values, max_step);
    }
    if let (Some(min_step), Some(max_step)) = (min_step, max_step) {
        if !gaps_within(&values, min_step, max_step) {
            values = uniform_ticks_within(&values, min_step, max_step);
        }
    }
    if let Some(min_tick_count) = options.min_tick_count {
        values = bisect_to_min_count(values, min_tick_count, min_step);
    }
    values
}

// The last tick replaces its predecessor when the spacing allows it.
fn select_ticks_with_min_step(values: Vec<f64>, min_step: f64) -> Vec<f64> {
    if values.len() <= 1 {
        return values;
    }

    let tolerance = step_tolerance(min_step);
    let mut selected: Vec<f64> = Vec::with_capacity(values.len());
    selected.push(values[0]);
    for value in values.iter().copied().skip(1) {
        let last = selected[selected.len() - 1];
        if value - last >= min_step - tolerance {
            selected.push(value);
        }
    }

    let last_value = values[values.len() - 1];
    let selected_last = selected[selected.len() - 1];
    if selected_last != last_value && selected.len() > 1 {
        let penultimate = selected[selected.len() - 2];
        if last_value - penultimate >= min_step - tolerance {
            let last_index = selected.len() - 1;
            selected[last_index] = last_value;
        }
    }

    selected
}

fn fill_ticks_to_max_step(values: Vec<f64>, max_step: f64) -> Vec<f64> {
    if values.len() <= 1 {
        return values;
    }

    let tolerance = step_tolerance(max_step);
    let mut filled = Vec::with_capacity(values.len());
    filled.push(values[0]);
    for pair in values.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let gap = end - start;
        if gap > max_step + tolerance {
            let parts = (gap / max_step - 1e-9).ceil().min(MAX_INTEGER_CANDIDATES) as usize;
            for part in 1..parts {
                filled.push(start + gap * (part as f64) / (parts as f64));
            }
        }
        filled.push(end);
    }
    filled
}

fn gaps_within(values: &[f64], min_step: f64, max_step: f64) -> bool {
    values.windows(2).all(|pair| {
        let gap = pair[1] - pair[0];
        gap >= min_step - step_tolerance(min_step) && gap <= max_step + step_tolerance(max_step)
    })
}

// Equal split of the extent if one fits, else `min_step` increments.
fn uniform_ticks_within(values: &[f64], min_step: f64, max_step: f64) -> Vec<f64> {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return values.to_vec();
    };
    let extent = last - first;
    let parts = (extent / min_step + 1e-9).floor().min(MAX_INTEGER_CANDIDATES);
    if parts < 1.0 {
        return vec![first];
    }

    let split = extent / parts;
    if split <= max_step + step_tolerance(max_step) {
        let parts = parts as usize;
        return (0..=parts)
            .map(|part| first + extent * (part as f64) / (parts as f64))
            .collect();
    }

    (0..=parts as usize)
        .map(|part| first + min_step * part as f64)
        .take_while(|value| *value <= last + step_tolerance(min_step))
        .collect()
}

fn bisect_to_min_count(
    mut values: Vec<f64>,
    min_tick_count: usize,
    min_step: Option<f64>,
) -> Vec<f64> {
    for _ in 0..MAX_MIN_COUNT_BISECTIONS {
        if values.len() >= min_tick_count || values.len() < 2 {
            break;
        }
        // Leftmost widest gap, so repeated splits fill from the start.
        let Some((index, gap)) = values
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .enumerate()
            .fold(None, |widest: Option<(usize, f64)>, (index, gap)| match widest {
                Some((_, best)) if best >= gap => widest,
                _ => Some((index, gap)),
            })
        else {
            break;
        };
        let half = gap / 2.0;
        if half <= 0.0 || min_step.is_some_and(|min| half < min - step_tolerance(min)) {
            break;
        }
        values.insert(index + 1, values[index] + half);
    }
    values
}

fn tick_step_hint_from_values(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    let mut best = f64::INFINITY;
    for pair in values.windows(2) {
        let step = (pair[1] - pair[0]).abs();
        if step.is_finite() && step > 0.0 {
            best = best.min(step);
        }
    }

    if best.is_finite() { best } else { 0.0 }
}
