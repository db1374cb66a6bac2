//! Human-friendly tick math shared by scales and the tick generator.
//!
//! Linear ticks follow the d3-array `ticks`/`tickIncrement` algorithm: the step
//! is a power of ten times 1, 2, 5 or 10, picked as the candidate closest to
//! `span / count`.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const NICE_MAX_ITERATIONS: usize = 10;
const MAX_GENERATED_TICKS: f64 = 10_000.0;

/// `(first index, last index, increment)`. A negative increment encodes
/// `1 / -increment` so sub-unit steps stay exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let positive_inc = 10_f64.powf(-power) / factor;
        i1 = (start * positive_inc).round();
        i2 = (stop * positive_inc).round();
        if i1 / positive_inc < start {
            i1 += 1.0;
        }
        if i2 / positive_inc > stop {
            i2 -= 1.0;
        }
        inc = -positive_inc;
    } else {
        inc = 10_f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Step between ticks for `count` ticks over `[start, stop]`, in the encoded
/// form used by [`tick_spec`].
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Nice tick values covering `[start, stop]`, approximately `count` of them.
///
/// Reversed inputs produce descending ticks.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if i2 < i1 || !inc.is_finite() {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0).min(MAX_GENERATED_TICKS) as usize;
    let value_at = |index: f64| if inc < 0.0 { index / -inc } else { index * inc };
    (0..n)
        .map(|offset| {
            let offset = offset as f64;
            if reverse {
                value_at(i2 - offset)
            } else {
                value_at(i1 + offset)
            }
        })
        .collect()
}

/// Widens `[start, stop]` outward to multiples of the nice step.
///
/// Iterates until the step stops changing, as the step itself depends on the
/// widened bounds. Bounds that never settle are returned unchanged.
#[must_use]
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    nice_domain_within(start, stop, count, NICE_MAX_ITERATIONS)
}

fn nice_domain_within(start: f64, stop: f64, count: usize, max_iterations: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop || count == 0 {
        return (start, stop);
    }

    let reverse = stop < start;
    let (mut low, mut high) = if reverse {
        (stop, start)
    } else {
        (start, stop)
    };
    let mut previous_step: Option<f64> = None;

    for _ in 0..max_iterations {
        let step = tick_increment(low, high, count);
        if previous_step == Some(step) {
            return if reverse { (high, low) } else { (low, high) };
        }
        if step > 0.0 {
            low = (low / step).floor() * step;
            high = (high / step).ceil() * step;
        } else if step < 0.0 {
            low = (low * step).ceil() / step;
            high = (high * step).floor() / step;
        } else {
            break;
        }
        previous_step = Some(step);
    }

    (start, stop)
}

/// Decade ladder (1, 2, 5 per power of ten) for log scales, bounded by the
/// domain and thinned to at most `tick_count` entries.
#[must_use]
pub fn log_ladder_ticks(start: f64, end: f64, tick_count: usize) -> Vec<f64> {
    if tick_count == 0 || start <= 0.0 || end <= 0.0 || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }

    let ascending = start <= end;
    let min = start.min(end);
    let max = start.max(end);
    let min_exp = min.log10().floor() as i32;
    let max_exp = max.log10().ceil() as i32;

    let mut ticks = Vec::new();
    for exp in min_exp..=max_exp {
        let decade = 10_f64.powi(exp);
        for multiplier in [1.0, 2.0, 5.0] {
            let candidate = decade * multiplier;
            if candidate >= min && candidate <= max {
                ticks.push(candidate);
            }
        }
    }

    if !ticks.iter().any(|value| approx_equal(*value, min)) {
        ticks.push(min);
    }
    if !ticks.iter().any(|value| approx_equal(*value, max)) {
        ticks.push(max);
    }

    ticks.sort_by(f64::total_cmp);
    ticks.dedup_by(|lhs, rhs| approx_equal(*lhs, *rhs));

    let mut sampled = evenly_sample(&ticks, tick_count);
    if !ascending {
        sampled.reverse();
    }
    sampled
}

/// Picks `target` entries spread evenly across sorted `values`, always keeping
/// the first and the last entry.
#[must_use]
pub fn evenly_sample(values: &[f64], target: usize) -> Vec<f64> {
    if values.len() <= target {
        return values.to_vec();
    }
    match target {
        0 => return Vec::new(),
        1 => return vec![values[0]],
        _ => {}
    }

    let last_index = values.len() - 1;
    let denominator = (target - 1) as f64;
    let mut sampled: Vec<f64> = Vec::with_capacity(target);
    for step in 0..target {
        let ratio = (step as f64) / denominator;
        let index = ((ratio * last_index as f64).round() as usize).min(last_index);
        let value = values[index];
        if sampled
            .last()
            .is_some_and(|previous| approx_equal(*previous, value))
        {
            continue;
        }
        sampled.push(value);
    }
    sampled
}

/// Relative float comparison used to dedupe generated tick values.
#[must_use]
pub fn approx_equal(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= scale * 1e-12
}

#[cfg(test)]
mod tests {
    use super::{
        evenly_sample, log_ladder_ticks, nice_domain, nice_domain_within, nice_ticks, tick_increment,
    };

    #[test]
    fn ticks_pick_human_friendly_steps() {
        assert_eq!(
            nice_ticks(0.0, 1.0, 10),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
        assert_eq!(nice_ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(nice_ticks(1.0, 9.0, 3), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn reversed_domain_yields_descending_ticks() {
        assert_eq!(nice_ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn degenerate_inputs_are_handled() {
        assert!(nice_ticks(0.0, 10.0, 0).is_empty());
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn sub_unit_increments_are_encoded_as_negative_reciprocals() {
        assert_eq!(tick_increment(0.0, 1.0, 10), -10.0);
        assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
    }

    #[test]
    fn nice_domain_widens_to_round_bounds() {
        assert_eq!(nice_domain(0.3, 9.7, 10), (0.0, 10.0));
        assert_eq!(nice_domain(12.0, 87.0, 10), (10.0, 90.0));
        assert_eq!(nice_domain(5.0, 5.0, 10), (5.0, 5.0));
    }

    #[test]
    fn unsettled_nice_domain_keeps_input_bounds() {
        assert_eq!(nice_domain_within(0.3, 9.7, 10, 1), (0.3, 9.7));
        assert_eq!(nice_domain_within(9.7, 0.3, 10, 1), (9.7, 0.3));
        assert_eq!(nice_domain_within(0.3, 9.7, 10, 2), (0.3, 9.7));
        assert_eq!(nice_domain_within(0.3, 9.7, 10, 3), (0.0, 10.0));
    }

    #[test]
    fn log_ladder_stays_within_domain() {
        let ticks = log_ladder_ticks(1.0, 1000.0, 20);
        assert_eq!(ticks.first().copied(), Some(1.0));
        assert_eq!(ticks.last().copied(), Some(1000.0));
        assert!(ticks.contains(&20.0));
    }

    #[test]
    fn evenly_sample_keeps_endpoints() {
        let values: Vec<f64> = (0..=10).map(f64::from).collect();
        assert_eq!(evenly_sample(&values, 5), vec![0.0, 3.0, 5.0, 8.0, 10.0]);
        assert_eq!(evenly_sample(&values, 4), vec![0.0, 3.0, 7.0, 10.0]);
        assert_eq!(evenly_sample(&values, 20).len(), 11);
    }
}
