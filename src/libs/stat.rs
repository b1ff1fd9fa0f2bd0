use itertools::Itertools;

/// Values in ascending order.
///
/// ```
/// # use quadview::libs::stat::sorted;
/// assert_eq!(sorted([3.0, -1.0, 10.0, 2.0]), vec![-1.0, 2.0, 3.0, 10.0]);
/// ```
pub fn sorted(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    values.into_iter().sorted_by(|a, b| a.total_cmp(b)).collect()
}

/// Median of an ascending series.
///
/// The series must be sorted and non-empty; sorting is the caller's job.
///
/// ```
/// # use quadview::libs::stat::median;
/// assert_eq!(median(&[1.0, 2.0, 9.0]), 2.0);
/// assert_eq!(median(&[1.0, 2.0, 4.0, 9.0]), 3.0);
/// assert_eq!(median(&[7.0]), 7.0);
/// ```
pub fn median(series: &[f64]) -> f64 {
    assert!(!series.is_empty(), "median of an empty series");

    let half = series.len() / 2;
    if series.len() % 2 == 1 {
        series[half]
    } else {
        (series[half - 1] + series[half]) / 2.0
    }
}

/// Step of "nice" ticks covering `[start, stop]` with roughly `count` ticks.
///
/// Steps are 1, 2 or 5 times a power of ten. `stop` must be greater than `start`.
/// The step stays finite even when `stop - start` overflows.
///
/// ```
/// # use quadview::libs::stat::tick_step;
/// assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
/// assert_eq!(tick_step(0.0, 97.0, 10), 10.0);
/// assert_eq!(tick_step(1.0, 4.0, 10), 0.5);
/// assert_eq!(tick_step(0.0, 20.0, 10), 2.0);
/// ```
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;

    // Halves are exact and never overflow
    let half_span = stop / 2.0 - start / 2.0;
    let magnitude = match half_span * 2.0 / count {
        raw if raw.is_finite() => raw.log10(),
        _ => (half_span / count).log10() + std::f64::consts::LOG10_2,
    };

    let mut step = pow10(magnitude.floor() as i32);
    let err = count / 2.0 / half_span * step;
    let factor = if err <= 0.15 {
        10.0
    } else if err <= 0.35 {
        5.0
    } else if err <= 0.75 {
        2.0
    } else {
        1.0
    };
    if (step * factor).is_finite() {
        step *= factor;
    }
    step
}

/// Power of ten that turns a nice `step` into a small integer, one for steps of
/// at least one. Infinite for steps too small to scale.
///
/// ```
/// # use quadview::libs::stat::decimal_scale;
/// assert_eq!(decimal_scale(5.0), 1.0);
/// assert_eq!(decimal_scale(20.0), 1.0);
/// assert_eq!(decimal_scale(0.2), 10.0);
/// assert_eq!(decimal_scale(0.05), 100.0);
/// assert_eq!(decimal_scale(2e-18), 1e18);
/// ```
pub fn decimal_scale(step: f64) -> f64 {
    let exponent = (step.log10() + 1e-9).floor() as i32;
    if exponent >= 0 {
        1.0
    } else {
        pow10(-exponent)
    }
}

fn pow10(exponent: i32) -> f64 {
    if exponent >= 0 {
        10f64.powi(exponent)
    } else {
        1.0 / 10f64.powi(-exponent)
    }
}
