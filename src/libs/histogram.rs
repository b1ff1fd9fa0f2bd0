use crate::libs::stat;
use serde::Serialize;

// Slack, in steps, for values sitting on a bin edge
const EDGE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub lower_bound: f64,
    pub width: f64,
    pub count: usize,
}

impl Bin {
    pub fn upper_bound(&self) -> f64 {
        self.lower_bound + self.width
    }
}

/// Buckets values into equal-width bins aligned on nice ticks.
///
/// The bin width is the tick step for `ticks` ticks over `[min, max]`; the
/// first bin starts on the tick at or below `min` and the last one ends on the
/// tick at or above `max`. Bins are half-open except the last, which is closed,
/// so every value lands in exactly one bin.
///
/// A constant series gives a single zero-width bin; an empty one gives no bins.
///
/// ```
/// # use quadview::libs::histogram::histogram;
/// let bins = histogram(vec![3.0, 1.0, 10.0, 2.0, 9.5], 10);
/// assert_eq!(bins.len(), 9);
/// assert_eq!(bins[0].lower_bound, 1.0);
/// assert_eq!(bins[0].width, 1.0);
/// assert_eq!(bins[0].count, 1);
/// assert_eq!(bins[8].count, 2);
/// assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
/// ```
pub fn histogram(values: impl IntoIterator<Item = f64>, ticks: usize) -> Vec<Bin> {
    let values = stat::sorted(values);
    let (min, max) = match (values.first(), values.last()) {
        (Some(min), Some(max)) => (*min, *max),
        _ => return vec![],
    };

    if min == max {
        return vec![Bin {
            lower_bound: min,
            width: 0.0,
            count: values.len(),
        }];
    }

    // Bin edges are counted in steps; the slack is a fraction of one step
    let step = stat::tick_step(min, max, ticks);
    let first = (min / step + EDGE_EPSILON).floor();
    let last = (max / step - EDGE_EPSILON).ceil();
    let n_bins = ((last - first) as usize).max(1);

    let mut counts = vec![0usize; n_bins];
    for v in &values {
        let idx = ((v / step + EDGE_EPSILON).floor() - first).max(0.0) as usize;
        counts[idx.min(n_bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            lower_bound: edge(first + i as f64, step),
            width: step,
            count,
        })
        .collect()
}

// Position of the `units`-th tick. Decimal steps go through an integer
// multiple: 3 steps of 0.1 give 0.3, not 0.30000000000000004.
fn edge(units: f64, step: f64) -> f64 {
    let scale = stat::decimal_scale(step);
    let bound = if scale.is_finite() && scale > 1.0 {
        units * (step * scale).round() / scale
    } else {
        units * step
    };
    bound.clamp(f64::MIN, f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_contiguous(bins: &[Bin]) {
        for pair in bins.windows(2) {
            approx::assert_relative_eq!(pair[0].upper_bound(), pair[1].lower_bound, epsilon = 1e-9);
            assert!(pair[0].lower_bound < pair[1].lower_bound);
        }
    }

    #[test]
    fn counts_sum_to_length() {
        let values = vec![0.12, 0.5, 0.5, 0.93, 0.31, 0.77, 0.05, 0.64, 0.5, 0.29];
        let bins = histogram(values.clone(), 10);

        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_contiguous(&bins);
        assert!(bins[0].lower_bound <= 0.05);
        assert!(bins.last().unwrap().upper_bound() >= 0.93);
    }

    #[test]
    fn every_value_in_one_bin() {
        let values: Vec<f64> = (0..50).map(|i| (i * 7 % 23) as f64 * 1.5 - 4.0).collect();
        let bins = histogram(values.clone(), 10);
        assert_contiguous(&bins);

        for v in &values {
            let last = bins.len() - 1;
            let holders = bins
                .iter()
                .enumerate()
                .filter(|(i, b)| {
                    *v >= b.lower_bound
                        && (*v < b.upper_bound() || (*i == last && *v <= b.upper_bound()))
                })
                .count();
            assert_eq!(holders, 1, "value {}", v);
        }
    }

    #[test]
    fn bins_cover_tick_aligned_domain() {
        let bins = histogram(vec![12.0, 47.0, 95.0, 33.0], 10);
        // span 83 gives a step of 10
        assert_eq!(bins.len(), 9);
        assert_eq!(bins[0].lower_bound, 10.0);
        assert_eq!(bins[8].upper_bound(), 100.0);
        assert_eq!(
            bins.iter().map(|b| b.count).collect::<Vec<_>>(),
            vec![1, 0, 1, 1, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn edges_are_half_open() {
        let bins = histogram(vec![0.0, 0.1, 0.2, 0.3, 1.0], 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 1);
        assert_eq!(bins[2].count, 1);
        assert_eq!(bins[3].count, 1);
        assert_eq!(bins[9].count, 1);
    }

    #[test]
    fn degenerate_series() {
        assert!(histogram(vec![], 10).is_empty());

        let bins = histogram(vec![2.5, 2.5, 2.5], 10);
        assert_eq!(
            bins,
            vec![Bin {
                lower_bound: 2.5,
                width: 0.0,
                count: 3
            }]
        );
    }

    fn assert_covers(bins: &[Bin], values: &[f64]) {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let last = bins.last().unwrap();
        // rounding of the edges themselves
        let slack = |x: f64| (last.width * EDGE_EPSILON).max(x.abs() * 4.0 * f64::EPSILON);

        for bin in bins {
            assert!(bin.lower_bound.is_finite(), "{:?}", bins);
            assert!(bin.width.is_finite() && bin.width > 0.0, "{:?}", bins);
        }
        assert!(bins[0].lower_bound <= min + slack(min), "{:?}", bins);
        assert!(
            last.upper_bound() >= max - slack(max),
            "{:?}",
            bins
        );
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        for pair in bins.windows(2) {
            approx::assert_relative_eq!(
                pair[0].upper_bound(),
                pair[1].lower_bound,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn tiny_spans() {
        let values = vec![1e-17, 2e-17, 3e-17];
        let bins = histogram(values.clone(), 10);
        assert_covers(&bins, &values);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[5].count, 1);
        assert_eq!(bins[9].count, 1);

        let values = vec![1.0, 1.00000000000001];
        let bins = histogram(values.clone(), 10);
        assert_covers(&bins, &values);
        assert!(bins.len() >= 2);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins.last().unwrap().count, 1);
    }

    #[test]
    fn overflowing_span() {
        let values = vec![-1e308, 0.0, 1e308];
        let bins = histogram(values.clone(), 10);
        assert_covers(&bins, &values);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[5].count, 1);
    }
}
