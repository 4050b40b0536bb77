use crate::data::model::number_text;

/// Bin count for the price-distribution histogram.
pub const HISTOGRAM_BINS: usize = 20;
/// Bin count for the compact value-count overview chart.
pub const OVERVIEW_BINS: usize = 10;

// ---------------------------------------------------------------------------
// Equal-width histogram
// ---------------------------------------------------------------------------

/// Counts per equal-width bin spanning `[min, max]` of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, length `counts.len() + 1`.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub bin_width: f64,
}

impl Histogram {
    /// Midpoint of bin `i`, where the bar is drawn.
    pub fn center(&self, i: usize) -> f64 {
        self.edges[i] + self.bin_width / 2.0
    }
}

/// Bucket `values` into `n_bins` equal-width bins. Every value lands in
/// exactly one bin; the maximum goes into the last. A degenerate range
/// (all values equal) collapses into the first bin of a unit-width row.
/// `None` when there are no values or no bins.
pub fn histogram(values: &[f64], n_bins: usize) -> Option<Histogram> {
    if values.is_empty() || n_bins == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let bin_width = if range > 0.0 { range / n_bins as f64 } else { 1.0 };

    let mut counts = vec![0usize; n_bins];
    for &v in values {
        let i = if range > 0.0 {
            (((v - min) / bin_width) as usize).min(n_bins - 1)
        } else {
            0
        };
        counts[i] += 1;
    }

    let edges = (0..=n_bins)
        .map(|i| min + bin_width * i as f64)
        .collect();

    Some(Histogram {
        edges,
        counts,
        bin_width,
    })
}

// ---------------------------------------------------------------------------
// Value-count overview
// ---------------------------------------------------------------------------

/// One labelled range and how many values fell into it.
#[derive(Debug, Clone, PartialEq)]
pub struct BinCount {
    pub label: String,
    pub count: usize,
}

/// Compact overview: `n_bins` equal-width ranges ordered by descending
/// count (ties keep ascending range order).
pub fn value_count_bins(values: &[f64], n_bins: usize) -> Vec<BinCount> {
    let Some(hist) = histogram(values, n_bins) else {
        return Vec::new();
    };

    let mut bins: Vec<BinCount> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| BinCount {
            label: format!(
                "{} to {}",
                number_text(round2(hist.edges[i])),
                number_text(round2(hist.edges[i + 1]))
            ),
            count,
        })
        .collect();
    bins.sort_by(|a, b| b.count.cmp(&a.count));
    bins
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_input_length() {
        let values: Vec<f64> = (0..137).map(|i| (i as f64 * 0.73).sin() * 40.0 + 50.0).collect();
        let hist = histogram(&values, HISTOGRAM_BINS).unwrap();
        assert_eq!(hist.counts.len(), HISTOGRAM_BINS);
        assert_eq!(hist.edges.len(), HISTOGRAM_BINS + 1);
        assert_eq!(hist.counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn maximum_value_lands_in_last_bin() {
        let hist = histogram(&[0.0, 5.0, 10.0], 2).unwrap();
        assert_eq!(hist.counts, vec![2, 1]);
        assert_eq!(hist.edges, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn constant_values_collapse_into_first_bin() {
        let hist = histogram(&[7.0, 7.0, 7.0], 20).unwrap();
        assert_eq!(hist.counts.iter().sum::<usize>(), 3);
        assert_eq!(hist.counts[0], 3);
        assert_eq!(hist.bin_width, 1.0);
    }

    #[test]
    fn empty_input_has_no_histogram() {
        assert!(histogram(&[], 20).is_none());
    }

    #[test]
    fn overview_orders_by_descending_count() {
        // 0..10 split in two: four values low, one high
        let bins = value_count_bins(&[0.0, 1.0, 2.0, 3.0, 10.0], 2);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].count, 4);
        assert_eq!(bins[0].label, "0 to 5");
        assert_eq!(bins[1].count, 1);
    }

    #[test]
    fn overview_bin_count_is_independent_of_histogram() {
        let values: Vec<f64> = (0..60).map(|i| i as f64).collect();
        let bins = value_count_bins(&values, OVERVIEW_BINS);
        assert_eq!(bins.len(), OVERVIEW_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 60);
    }
}
