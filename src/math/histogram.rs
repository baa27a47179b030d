//! Fixed-bin-count histogram over a closed interval.
//!
//! Edges are `bins + 1` evenly spaced points from `start` to `end`. Each bin
//! is half-open except the last, which also takes values equal to `end`.
//! Values outside `[start, end]` are not counted.

pub fn edges(start: f64, end: f64, bins: usize) -> Vec<f64> {
    let step = (end - start) / bins as f64;
    (0..=bins)
        .map(|i| if i == bins { end } else { start + step * i as f64 })
        .collect()
}

pub fn counts(values: impl IntoIterator<Item = f64>, start: f64, end: f64, bins: usize) -> Vec<u64> {
    let mut out = vec![0u64; bins];
    if bins == 0 {
        return out;
    }
    let extent = end - start;
    for v in values {
        if v < start || v > end {
            continue;
        }
        let idx = (((v - start) / extent) * bins as f64) as usize;
        out[idx.min(bins - 1)] += 1;
    }
    out
}

/// Counts divided by their total; all zeros when nothing was counted.
pub fn proportions(counts: &[u64]) -> Vec<f64> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|&c| c as f64 / total as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_edge_inclusive() {
        let c = counts([0.0, 5.0, 10.0, 11.0, -1.0], 0.0, 10.0, 2);
        assert_eq!(c, vec![1, 2]);
    }

    #[test]
    fn uneven_width_spans_full_range() {
        let e = edges(100.0, 500.0, 3);
        assert_eq!(e.len(), 4);
        assert_eq!(e[0], 100.0);
        assert_eq!(e[3], 500.0);
    }

    #[test]
    fn empty_counts_give_zero_proportions() {
        assert_eq!(proportions(&[0, 0, 0]), vec![0.0, 0.0, 0.0]);
    }
}
