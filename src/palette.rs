//! Fixed colour palettes, stored in ascending lexicographic order.
//!
//! Colours are handed out by position, not by category identity: the same
//! category can change colour when the category list changes.

/// Category20 (first 16 entries), sorted.
pub const HISTOGRAM_PALETTE: [&str; 16] = [
    "#1f77b4", "#2ca02c", "#7f7f7f", "#8c564b", "#9467bd", "#98df8a", "#aec7e8", "#c49c94",
    "#c5b0d5", "#c7c7c7", "#d62728", "#e377c2", "#f7b6d2", "#ff7f0e", "#ff9896", "#ffbb78",
];

/// Spectral6, sorted.
pub const SCATTER_PALETTE: [&str; 6] = [
    "#3288bd", "#99d594", "#d53e4f", "#e6f598", "#fc8d59", "#fee08b",
];

/// Colour at `index`, wrapping past the end of the palette.
pub fn pick(palette: &[&'static str], index: usize) -> &'static str {
    palette[index % palette.len()]
}

/// Position of `category` within an ascending category list. Categories not
/// in the list take the position they would be inserted at.
pub fn rank(sorted: &[String], category: &str) -> usize {
    match sorted.binary_search_by(|c| c.as_str().cmp(category)) {
        Ok(i) | Err(i) => i,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_sorted() {
        assert!(HISTOGRAM_PALETTE.windows(2).all(|w| w[0] < w[1]));
        assert!(SCATTER_PALETTE.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn pick_wraps() {
        assert_eq!(pick(&SCATTER_PALETTE, 6), SCATTER_PALETTE[0]);
    }

    #[test]
    fn rank_of_missing_category() {
        let sorted = vec!["A".to_string(), "C".to_string()];
        assert_eq!(rank(&sorted, "C"), 1);
        assert_eq!(rank(&sorted, "B"), 1);
        assert_eq!(rank(&sorted, "D"), 2);
    }
}
