//! Per-trial derived values for the scatter view.

mod bubble;
mod year;

pub use bubble::{MIN_BUBBLE_SIZE, SCALE_FACTOR, bubble_size};
pub use year::{SENTINEL_YEAR, extract_year};
