use std::f64::consts::PI;

pub const SCALE_FACTOR: f64 = 0.5;
pub const MIN_BUBBLE_SIZE: f64 = 5.0;

/// Marker size for an enrollment count: area-proportional radius, clamped
/// from below so tiny trials stay visible.
pub fn bubble_size(enrollment: u64) -> f64 {
    let raw = (enrollment as f64 / PI).sqrt() / SCALE_FACTOR;
    raw.max(MIN_BUBBLE_SIZE)
}
