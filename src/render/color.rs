// src/render/color.rs

/// Color assigned to every node when all nodes share one semester.
pub const UNIFORM_COLOR: f64 = 0.5;

/// Map semesters linearly onto `[0, 1]`.
///
/// The earliest semester maps to 0 and the latest to 1. If every value is the
/// same, every node gets [`UNIFORM_COLOR`]. Output order matches input order.
pub fn calculate_color_range<T>(semesters: &[T]) -> Vec<f64>
where
    T: Copy + Into<f64>,
{
    let values: Vec<f64> = semesters.iter().map(|&s| s.into()).collect();

    let Some(lo) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let hi = values.iter().copied().fold(lo, f64::max);
    let range = hi - lo;

    if range == 0.0 {
        return vec![UNIFORM_COLOR; values.len()];
    }

    values.into_iter().map(|v| (v - lo) / range).collect()
}
