/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Absolute tolerance used by `==` and `!=`.
pub const EQUALITY_TOLERANCE: f64 = 1e-6;

/// Lower bound of every sample written into a grid.
pub const SAMPLE_MIN: f64 = -1.0;
/// Upper bound of every sample written into a grid.
pub const SAMPLE_MAX: f64 = 1.0;

/// Maps a non-finite value to `0.0` and returns finite values unchanged.
///
/// This is the single place where the evaluator's "degenerate numerics become
/// zero" rule lives. Division, `^`, the logarithms, `sqrt` and the guarded
/// trigonometric and hyperbolic functions all route their result through it.
///
/// # Example
/// ```
/// use wavexpr::util::num::finite_or_zero;
///
/// assert_eq!(finite_or_zero(1.5), 1.5);
/// assert_eq!(finite_or_zero(f64::NAN), 0.0);
/// assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
/// ```
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Clamps an evaluator result into `[-1, 1]` for storage in a grid.
///
/// `NaN` becomes `0.0`; infinities saturate to the nearest bound.
///
/// # Example
/// ```
/// use wavexpr::util::num::clamp_sample;
///
/// assert_eq!(clamp_sample(3.0), 1.0);
/// assert_eq!(clamp_sample(-0.25), -0.25);
/// assert_eq!(clamp_sample(f64::NAN), 0.0);
/// assert_eq!(clamp_sample(f64::NEG_INFINITY), -1.0);
/// ```
#[must_use]
pub fn clamp_sample(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(SAMPLE_MIN, SAMPLE_MAX)
}

/// Returns `true` when two values differ by at most [`EQUALITY_TOLERANCE`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EQUALITY_TOLERANCE
}

/// Converts a boolean to the language's truth values `1.0` and `0.0`.
#[must_use]
pub const fn bool_to_f64(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Converts a grid index or count to `f64`.
///
/// Grid dimensions are far below `2^53`, so the conversion is exact for every
/// grid the engine can address; larger values saturate at
/// [`MAX_SAFE_U64_INT`].
///
/// # Example
/// ```
/// use wavexpr::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(2048), 2048.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    let value = u64::try_from(value).unwrap_or(u64::MAX).min(MAX_SAFE_U64_INT);
    value as f64
}

/// Position of `index` within `count` evenly spaced points on `[0, 1]`.
///
/// The first point is `0.0` and the last is `1.0`. A single point sits in the
/// middle at `0.5`.
///
/// # Example
/// ```
/// use wavexpr::util::num::unit_position;
///
/// assert_eq!(unit_position(0, 5), 0.0);
/// assert_eq!(unit_position(2, 5), 0.5);
/// assert_eq!(unit_position(4, 5), 1.0);
/// assert_eq!(unit_position(0, 1), 0.5);
/// ```
#[must_use]
pub fn unit_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.5;
    }
    usize_to_f64(index) / usize_to_f64(count - 1)
}
