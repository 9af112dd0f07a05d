//! Library functions over one or more arguments.
//!
//! An empty argument list yields `0.0`.

#[must_use]
pub fn min(args: &[f64]) -> f64 {
    args.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

#[must_use]
pub fn max(args: &[f64]) -> f64 {
    args.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

#[must_use]
pub fn sum(args: &[f64]) -> f64 {
    args.iter().sum()
}

/// Arithmetic mean of the arguments.
///
/// # Example
/// ```
/// use wavexpr::engine::evaluator::function::variadic::avg;
///
/// assert_eq!(avg(&[1.0, 2.0, 6.0]), 3.0);
/// assert_eq!(avg(&[]), 0.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn avg(args: &[f64]) -> f64 {
    if args.is_empty() {
        return 0.0;
    }
    sum(args) / args.len() as f64
}

