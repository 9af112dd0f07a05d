use crate::util::num::finite_or_zero;

/// Generates a single-argument function from an `f64` method.
///
/// The `guarded` form passes the result through
/// [`finite_or_zero`](crate::util::num::finite_or_zero); the plain form is for
/// functions that are finite for every finite input.
///
/// # Example
/// ```
/// use wavexpr::engine::evaluator::function::builtin::{acos, sin};
///
/// assert_eq!(sin(0.0), 0.0);
/// assert_eq!(acos(2.0), 0.0);
/// ```
macro_rules! real_builtin {
    (guarded $fname:ident, $real_fn:ident) => {
        #[must_use]
        pub fn $fname(value: f64) -> f64 {
            finite_or_zero(value.$real_fn())
        }
    };
    ($fname:ident, $real_fn:ident) => {
        #[must_use]
        pub fn $fname(value: f64) -> f64 {
            value.$real_fn()
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(atan, atan);
real_builtin!(tanh, tanh);
real_builtin!(abs, abs);
real_builtin!(floor, floor);
real_builtin!(ceil, ceil);
real_builtin!(guarded tan, tan);
real_builtin!(guarded asin, asin);
real_builtin!(guarded acos, acos);
real_builtin!(guarded sinh, sinh);
real_builtin!(guarded cosh, cosh);
real_builtin!(guarded asinh, asinh);
real_builtin!(guarded acosh, acosh);
real_builtin!(guarded atanh, atanh);
real_builtin!(guarded exp, exp);

/// Generates a function defined only for strictly positive arguments.
///
/// Non-positive arguments yield `0.0`.
macro_rules! positive_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[must_use]
        pub fn $fname(value: f64) -> f64 {
            if value > 0.0 {
                finite_or_zero(value.$real_fn())
            } else {
                0.0
            }
        }
    };
}

positive_builtin!(ln, ln);
positive_builtin!(log2, log2);
positive_builtin!(log10, log10);
positive_builtin!(sqrt, sqrt);

/// Returns the numeric sign of a value: `-1.0`, `0.0` or `1.0`.
///
/// Unlike [`f64::signum`], zero maps to zero.
///
/// # Example
/// ```
/// use wavexpr::engine::evaluator::function::builtin::sign;
///
/// assert_eq!(sign(-0.3), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(7.0), 1.0);
/// ```
#[must_use]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Rounds to the nearest integer, ties to even.
///
/// # Example
/// ```
/// use wavexpr::engine::evaluator::function::builtin::rint;
///
/// assert_eq!(rint(2.5), 2.0);
/// assert_eq!(rint(3.5), 4.0);
/// assert_eq!(rint(-1.2), -1.0);
/// ```
#[must_use]
pub fn rint(value: f64) -> f64 {
    value.round_ties_even()
}
