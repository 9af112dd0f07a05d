/// Single-argument library functions.
///
/// Trigonometric, hyperbolic, logarithmic and rounding functions, each
/// returning `0.0` where its result would be undefined.
pub mod builtin;
/// The function table, arity checking and call dispatch.
pub mod core;
/// Functions taking one or more arguments: `min`, `max`, `sum` and `avg`.
pub mod variadic;
