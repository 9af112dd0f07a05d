/// Core evaluation logic and the per-sample context.
///
/// Defines [`FormulaContext`](core::FormulaContext), resolves names and
/// dispatches on the expression variant.
pub mod core;

/// Binary operator evaluation logic.
///
/// Arithmetic with the zero-on-degenerate rule, tolerant comparisons and
/// short-circuiting `&&` / `||`.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Function evaluation.
///
/// Holds the function library and checks the arity of every call.
pub mod function;
