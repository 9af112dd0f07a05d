//! # wavexpr
//!
//! wavexpr is a small formula language for generating and transforming
//! wavetable frames. A formula such as
//! `sin(2*pi*x) * (1-y) + sign(sin(2*pi*x)) * y` is compiled once and then
//! evaluated for every sample of one frame, or of every frame, of a
//! wavetable.
//!
//! ```
//! use wavexpr::{apply_multi_frame, compile, uses_frame_variables};
//!
//! let compiled = compile("sin(2*pi*x) * (1-y) + sign(sin(2*pi*x)) * y").unwrap();
//! assert!(uses_frame_variables(&compiled));
//!
//! let mut grid = vec![vec![0.0f32; 256]; 8];
//! apply_multi_frame(&compiled, &mut grid, 0, 256).unwrap();
//! assert!(grid.iter().flatten().all(|s| (-1.0..=1.0).contains(s)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum and the operator enums. The tree is
/// built by the parser, inspected by the analyzer and walked by the
/// evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - `ParseError` for malformed formula text, with the byte offset of the
///   problem.
/// - `EvaluationError` for unknown names, wrong arity and invalid grid
///   arguments.
pub mod error;
/// The formula pipeline: lexer, parser, analyzer, evaluator and grid
/// application.
pub mod engine;
/// Numeric helpers shared across the engine.
pub mod util;

pub use crate::engine::{
    compiled::CompiledExpression,
    evaluator::core::FormulaContext,
    grid::{
        multi_frame::{apply_multi_frame, apply_multi_frame_cancellable},
        single_frame::apply_single_frame,
    },
};
use crate::error::{EvaluationError, ParseError};

/// Compiles a formula.
///
/// # Errors
/// Returns a [`ParseError`] if the text is not a valid formula. A failed
/// compile has no effect on previously compiled expressions.
///
/// # Examples
/// ```
/// use wavexpr::compile;
///
/// assert!(compile("2 + 3 * 4").is_ok());
/// assert!(compile("2 + + 3").is_err());
/// assert!(compile("x = 1").is_err());
/// ```
pub fn compile(source: &str) -> Result<CompiledExpression, ParseError> {
    CompiledExpression::compile(source)
}

/// Evaluates a compiled formula for one sample.
///
/// # Errors
/// Returns an [`EvaluationError`] for unknown variables, unknown functions and
/// wrong function arity.
///
/// # Examples
/// ```
/// use wavexpr::{FormulaContext, compile, evaluate};
///
/// let context = FormulaContext::default();
/// assert_eq!(evaluate(&compile("2 + 3 * 4").unwrap(), &context).unwrap(), 14.0);
/// assert_eq!(evaluate(&compile("1 / 0").unwrap(), &context).unwrap(), 0.0);
/// assert!(evaluate(&compile("foo + 1").unwrap(), &context).is_err());
/// ```
pub fn evaluate(compiled: &CompiledExpression,
                context: &FormulaContext)
                -> Result<f64, EvaluationError> {
    context.eval(compiled.ast())
}

/// `true` when the formula references `y` or `z` and must be applied with
/// [`apply_multi_frame`]; otherwise [`apply_single_frame`] is used.
///
/// # Examples
/// ```
/// use wavexpr::{compile, uses_frame_variables};
///
/// assert!(!uses_frame_variables(&compile("sin(2*pi*x)").unwrap()));
/// assert!(uses_frame_variables(&compile("x*(y+z)").unwrap()));
/// ```
#[must_use]
pub const fn uses_frame_variables(compiled: &CompiledExpression) -> bool {
    compiled.uses_frame_variables()
}
