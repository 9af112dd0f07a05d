/// Evaluation errors.
///
/// Contains the error type raised while evaluating a compiled formula or
/// applying it to a sample grid: unknown names, wrong function arity and
/// invalid grid arguments.
pub mod evaluation_error;
/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of a
/// formula, such as stray characters, unbalanced parentheses or trailing
/// tokens.
pub mod parse_error;

pub use evaluation_error::EvaluationError;
pub use parse_error::ParseError;
