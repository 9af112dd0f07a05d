/// Variable-usage analysis.
///
/// Walks a parsed tree once to find out whether it references the
/// frame-relative variables `y` and `z`, which decides between single-frame
/// and multi-frame application.
pub mod analyzer;
/// Compiled formulas.
///
/// Bundles the parsed tree with its variable-usage flags so callers can cache
/// one value per source string and reuse it for every evaluation.
pub mod compiled;
/// The evaluator computes one sample from a tree and a context.
///
/// It is stateless: the same tree and context always give the same result.
/// Degenerate numeric results are normalised to zero instead of being
/// reported as errors.
///
/// # Responsibilities
/// - Resolves constants and context variables.
/// - Evaluates operators, including short-circuiting `&&` and `||`.
/// - Dispatches calls into the function library and checks their arity.
pub mod evaluator;
/// Applies a compiled formula to a rectangular grid of samples.
///
/// # Responsibilities
/// - Validates the grid, selected frame and sample count.
/// - Builds the per-sample context, including the reproducible `rand` table.
/// - Clamps every written sample to `[-1, 1]`.
pub mod grid;
/// The lexer turns formula text into tokens.
///
/// # Responsibilities
/// - Recognises decimal literals, names, operators and punctuation.
/// - Skips whitespace.
/// - Rejects unknown characters and half operators (`&`, `|`, `=`).
pub mod lexer;
/// The parser builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Implements precedence climbing for binary operators.
/// - Parses literals, names, calls, groups and prefix operators.
/// - Rejects malformed input and trailing tokens with a position.
pub mod parser;
