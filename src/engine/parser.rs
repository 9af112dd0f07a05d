/// Parser entry points.
///
/// Turns a token sequence into a single expression tree and rejects trailing
/// tokens.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over the binary operator table.
pub mod binary;

/// Primary and prefix-operator parsing.
///
/// Handles literals, names, function calls, parenthesised groups and the
/// prefix operators `-` and `!`.
pub mod unary;

/// Shared parsing helpers such as comma-separated argument lists.
pub mod utils;
