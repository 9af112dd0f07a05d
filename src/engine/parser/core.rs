use std::iter::Peekable;

use crate::{
    ast::Expr,
    engine::{lexer::Token, parser::binary::parse_binary},
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting a formula may have.
///
/// Bounds both the parser's recursion and the height of the tree it builds,
/// which in turn bounds every recursive walk over a compiled formula.
pub const MAX_NESTING_DEPTH: usize = 256;

/// An expression together with the height of its tree.
pub(crate) struct Parsed {
    pub(crate) expr:   Expr,
    pub(crate) height: usize,
}

impl Parsed {
    pub(crate) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    /// Wraps `expr`, whose tallest child has height `child_height`.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] at `position` when the new tree
    /// would be taller than [`MAX_NESTING_DEPTH`].
    pub(crate) fn node(expr: Expr, child_height: usize, position: usize) -> ParseResult<Self> {
        let height = child_height + 1;
        if height > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position });
        }
        Ok(Self { expr, height })
    }
}

/// Fails once the parser has descended past [`MAX_NESTING_DEPTH`].
pub(in crate::engine::parser) const fn check_depth(depth: usize,
                                                   position: usize)
                                                   -> ParseResult<()> {
    if depth > MAX_NESTING_DEPTH {
        Err(ParseError::NestingTooDeep { position })
    } else {
        Ok(())
    }
}

/// Parses a complete token sequence into one expression.
///
/// The sequence must end with [`Token::EndOfInput`], as produced by
/// [`tokenize`](crate::engine::lexer::tokenize). Any token left over after a
/// complete expression is an error.
///
/// # Errors
/// Returns [`ParseError::UnexpectedTrailingTokens`] for leftovers,
/// [`ParseError::NestingTooDeep`] for formulas nested deeper than
/// [`MAX_NESTING_DEPTH`], and propagates every structural error from the
/// expression grammar.
///
/// # Example
/// ```
/// use wavexpr::engine::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("1 + 2 3").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        Some((Token::EndOfInput, _)) => Ok(expr),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    format!("{tok:?}"),
                                                       position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a full expression.
///
/// Starts precedence climbing at the lowest threshold so every binary
/// operator is accepted.
///
/// Grammar: `expression := binary(0)`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_binary(tokens, 0, 0).map(|parsed| parsed.expr)
}
