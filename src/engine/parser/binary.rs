use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    engine::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parsed},
            unary::parse_primary,
        },
    },
};

/// Parses a chain of binary operators by precedence climbing.
///
/// Starting from one primary, operators whose precedence is at least
/// `min_precedence` are folded into the left operand. The right operand is
/// parsed with a threshold of `precedence + 1` for left-associative operators
/// and `precedence` for `^`, which makes `^` group to the right.
///
/// Precedence, lowest to highest: `||`, `&&`, `==` `!=`, `<` `>` `<=` `>=`,
/// `+` `-`, `*` `/`, `^`.
///
/// # Parameters
/// - `tokens`: Token stream with byte offsets.
/// - `min_precedence`: Weakest operator this call may consume.
/// - `depth`: How many nested calls led here.
///
/// # Returns
/// The folded expression tree and its height.
///
/// # Errors
/// Returns `NestingTooDeep` when the recursion or the folded tree exceeds
/// [`MAX_NESTING_DEPTH`](crate::engine::parser::core::MAX_NESTING_DEPTH).
pub(crate) fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                                  min_precedence: u8,
                                  depth: usize)
                                  -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_primary(tokens, depth)?;

    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && op.precedence() >= min_precedence
    {
        let position = *position;
        tokens.next();

        let next_min = if op.is_right_associative() {
            op.precedence()
        } else {
            op.precedence() + 1
        };
        let right = parse_binary(tokens, next_min, depth + 1)?;
        let child_height = left.height.max(right.height);
        left = Parsed::node(Expr::binary(left.expr, op, right.expr), child_height, position)?;
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that cannot appear between two operands.
///
/// # Example
/// ```
/// use wavexpr::{
///     ast::BinaryOperator,
///     engine::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}
