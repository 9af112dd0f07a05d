use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    engine::{
        lexer::Token,
        parser::{
            binary::parse_binary,
            core::{ParseResult, Parsed, check_depth},
            utils::{expect_closing_paren, parse_comma_separated},
        },
    },
    error::ParseError,
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions are the operands of binary operators:
/// - numeric literals
/// - bare names (`x`, `pi`, `rand`)
/// - function calls (`name(args)`)
/// - parenthesised expressions
/// - prefix `-` and `!`
///
/// A prefix operator applies to the next primary only, so it binds tighter
/// than every binary operator: `-2^2` is `(-2)^2`.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENT
///              | IDENT "(" arguments ")"
///              | "(" expression ")"
///              | ("-" | "!") primary
/// ```
/// # Errors
/// Returns a `ParseError` when the stream ends, a token that cannot start
/// an operand (such as a binary operator or `)`) is found, or the operand is
/// nested deeper than
/// [`MAX_NESTING_DEPTH`](crate::engine::parser::core::MAX_NESTING_DEPTH).
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: 0 });
    };
    check_depth(depth, *position)?;

    match token {
        Token::Number(n) => Ok(Parsed::leaf(Expr::Number(*n))),
        Token::Identifier(name) => parse_identifier_or_call(tokens, name, *position, depth),
        Token::LParen => {
            let inner = parse_binary(tokens, 0, depth + 1)?;
            expect_closing_paren(tokens)?;
            Ok(inner)
        },
        Token::Minus => parse_prefix(tokens, UnaryOperator::Negate, *position, depth),
        Token::Bang => parse_prefix(tokens, UnaryOperator::Not, *position, depth),
        Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput { position: *position }),
        tok => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                 position: *position, }),
    }
}

fn parse_prefix<'a, I>(tokens: &mut Peekable<I>,
                       op: UnaryOperator,
                       position: usize,
                       depth: usize)
                       -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let operand = parse_primary(tokens, depth + 1)?;
    Parsed::node(Expr::unary(op, operand.expr), operand.height, position)
}

/// Parses a name, which is a function call when directly followed by `(`.
///
/// An empty argument list is accepted here; arity is checked when the call is
/// evaluated.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   position: usize,
                                   depth: usize)
                                   -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let parsed = parse_comma_separated(tokens, |tokens| parse_binary(tokens, 0, depth + 1))?;
        let child_height = parsed.iter().map(|arg| arg.height).max().unwrap_or(0);
        let arguments = parsed.into_iter().map(|arg| arg.expr).collect();
        return Parsed::node(Expr::Call { name: name.to_string(),
                                         arguments },
                            child_height,
                            position);
    }

    Ok(Parsed::leaf(Expr::Variable(name.to_string())))
}
