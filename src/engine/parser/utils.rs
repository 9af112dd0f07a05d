use std::iter::Peekable;

use crate::{
    engine::{lexer::Token, parser::core::ParseResult},
    error::ParseError,
};

/// Parses a comma-separated list of items up to and including `)`.
///
/// The opening `(` must already be consumed. An immediate `)` yields an empty
/// list; a trailing comma (`f(1,)`) is rejected because the item after it is
/// missing.
///
/// Grammar: `list := (item ("," item)*)? ")"`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, a token other than `,`
/// or `)` follows an item, or the input ends first.
pub(in crate::engine::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((Token::EndOfInput, position)) => {
                return Err(ParseError::ExpectedClosingParen { position: *position });
            },
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("Expected ',' or ')', found {tok:?}"),
                                                         position: *position, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
        }
    }
    Ok(items)
}

/// Consumes the `)` that closes a parenthesised group.
///
/// # Errors
/// Returns [`ParseError::ExpectedClosingParen`] if any other token is next.
pub(in crate::engine::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((_, position)) => Err(ParseError::ExpectedClosingParen { position: *position }),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}
