use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a formula.
///
/// Literals carry no sign; `-3` is the unary minus applied to `3`. Single `&`,
/// `|` and `=` are not tokens on their own and are rejected by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Decimal literal such as `2`, `0.25`, `.5` or `3.`. No exponent form.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Case-sensitive name of a variable, constant or function.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Marks the end of the source. Appended once by [`tokenize`].
    EndOfInput,
}

/// Parses a decimal literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts a formula into tokens paired with their byte offsets.
///
/// The returned sequence always ends with [`Token::EndOfInput`] positioned at
/// `source.len()`.
///
/// # Errors
/// - [`ParseError::InvalidOperator`] for a lone `&`, `|` or `=`.
/// - [`ParseError::InvalidNumber`] for a literal that does not convert.
/// - [`ParseError::UnexpectedToken`] for any other unknown character.
///
/// # Example
/// ```
/// use wavexpr::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x <= .5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 0),
///                 (Token::LessEqual, 2),
///                 (Token::Number(0.5), 5),
///                 (Token::EndOfInput, 7)]);
///
/// assert!(tokenize("x = 1").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let text = lexer.slice().to_string();
                return Err(classify_invalid(text, position));
            },
        }
    }

    tokens.push((Token::EndOfInput, source.len()));
    Ok(tokens)
}

fn classify_invalid(text: String, position: usize) -> ParseError {
    match text.chars().next() {
        Some('&' | '|' | '=') => ParseError::InvalidOperator { text, position },
        Some(c) if c.is_ascii_digit() || c == '.' => ParseError::InvalidNumber { text, position },
        _ => ParseError::UnexpectedToken { token: text,
                                           position },
    }
}
