use crate::engine::parser::core::MAX_NESTING_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or parsing a formula.
///
/// Every variant carries the byte offset into the source at which the problem
/// was detected.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of input while an operand or `)` was still required.
    UnexpectedEndOfInput {
        /// Byte offset of the end of the source.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset where the `)` was expected.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// A character that only forms half of an operator (`&`, `|`, `=`), or
    /// a character the language does not know at all.
    InvalidOperator {
        /// The offending source text.
        text:     String,
        /// Byte offset of the text in the source.
        position: usize,
    },
    /// The formula nests parentheses, prefix operators, calls or operator
    /// chains deeper than the parser allows.
    NestingTooDeep {
        /// Byte offset of the token at which the limit was exceeded.
        position: usize,
    },
    /// A numeric literal that could not be converted to a number.
    InvalidNumber {
        /// The literal text.
        text:     String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source at which the error was detected.
    ///
    /// ```
    /// use wavexpr::compile;
    ///
    /// let err = compile("1 + )").unwrap_err();
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::InvalidOperator { position, .. }
            | Self::NestingTooDeep { position }
            | Self::InvalidNumber { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at position {position}: Extra tokens after expression: {token}"),
            Self::InvalidOperator { text, position } => write!(f,
                                                               "Error at position {position}: Invalid operator '{text}'. Use '&&', '||' or '=='."),
            Self::NestingTooDeep { position } => write!(f,
                                                        "Error at position {position}: Formula is nested more than {MAX_NESTING_DEPTH} levels deep."),
            Self::InvalidNumber { text, position } => {
                write!(f, "Error at position {position}: Invalid number '{text}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
