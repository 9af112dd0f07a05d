use crate::{
    ast::Expr,
    engine::{
        analyzer::{VariableUsage, analyze},
        lexer::tokenize,
        parser::core::parse,
    },
    error::ParseError,
};

/// A parsed formula together with its variable-usage flags.
///
/// Immutable once built. It can be cached by the caller, evaluated any number
/// of times and shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    source: String,
    ast:    Expr,
    usage:  VariableUsage,
}

impl CompiledExpression {
    /// Tokenizes, parses and analyzes `source`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for any lexical or syntactic problem.
    ///
    /// # Example
    /// ```
    /// use wavexpr::engine::compiled::CompiledExpression;
    ///
    /// let compiled = CompiledExpression::compile("sin(2*pi*x) * (1-y)").unwrap();
    /// assert!(compiled.uses_y());
    /// assert!(!compiled.uses_z());
    /// assert_eq!(compiled.source(), "sin(2*pi*x) * (1-y)");
    /// ```
    pub fn compile(source: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(source)?;
        let ast = parse(&tokens)?;
        let usage = analyze(&ast);

        tracing::debug!(source,
                        uses_y = usage.uses_y,
                        uses_z = usage.uses_z,
                        "compiled formula");

        Ok(Self { source: source.to_string(),
                  ast,
                  usage })
    }

    /// The text the expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed tree.
    #[must_use]
    pub const fn ast(&self) -> &Expr {
        &self.ast
    }

    /// `true` when the formula reads the frame position `y`.
    #[must_use]
    pub const fn uses_y(&self) -> bool {
        self.usage.uses_y
    }

    /// `true` when the formula reads the bipolar frame position `z`.
    #[must_use]
    pub const fn uses_z(&self) -> bool {
        self.usage.uses_z
    }

    /// `true` when the formula references `y` or `z` and therefore has to be
    /// applied in multi-frame mode.
    #[must_use]
    pub const fn uses_frame_variables(&self) -> bool {
        self.usage.uses_frame_variables()
    }
}

impl std::str::FromStr for CompiledExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}
