/// An abstract syntax tree (AST) node representing a formula.
///
/// Every parse produces a fresh tree in which each node exclusively owns its
/// children. Trees are never mutated after the parser returns them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `2` or `0.5`.
    Number(f64),
    /// Reference to a constant (`pi`, `e`) or a context variable (`x`, `in`,
    /// ...).
    Variable(String),
    /// A prefix operation (`-x`, `!x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// An infix operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Creates a binary node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Creates a unary node around an operand.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }
}

/// Represents a binary operator.
///
/// Operators carry a fixed precedence. Only `^` is right-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical or (`||`)
    Or,
    /// Logical and (`&&`)
    And,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Binding strength of the operator; higher binds tighter.
    ///
    /// ```
    /// use wavexpr::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert!(BinaryOperator::Or.precedence() < BinaryOperator::And.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal | Self::NotEqual => 3,
            Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div => 6,
            Self::Pow => 7,
        }
    }

    /// Whether `a op b op c` groups as `a op (b op c)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

/// Renders the tree fully parenthesised, so the grouping chosen by the parser
/// is visible.
///
/// ```
/// use wavexpr::compile;
///
/// let compiled = compile("-2^2 + 3*x").unwrap();
/// assert_eq!(compiled.ast().to_string(), "(((-2) ^ 2) + (3 * x))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}
