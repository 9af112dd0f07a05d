use crate::ast::Expr;

/// Which frame-relative variables a formula mentions.
///
/// A pure syntactic fact: it is computed once from the tree and does not
/// depend on any evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariableUsage {
    /// The tree references `y` somewhere.
    pub uses_y: bool,
    /// The tree references `z` somewhere.
    pub uses_z: bool,
}

impl VariableUsage {
    /// Whether the formula must be applied to every frame.
    #[must_use]
    pub const fn uses_frame_variables(self) -> bool {
        self.uses_y || self.uses_z
    }

    const fn union(self, other: Self) -> Self {
        Self { uses_y: self.uses_y || other.uses_y,
               uses_z: self.uses_z || other.uses_z, }
    }
}

/// Walks the tree once and reports whether `y` or `z` appear in it.
///
/// Function names are not variables: a call named `y(...)` does not count.
///
/// # Example
/// ```
/// use wavexpr::engine::{analyzer::analyze, lexer::tokenize, parser::core::parse};
///
/// let ast = parse(&tokenize("sin(x * (1 + max(z, 0)))").unwrap()).unwrap();
/// let usage = analyze(&ast);
/// assert!(!usage.uses_y);
/// assert!(usage.uses_z);
/// ```
#[must_use]
pub fn analyze(expr: &Expr) -> VariableUsage {
    match expr {
        Expr::Number(_) => VariableUsage::default(),
        Expr::Variable(name) => VariableUsage { uses_y: name == "y",
                                                uses_z: name == "z", },
        Expr::UnaryOp { expr, .. } => analyze(expr),
        Expr::BinaryOp { left, right, .. } => analyze(left).union(analyze(right)),
        Expr::Call { arguments, .. } => {
            arguments.iter()
                     .map(analyze)
                     .fold(VariableUsage::default(), VariableUsage::union)
        },
    }
}
