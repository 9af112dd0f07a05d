use crate::{
    ast::{BinaryOperator, Expr},
    engine::evaluator::core::{EvalResult, FormulaContext},
    util::num::{approx_eq, bool_to_f64, finite_or_zero},
};

impl FormulaContext {
    /// Evaluates a binary operation.
    ///
    /// `&&` and `||` evaluate their right operand only when the left one does
    /// not decide the result. Every other operator evaluates both sides, left
    /// first.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        match op {
            BinaryOperator::And => {
                if self.eval(left)? == 0.0 {
                    return Ok(0.0);
                }
                Ok(bool_to_f64(self.eval(right)? != 0.0))
            },
            BinaryOperator::Or => {
                if self.eval(left)? != 0.0 {
                    return Ok(1.0);
                }
                Ok(bool_to_f64(self.eval(right)? != 0.0))
            },
            _ => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                Ok(eval_arithmetic(op, l, r))
            },
        }
    }
}

/// Applies a non-logical binary operator to two evaluated operands.
///
/// - Division by zero yields `0.0`.
/// - Division and `^` results that are `NaN` or infinite yield `0.0`.
/// - `==` and `!=` compare with an absolute tolerance of `1e-6`.
/// - Comparisons yield `1.0` or `0.0`.
///
/// # Example
/// ```
/// use wavexpr::{ast::BinaryOperator, engine::evaluator::binary::eval_arithmetic};
///
/// assert_eq!(eval_arithmetic(BinaryOperator::Div, 1.0, 0.0), 0.0);
/// assert_eq!(eval_arithmetic(BinaryOperator::Pow, -8.0, 1.0 / 3.0), 0.0);
/// assert_eq!(eval_arithmetic(BinaryOperator::Equal, 0.1 + 0.2, 0.3), 1.0);
/// ```
#[must_use]
pub fn eval_arithmetic(op: BinaryOperator, l: f64, r: f64) -> f64 {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow, Sub,
    };

    match op {
        Add => l + r,
        Sub => l - r,
        Mul => l * r,
        Div => {
            if r == 0.0 {
                0.0
            } else {
                finite_or_zero(l / r)
            }
        },
        Pow => finite_or_zero(l.powf(r)),
        Less => bool_to_f64(l < r),
        Greater => bool_to_f64(l > r),
        LessEqual => bool_to_f64(l <= r),
        GreaterEqual => bool_to_f64(l >= r),
        Equal => bool_to_f64(approx_eq(l, r)),
        NotEqual => bool_to_f64(!approx_eq(l, r)),
        And => bool_to_f64(l != 0.0 && r != 0.0),
        Or => bool_to_f64(l != 0.0 || r != 0.0),
    }
}
