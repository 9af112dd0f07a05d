use crate::{
    ast::{Expr, UnaryOperator},
    engine::evaluator::core::{EvalResult, FormulaContext},
    util::num::bool_to_f64,
};

impl FormulaContext {
    /// Evaluates a prefix operation.
    ///
    /// `!` yields `1.0` for an operand of exactly zero and `0.0` otherwise.
    pub(crate) fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;

        match op {
            UnaryOperator::Negate => Ok(-value),
            UnaryOperator::Not => Ok(bool_to_f64(value == 0.0)),
        }
    }
}
