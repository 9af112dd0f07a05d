use std::f64::consts::{E, PI};

use crate::{ast::Expr, error::EvaluationError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Inputs for evaluating a formula at one sample.
///
/// A fresh context is built for every sample and is never changed afterwards.
/// The names the language uses for each field are given below.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormulaContext {
    /// `x`: position within the frame on `[-1, 1]`.
    pub x:        f64,
    /// `w`: position within the frame on `[0, 1]`.
    pub w:        f64,
    /// `y`: position of the frame within the table on `[0, 1]`.
    pub y:        f64,
    /// `z`: position of the frame within the table on `[-1, 1]`.
    pub z:        f64,
    /// `in`: the sample's value before this pass.
    pub input:    f64,
    /// `sel`: the selected frame's value at this sample before this pass.
    pub selected: f64,
    /// `rand`: reproducible per-sample random value on `[-1, 1)`.
    pub random:   f64,
    /// `q`: optional integer parameter; reads as `0` when absent.
    pub q:        Option<i64>,
}

impl FormulaContext {
    /// Creates a context for a sample position; every other field is zero.
    #[must_use]
    pub fn new(x: f64, w: f64) -> Self {
        Self { x,
               w,
               ..Self::default() }
    }

    /// Sets `y` and `z`.
    #[must_use]
    pub const fn with_frame(mut self, y: f64, z: f64) -> Self {
        self.y = y;
        self.z = z;
        self
    }

    /// Sets `in`.
    #[must_use]
    pub const fn with_input(mut self, input: f64) -> Self {
        self.input = input;
        self
    }

    /// Sets `sel`.
    #[must_use]
    pub const fn with_selected(mut self, selected: f64) -> Self {
        self.selected = selected;
        self
    }

    /// Sets `rand`.
    #[must_use]
    pub const fn with_random(mut self, random: f64) -> Self {
        self.random = random;
        self
    }

    /// Sets `q`.
    #[must_use]
    pub const fn with_q(mut self, q: i64) -> Self {
        self.q = Some(q);
        self
    }

    /// Evaluates an expression against this context.
    ///
    /// Fails only for unknown names and wrong function arity; degenerate
    /// numeric results are returned as `0.0`.
    ///
    /// # Example
    /// ```
    /// use wavexpr::{compile, engine::evaluator::core::FormulaContext};
    ///
    /// let compiled = compile("in * 0.5 + w").unwrap();
    /// let context = FormulaContext::new(0.0, 0.5).with_input(1.0);
    ///
    /// assert_eq!(context.eval(compiled.ast()).unwrap(), 1.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::Call { name, arguments } => self.eval_call(name, arguments),
        }
    }

    /// Resolves a name.
    ///
    /// Constants are looked up before context fields.
    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        if let Some(value) = constant(name) {
            return Ok(value);
        }

        #[allow(clippy::cast_precision_loss)]
        let value = match name {
            "x" => self.x,
            "w" => self.w,
            "y" => self.y,
            "z" => self.z,
            "in" => self.input,
            "sel" => self.selected,
            "rand" => self.random,
            "q" => self.q.map_or(0.0, |q| q as f64),
            _ => {
                return Err(EvaluationError::UnknownVariable { name: name.to_string() });
            },
        };
        Ok(value)
    }
}

/// Looks up a named constant.
fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(PI),
        "e" => Some(E),
        _ => None,
    }
}
