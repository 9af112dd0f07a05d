use crate::{
    ast::Expr,
    engine::evaluator::{
        core::{EvalResult, FormulaContext},
        function::{builtin, variadic},
    },
    error::EvaluationError,
};

use self::Handler::{Unary, Variadic};

/// How a library function receives its evaluated arguments.
///
/// The variant also fixes the arity: `Unary` takes exactly one argument and
/// `Variadic` takes at least one.
#[derive(Clone, Copy)]
enum Handler {
    Unary(fn(f64) -> f64),
    Variadic(fn(&[f64]) -> f64),
}

/// Defines library functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of function names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $handler:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:    &'static str,
            handler: Handler,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, handler: $handler },
            )*
        ];
        /// Names of every function the language knows.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => Unary(builtin::sin),
    "cos"   => Unary(builtin::cos),
    "tan"   => Unary(builtin::tan),
    "asin"  => Unary(builtin::asin),
    "acos"  => Unary(builtin::acos),
    "atan"  => Unary(builtin::atan),
    "sinh"  => Unary(builtin::sinh),
    "cosh"  => Unary(builtin::cosh),
    "tanh"  => Unary(builtin::tanh),
    "asinh" => Unary(builtin::asinh),
    "acosh" => Unary(builtin::acosh),
    "atanh" => Unary(builtin::atanh),
    "exp"   => Unary(builtin::exp),
    "ln"    => Unary(builtin::ln),
    "log"   => Unary(builtin::ln),
    "log2"  => Unary(builtin::log2),
    "log10" => Unary(builtin::log10),
    "sqrt"  => Unary(builtin::sqrt),
    "abs"   => Unary(builtin::abs),
    "sign"  => Unary(builtin::sign),
    "rint"  => Unary(builtin::rint),
    "floor" => Unary(builtin::floor),
    "ceil"  => Unary(builtin::ceil),
    "min"   => Variadic(variadic::min),
    "max"   => Variadic(variadic::max),
    "sum"   => Variadic(variadic::sum),
    "avg"   => Variadic(variadic::avg),
}

impl Handler {
    /// Calls the handler, or returns `None` when the argument count does not
    /// fit.
    fn call(self, args: &[f64]) -> Option<f64> {
        match (self, args) {
            (Unary(func), [value]) => Some(func(*value)),
            (Variadic(func), args) if !args.is_empty() => Some(func(args)),
            _ => None,
        }
    }

    fn describe_arity(self) -> &'static str {
        match self {
            Unary(_) => "1",
            Variadic(_) => "at least 1",
        }
    }
}

impl FormulaContext {
    /// Evaluates a function call.
    ///
    /// All arguments are evaluated, left to right, before the function is
    /// looked up and its arity checked.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Any error raised while evaluating an argument.
    pub(crate) fn eval_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg))
                                .collect::<EvalResult<Vec<_>>>()?;

        let builtin =
            BUILTIN_TABLE.iter()
                         .find(|b| b.name == name)
                         .ok_or_else(|| EvaluationError::UnknownFunction { name: name.to_string() })?;

        builtin.handler
               .call(&arg_vals)
               .ok_or_else(|| EvaluationError::ArgumentCountMismatch {
                   name:     name.to_string(),
                   expected: builtin.handler.describe_arity().to_string(),
                   found:    arg_vals.len(),
               })
    }
}

/// Returns `true` if `name` is a library function.
///
/// # Example
/// ```
/// use wavexpr::engine::evaluator::function::core::is_builtin_function;
///
/// assert!(is_builtin_function("avg"));
/// assert!(!is_builtin_function("pi"));
/// ```
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}
