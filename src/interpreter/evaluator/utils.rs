use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a subexpression and ensures that it produces a number.
    ///
    /// Arithmetic, `Sin`, `Apply` and the polynomial algebra all need the
    /// same sequence: evaluate, then reject polynomials. This helper keeps
    /// that in one place.
    ///
    /// # Errors
    /// Propagates any error of the subexpression and returns
    /// `RuntimeError::ExpectedNumber` when it yields a polynomial.
    ///
    /// # Example
    /// ```
    /// use polycalc::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let ctx = Context::new();
    /// assert_eq!(ctx.eval_number(&Expr::Variable("test_var".into())).unwrap(), 22.0);
    /// assert!(ctx.eval_number(&Expr::Variable("nope".into())).is_err());
    /// ```
    pub fn eval_number(&self, expr: &Expr) -> EvalResult<f64> {
        self.eval(expr)?.as_real()
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` when the name is not bound.
    pub fn lookup(&self, name: &str) -> EvalResult<&Value> {
        self.get_variable(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Evaluates a variable reference to a copy of its bound value.
    pub(crate) fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.lookup(name).cloned()
    }
}
