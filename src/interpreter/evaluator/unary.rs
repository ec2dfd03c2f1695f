use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation node.
    pub(crate) fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<Value> {
        let value = self.eval_number(expr)?;
        Ok(Self::eval_unary(op, value).into())
    }

    /// Applies a unary operator to a real number.
    ///
    /// Supported operators:
    /// - `Negate`: arithmetic negation.
    /// - `Sine`: sine of an angle in radians.
    ///
    /// # Example
    /// ```
    /// use polycalc::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Sine, 0.0), 0.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
            UnaryOperator::Sine => value.sin(),
        }
    }
}
