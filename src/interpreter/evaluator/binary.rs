use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation node: left operand first, then right.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<Value> {
        let left = self.eval_number(left)?;
        let right = self.eval_number(right)?;
        Ok(Self::eval_binary(op, left, right).into())
    }

    /// Applies a binary operator to two real numbers.
    ///
    /// IEEE-754 semantics throughout: division by zero gives an infinity or
    /// NaN, and so does a power without a real result.
    ///
    /// # Example
    /// ```
    /// use polycalc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// assert!(Context::eval_binary(BinaryOperator::Pow, -8.0, 0.5).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
