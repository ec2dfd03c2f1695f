use std::collections::HashMap;

use log::debug;

use crate::{
    ast::{AssignedValue, Expr, Statement},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name of the variable every fresh session starts with.
pub const SEED_NAME: &str = "test_var";
/// Value bound to [`SEED_NAME`] in a fresh session.
pub const SEED_VALUE: f64 = 22.0;

/// Stores the runtime evaluation context.
///
/// Holds the variable bindings of one session. Only numbers and polynomials
/// are ever bound; names are created by assignment and never implicitly.
///
/// ## Usage
///
/// `Context` is created once and reused for every line of a session. Expression
/// evaluation only reads it; [`Context::execute`] writes to it when it runs an
/// assignment.
#[derive(Debug, Clone)]
pub struct Context {
    /// A mapping from variable names to their bound values.
    pub variables: HashMap<String, Value>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a session context with `test_var` bound to `22`.
    ///
    /// ## Example
    /// ```
    /// use polycalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let ctx = Context::new();
    /// assert_eq!(ctx.get_variable("test_var"), Some(&Value::Number(22.0)));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut ctx = Self::empty();
        ctx.set_variable(SEED_NAME, Value::Number(SEED_VALUE));
        ctx
    }

    /// Creates a context without any bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right and the first error wins.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// A number for every variant except a variable bound to a polynomial,
    /// which yields a copy of that polynomial.
    ///
    /// ## Example
    /// ```
    /// use polycalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let ctx = Context::new();
    /// let expr = Expr::binary(Expr::Variable("test_var".into()),
    ///                         BinaryOperator::Sub,
    ///                         Expr::Literal(2.0));
    /// assert_eq!(ctx.eval(&expr).unwrap(), Value::Number(20.0));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(Value::Number(*value)),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::Constant(constant) => Ok(Value::Number(constant.value())),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr),
            Expr::PolyApply { poly, arg } => self.eval_poly_apply(poly, arg),
        }
    }

    /// Executes one statement and returns what the interpreter prints for it.
    ///
    /// Runtime errors never escape: they are returned as [`Value::Fault`].
    /// An assignment stores its value only when evaluation succeeds and
    /// reports `name = <value>`.
    ///
    /// ## Example
    /// ```
    /// use polycalc::{
    ///     ast::{AssignedValue, Expr, Statement},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let assign = Statement::Assignment { name:  "z".into(),
    ///                                      value: AssignedValue::Expression(Expr::Literal(3.0)), };
    /// assert_eq!(ctx.execute(&assign).to_string(), "z = 3.0");
    /// assert_eq!(ctx.get_variable("z"), Some(&Value::Number(3.0)));
    ///
    /// let missing = Statement::Expression(Expr::Variable("w".into()));
    /// assert!(ctx.execute(&missing).is_fault());
    /// ```
    pub fn execute(&mut self, statement: &Statement) -> Value {
        let value = self.eval_statement(statement).unwrap_or_else(Value::from);
        debug!("{statement} => {value}");
        value
    }

    /// Evaluates a statement, propagating runtime errors to the caller.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while evaluating the statement.
    /// A failed assignment leaves the context unchanged.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Expression(expr) => self.eval(expr),
            Statement::Polynomial(poly) => self.eval_poly_expr(poly).map(Value::from),
            Statement::Assignment { name, value } => {
                let value = match value {
                    AssignedValue::Expression(expr) => self.eval(expr)?,
                    AssignedValue::Polynomial(poly) => self.eval_poly_expr(poly)?.into(),
                };
                let report = format!("{name} = {value}");
                self.set_variable(name, value);
                Ok(Value::Assignment(report))
            },
        }
    }
}
