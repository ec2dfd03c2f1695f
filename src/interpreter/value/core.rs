use std::fmt;

use crate::{
    ast::Polynomial,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::format_real,
};

/// Represents a runtime value in the interpreter.
///
/// Only [`Value::Number`] and [`Value::Polynomial`] are ever bound to a name;
/// the other two variants exist so that executing a statement always yields
/// something printable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A polynomial whose coefficients may still be symbolic.
    Polynomial(Polynomial),
    /// The report of a successful assignment, e.g. `z = 3.0`.
    Assignment(String),
    /// A runtime error recovered at the statement boundary.
    Fault(RuntimeError),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Polynomial> for Value {
    fn from(p: Polynomial) -> Self {
        Self::Polynomial(p)
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Fault(e)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::ExpectedNumber)`: Otherwise, naming the rendered
    ///   value.
    ///
    /// # Example
    /// ```
    /// use polycalc::{ast::Polynomial, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Number(10.0).as_real().unwrap(), 10.0);
    ///
    /// let p = Value::Polynomial(Polynomial::from_reals(&[1.0, 2.0]));
    /// assert_eq!(p.as_real().unwrap_err().to_string(),
    ///            "\"1.0 + 2.0*x\" is not a number");
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { found: self.to_string() }),
        }
    }

    /// Returns the fault carried by this value, if any.
    #[must_use]
    pub const fn fault(&self) -> Option<&RuntimeError> {
        match self {
            Self::Fault(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if the value is a recovered runtime error.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_real(*n)),
            Self::Polynomial(p) => write!(f, "{p}"),
            Self::Assignment(report) => write!(f, "{report}"),
            Self::Fault(e) => write!(f, "{e}"),
        }
    }
}
