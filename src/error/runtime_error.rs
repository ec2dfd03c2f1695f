#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The messages are part of the language's observable output: a fault is
/// printed verbatim as the result of the statement that raised it.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// A polynomial reference resolved to something other than a polynomial.
    NotAPolynomial {
        /// The reference as written (a variable name).
        name: String,
    },
    /// A polynomial was used where a number is required.
    ExpectedNumber {
        /// Rendering of the offending value.
        found: String,
    },
}

impl RuntimeError {
    /// Returns `true` for the lookup failure the polynomial engine recovers
    /// from by building a symbolic term.
    ///
    /// ## Example
    /// ```
    /// use polycalc::error::RuntimeError;
    ///
    /// let err = RuntimeError::UnknownVariable { name: "a".into() };
    /// assert!(err.is_unknown_variable());
    /// ```
    #[must_use]
    pub const fn is_unknown_variable(&self) -> bool {
        matches!(self, Self::UnknownVariable { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "\"{name}\" is not defined"),
            Self::NotAPolynomial { name } => write!(f, "\"{name}\" is not a PolyExpr"),
            Self::ExpectedNumber { found } => write!(f, "\"{found}\" is not a number"),
        }
    }
}

impl std::error::Error for RuntimeError {}
