use std::fmt;

use crate::util::num::format_real;

/// An abstract syntax tree (AST) node representing a scalar expression.
///
/// `Expr` covers every construct of the `expression` grammar rule: numeric
/// literals, variables, the two named constants, arithmetic, negation, sine
/// and the evaluation of a polynomial at a point. Coefficients of a
/// [`Polynomial`] are `Expr` values too, which is what lets a polynomial hold
/// unresolved, symbolic terms.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A fully resolved numeric leaf.
    Literal(f64),
    /// Reference to a variable by name, resolved against the context.
    Variable(String),
    /// One of the named constants `Pi` and `E`.
    Constant(Constant),
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary operation (negation or sine).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// `poly.Apply(arg)`: evaluates a polynomial at a point.
    PolyApply {
        /// The polynomial, inline or by name.
        poly: PolyRef,
        /// The point the polynomial is evaluated at.
        arg:  Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node.
    ///
    /// ## Example
    /// ```
    /// use polycalc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::Literal(1.0), BinaryOperator::Add, Expr::Literal(2.0));
    /// assert_eq!(sum.to_string(), "(1.0 + 2.0)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }
}

/// The named constants of the language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Constant {
    /// `Pi`, the ratio of a circle's circumference to its diameter.
    Pi,
    /// `E`, Euler's number.
    Euler,
}

impl Constant {
    /// The numeric value of the constant.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::Euler => std::f64::consts::E,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Sine in radians (e.g. `Sin(x)`).
    Sine,
}

/// An ordered sequence of coefficients; the index of a coefficient is its
/// degree.
///
/// A polynomial built from source text may be empty (`Poly([])`), and the
/// derivative of a constant polynomial is empty as well: a legal, degenerate
/// polynomial of degree -1.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    /// Coefficients, constant term first.
    pub coefficients: Vec<Expr>,
}

impl Polynomial {
    /// Creates a polynomial from its coefficients, constant term first.
    #[must_use]
    pub const fn new(coefficients: Vec<Expr>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial whose coefficients are all numeric literals.
    ///
    /// ## Example
    /// ```
    /// use polycalc::ast::Polynomial;
    ///
    /// let p = Polynomial::from_reals(&[1.0, 0.0, 3.0]);
    /// assert_eq!(p.to_string(), "1.0 + 3.0*x^2");
    /// ```
    #[must_use]
    pub fn from_reals(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(Expr::Literal).collect())
    }

    /// Number of coefficients (degree + 1).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns `true` for the degenerate polynomial without coefficients.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

/// A reference to a polynomial whose kind is only known at evaluation time.
///
/// The parser cannot tell whether the name in `p.Apply(2)` is bound to a
/// polynomial; it records the raw name and the evaluator checks the binding.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyRef {
    /// A variable name, looked up when the node is evaluated.
    Variable(String),
    /// A polynomial expression written in place.
    Inline(Box<PolyExpr>),
}

/// A node of the `polynomial` grammar rule: an expression whose value is a
/// polynomial.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyExpr {
    /// `Poly([c0, c1, ...])`
    Literal(Polynomial),
    /// `poly.Times(other)`
    Times {
        /// Left factor.
        poly:  PolyRef,
        /// Right factor.
        other: PolyRef,
    },
    /// `poly.Derivate()`
    Derivate {
        /// The polynomial to differentiate.
        poly: PolyRef,
    },
}

/// The right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignedValue {
    /// `name = <expression>`
    Expression(Expr),
    /// `name = <polynomial>`
    Polynomial(PolyExpr),
}

/// Represents a top-level statement: one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A scalar expression evaluated for its result.
    Expression(Expr),
    /// A polynomial expression evaluated for its result.
    Polynomial(PolyExpr),
    /// A binding of a name to a value.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: AssignedValue,
    },
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pi => write!(f, "Pi"),
            Self::Euler => write!(f, "E"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", format_real(*value)),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Constant(constant) => write!(f, "{constant}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op: UnaryOperator::Negate,
                            expr, } => write!(f, "(-({expr}))"),
            Self::UnaryOp { op: UnaryOperator::Sine,
                            expr, } => write!(f, "(Sin({expr}))"),
            Self::PolyApply { poly, arg } => write!(f, "{poly}.Apply({arg})"),
        }
    }
}

/// Renders the polynomial in ascending degree.
///
/// A coefficient printing as `0.0` is skipped together with its separator; a
/// coefficient printing as `1.0` is omitted above degree 0, leaving only the
/// power of `x`. The separator after a term depends on the term's index, not
/// on whether a later term is printed, so a trailing zero coefficient leaves a
/// dangling `" + "`: `Poly([1, 0])` renders as `"1.0 + "`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.coefficients.len().saturating_sub(1);

        for (degree, coefficient) in self.coefficients.iter().enumerate() {
            let text = coefficient.to_string();
            if text == "0.0" {
                continue;
            }
            let is_one = text == "1.0";
            if !is_one || degree == 0 {
                write!(f, "{text}")?;
            }
            if degree != 0 {
                if !is_one {
                    write!(f, "*")?;
                }
                if degree == 1 {
                    write!(f, "x")?;
                } else {
                    write!(f, "x^{degree}")?;
                }
            }
            if degree != last {
                write!(f, " + ")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PolyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Inline(poly) => write!(f, "{poly}"),
        }
    }
}

impl fmt::Display for PolyExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(poly) => {
                write!(f, "Poly([")?;
                for (index, coefficient) in poly.coefficients.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{coefficient}")?;
                }
                write!(f, "])")
            },
            Self::Times { poly, other } => write!(f, "{poly}.Times({other})"),
            Self::Derivate { poly } => write!(f, "{poly}.Derivate()"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{expr}"),
            Self::Polynomial(poly) => write!(f, "{poly}"),
            Self::Assignment { name,
                               value: AssignedValue::Expression(expr), } => {
                write!(f, "{name} = {expr}")
            },
            Self::Assignment { name,
                               value: AssignedValue::Polynomial(poly), } => {
                write!(f, "{name} = {poly}")
            },
        }
    }
}
