use std::borrow::Cow;

use log::trace;

use crate::{
    ast::{BinaryOperator, Expr, PolyExpr, PolyRef, Polynomial},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::usize_to_f64,
};

/// One coefficient of a product under construction.
///
/// A slot stays numeric as long as every contribution to it evaluated;
/// the first unresolved contribution turns it into an expression tree.
#[derive(Debug, Clone)]
enum Slot {
    Number(f64),
    Symbolic(Expr),
}

impl Slot {
    /// Adds a numeric product to the slot.
    fn add_number(self, product: f64) -> Self {
        match self {
            Self::Number(n) => Self::Number(n + product),
            Self::Symbolic(expr) => {
                Self::Symbolic(Expr::binary(expr, BinaryOperator::Add, Expr::Literal(product)))
            },
        }
    }

    /// Adds an unresolved product to the slot. A numeric zero is replaced
    /// rather than kept as `0.0 + term`.
    fn add_term(self, term: Expr) -> Self {
        match self {
            Self::Number(n) if n == 0.0 => Self::Symbolic(term),
            Self::Number(n) => Self::Symbolic(Expr::binary(Expr::Literal(n), BinaryOperator::Add, term)),
            Self::Symbolic(expr) => Self::Symbolic(Expr::binary(expr, BinaryOperator::Add, term)),
        }
    }

    fn into_expr(self) -> Expr {
        match self {
            Self::Number(n) => Expr::Literal(n),
            Self::Symbolic(expr) => expr,
        }
    }
}

impl Context {
    /// Resolves a polynomial reference.
    ///
    /// A variable is looked up and must be bound to a polynomial; an inline
    /// literal is borrowed as written; any other inline expression is
    /// evaluated.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if the name is not bound.
    /// - `RuntimeError::NotAPolynomial` if it is bound to a number.
    /// - Any error raised while evaluating an inline expression.
    pub fn resolve_poly_ref<'a>(&'a self, poly: &'a PolyRef) -> EvalResult<Cow<'a, Polynomial>> {
        match poly {
            PolyRef::Variable(name) => match self.lookup(name)? {
                Value::Polynomial(p) => Ok(Cow::Borrowed(p)),
                _ => Err(RuntimeError::NotAPolynomial { name: name.clone() }),
            },
            PolyRef::Inline(expr) => match expr.as_ref() {
                PolyExpr::Literal(p) => Ok(Cow::Borrowed(p)),
                other => self.eval_poly_expr(other).map(Cow::Owned),
            },
        }
    }

    /// Evaluates a polynomial expression to a polynomial.
    ///
    /// For `Times`, the right-hand factor is resolved before the left-hand
    /// one, so when both fail the error of the right-hand side is reported.
    ///
    /// ## Example
    /// ```
    /// use polycalc::{
    ///     ast::{PolyExpr, PolyRef, Polynomial},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let ctx = Context::new();
    /// let cubic = PolyExpr::Literal(Polynomial::from_reals(&[1.0, 1.0, 1.0, 1.0]));
    /// let derivate = PolyExpr::Derivate { poly: PolyRef::Inline(Box::new(cubic)) };
    /// assert_eq!(ctx.eval_poly_expr(&derivate).unwrap().to_string(),
    ///            "1.0 + 2.0*x + 3.0*x^2");
    /// ```
    pub fn eval_poly_expr(&self, poly: &PolyExpr) -> EvalResult<Polynomial> {
        match poly {
            PolyExpr::Literal(p) => Ok(p.clone()),
            PolyExpr::Times { poly, other } => {
                let other = self.resolve_poly_ref(other)?;
                let poly = self.resolve_poly_ref(poly)?;
                self.times(&poly, &other)
            },
            PolyExpr::Derivate { poly } => {
                let poly = self.resolve_poly_ref(poly)?;
                self.derivate(&poly)
            },
        }
    }

    /// Evaluates `poly.Apply(arg)`.
    pub(crate) fn eval_poly_apply(&self, poly: &PolyRef, arg: &Expr) -> EvalResult<Value> {
        let poly = self.resolve_poly_ref(poly)?;
        self.apply(&poly, arg).map(Value::from)
    }

    /// Evaluates the polynomial at `arg`.
    ///
    /// The argument is evaluated once, then the terms are summed in
    /// ascending degree. An empty polynomial evaluates to `0`.
    ///
    /// # Errors
    /// Fails if the argument or any coefficient does not evaluate to a number.
    ///
    /// ## Example
    /// ```
    /// use polycalc::{
    ///     ast::{Expr, Polynomial},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let ctx = Context::new();
    /// let p = Polynomial::from_reals(&[1.0, 0.0, 2.0]);
    /// assert_eq!(ctx.apply(&p, &Expr::Literal(3.0)).unwrap(), 19.0);
    /// assert_eq!(ctx.apply(&Polynomial::default(), &Expr::Literal(3.0)).unwrap(), 0.0);
    /// ```
    pub fn apply(&self, poly: &Polynomial, arg: &Expr) -> EvalResult<f64> {
        let x = self.eval_number(arg)?;
        let mut sum = 0.0;
        for (degree, coefficient) in poly.coefficients.iter().enumerate() {
            sum += self.eval_number(coefficient)? * x.powf(usize_to_f64(degree));
        }
        Ok(sum)
    }

    /// Differentiates the polynomial with respect to `x`.
    ///
    /// Each coefficient is handled on its own: if it evaluates, the result
    /// is the folded product with its degree; if it refers to an unbound
    /// name, the product is kept as an expression.
    ///
    /// # Errors
    /// Propagates any coefficient error other than
    /// `RuntimeError::UnknownVariable`.
    pub fn derivate(&self, poly: &Polynomial) -> EvalResult<Polynomial> {
        let coefficients =
            poly.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(degree, coefficient)| {
                    let factor = usize_to_f64(degree);
                    match self.eval_number(coefficient) {
                        Ok(value) => Ok(Expr::Literal(value * factor)),
                        Err(e) if e.is_unknown_variable() => {
                            trace!("derivate: keeping degree {degree} symbolic ({e})");
                            Ok(Expr::binary(coefficient.clone(),
                                            BinaryOperator::Mul,
                                            Expr::Literal(factor)))
                        },
                        Err(e) => Err(e),
                    }
                })
                .collect::<EvalResult<Vec<_>>>()?;
        Ok(Polynomial::new(coefficients))
    }

    /// Multiplies two polynomials.
    ///
    /// Coefficient `k` of the result collects every `a[i] * b[j]` with
    /// `i + j == k`, visiting `i` in the outer loop and `j` in the inner
    /// loop. Products that evaluate are folded; products involving an
    /// unbound name are kept as expressions, so the result of multiplying
    /// non-empty polynomials always has `a.len() + b.len() - 1`
    /// coefficients. If either factor is empty, so is the product.
    ///
    /// # Errors
    /// Propagates any coefficient error other than
    /// `RuntimeError::UnknownVariable`.
    ///
    /// ## Example
    /// ```
    /// use polycalc::{ast::Polynomial, interpreter::evaluator::core::Context};
    ///
    /// let ctx = Context::new();
    /// let a = Polynomial::from_reals(&[1.0, 1.0]);
    /// let b = Polynomial::from_reals(&[-1.0, 1.0]);
    /// assert_eq!(ctx.times(&a, &b).unwrap(), Polynomial::from_reals(&[-1.0, 0.0, 1.0]));
    /// ```
    pub fn times(&self, a: &Polynomial, b: &Polynomial) -> EvalResult<Polynomial> {
        if a.is_empty() || b.is_empty() {
            return Ok(Polynomial::default());
        }

        let mut slots = vec![Slot::Number(0.0); a.len() + b.len() - 1];
        for (i, left) in a.coefficients.iter().enumerate() {
            for (j, right) in b.coefficients.iter().enumerate() {
                let product = self.eval_number(left)
                                  .and_then(|l| self.eval_number(right).map(|r| l * r));
                let slot = std::mem::replace(&mut slots[i + j], Slot::Number(0.0));
                slots[i + j] = match product {
                    Ok(product) => slot.add_number(product),
                    Err(e) if e.is_unknown_variable() => {
                        trace!("times: keeping a[{i}] * b[{j}] symbolic ({e})");
                        slot.add_term(Expr::binary(left.clone(), BinaryOperator::Mul, right.clone()))
                    },
                    Err(e) => return Err(e),
                };
            }
        }

        Ok(Polynomial::new(slots.into_iter().map(Slot::into_expr).collect()))
    }
}
