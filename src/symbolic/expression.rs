use std::fmt;
use std::ops;
use std::str::FromStr;

use log::debug;
use num_complex::Complex64;

use crate::symbolic::errors::{EvalError, ParseError};
use crate::symbolic::node::Node;
use crate::symbolic::parser::Parser;
use crate::symbolic::scalar::Scalar;

/// An immutable symbolic expression over the scalar domain `T`.
///
/// This is the public face of the engine: parse a string (or combine
/// expressions with the usual operators), then render, substitute,
/// evaluate, simplify or differentiate. Every operation returns a new
/// expression and leaves the receiver untouched.
/// # Example
/// ```
/// use differentiator::symbolic::expression::RealExpression;
///
/// let f = RealExpression::parse("x^3 + a * x").unwrap();
/// let df = f.differentiate("x", 1).unwrap();
/// assert_eq!(df.to_string(), "3 * x^2 + a");
/// let value = f.evaluate(&["x", "a"], &[2.0, 1.0]).unwrap();
/// assert_eq!(value, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression<T> {
    root: Node<T>,
}

pub type RealExpression = Expression<f64>;
pub type ComplexExpression = Expression<Complex64>;

impl<T: Scalar> Expression<T> {
    pub fn new(root: Node<T>) -> Self {
        Expression { root }
    }

    pub fn parse(source: &str) -> Result<Self, ParseError> {
        debug!("parsing expression {:?}", source);
        let root = Parser::new(source).parse_expression()?;
        Ok(Expression { root })
    }

    pub fn number(value: T) -> Self {
        Expression {
            root: Node::Number(value),
        }
    }

    pub fn variable(name: &str) -> Result<Self, ParseError> {
        Ok(Expression {
            root: Node::variable(name)?,
        })
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn simplify(&self) -> Result<Self, EvalError> {
        Ok(Expression {
            root: self.root.simplify()?,
        })
    }

    /// Replaces a variable with another expression and simplifies the
    /// result.
    pub fn substitute(&self, variable: &str, replacement: &Expression<T>) -> Result<Self, EvalError> {
        Ok(Expression {
            root: self.root.substitute(variable, &replacement.root).simplify()?,
        })
    }

    /// Evaluates to a scalar, matching `variables` and `values` by
    /// position.
    pub fn evaluate(&self, variables: &[&str], values: &[T]) -> Result<T, EvalError> {
        self.root.evaluate(variables, values)
    }

    /// Derivative of the given `order` with respect to `variable`.
    ///
    /// The tree is simplified before each differentiation round and once
    /// more at the end, so the result comes out folded.
    pub fn differentiate(&self, variable: &str, order: u32) -> Result<Self, EvalError> {
        let mut root = self.root.clone();
        for _ in 0..order {
            root = root.simplify()?.differentiate(variable);
        }
        Ok(Expression {
            root: root.simplify()?,
        })
    }

    /// First derivative with respect to `variable`.
    pub fn diff(&self, variable: &str) -> Result<Self, EvalError> {
        self.differentiate(variable, 1)
    }

    pub fn pow(self, exponent: Expression<T>) -> Self {
        Expression {
            root: Node::Pow(self.root.boxed(), exponent.root.boxed()),
        }
    }

    pub fn sin(self) -> Self {
        Expression {
            root: Node::Sin(self.root.boxed()),
        }
    }

    pub fn cos(self) -> Self {
        Expression {
            root: Node::Cos(self.root.boxed()),
        }
    }

    pub fn exp(self) -> Self {
        Expression {
            root: Node::Exp(self.root.boxed()),
        }
    }

    pub fn ln(self) -> Self {
        Expression {
            root: Node::Ln(self.root.boxed()),
        }
    }
}

impl<T: Scalar> fmt::Display for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl<T: Scalar> FromStr for Expression<T> {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Expression::parse(source)
    }
}

impl<T: Scalar> From<T> for Expression<T> {
    fn from(value: T) -> Self {
        Expression::number(value)
    }
}

// Operators combine trees without simplifying; call simplify() when the
// folded form is wanted.
impl<T: Scalar> ops::Neg for Expression<T> {
    type Output = Expression<T>;

    fn neg(self) -> Self::Output {
        Expression {
            root: Node::Neg(self.root.boxed()),
        }
    }
}

impl<T: Scalar> ops::Add for Expression<T> {
    type Output = Expression<T>;

    fn add(self, other: Expression<T>) -> Self::Output {
        Expression {
            root: Node::Add(self.root.boxed(), other.root.boxed()),
        }
    }
}

impl<T: Scalar> ops::Sub for Expression<T> {
    type Output = Expression<T>;

    fn sub(self, other: Expression<T>) -> Self::Output {
        Expression {
            root: Node::Sub(self.root.boxed(), other.root.boxed()),
        }
    }
}

impl<T: Scalar> ops::Mul for Expression<T> {
    type Output = Expression<T>;

    fn mul(self, other: Expression<T>) -> Self::Output {
        Expression {
            root: Node::Mul(self.root.boxed(), other.root.boxed()),
        }
    }
}

impl<T: Scalar> ops::Div for Expression<T> {
    type Output = Expression<T>;

    fn div(self, other: Expression<T>) -> Self::Output {
        Expression {
            root: Node::Div(self.root.boxed(), other.root.boxed()),
        }
    }
}
