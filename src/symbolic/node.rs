use std::fmt;

use crate::symbolic::errors::{EvalError, ParseError};
use crate::symbolic::scalar::Scalar;

/// Binding strength of a rendered node, used to decide parenthesization.
///
/// `Subtraction` sits strictly above `Addition` because `a - (b + c)` needs
/// parentheses while `a + (b + c)` does not. A compound complex constant
/// such as `5 + 3i` renders as a sum and reports `Addition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Addition,
    Subtraction,
    Multiplication,
    Power,
    Atom,
}

/// One node of an expression tree over the scalar domain `T`.
///
/// Trees are immutable: substitution, differentiation and simplification
/// all build new trees. Structural equality via `PartialEq` is what the
/// simplifier uses to detect shared subtrees (`x + x`, `x^a / x^b`, ...).
/// # Example
/// ```
/// use differentiator::symbolic::node::Node;
///
/// let x: Node<f64> = Node::variable("x").unwrap();
/// let tree = Node::Add(x.clone().boxed(), Node::Number(2.0).boxed());
/// assert_eq!(tree.to_string(), "x + 2");
/// assert_eq!(tree.substitute("x", &Node::Number(3.0)).to_string(), "3 + 2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    Number(T),
    Variable(String),

    Neg(Box<Node<T>>),
    Add(Box<Node<T>>, Box<Node<T>>),
    Sub(Box<Node<T>>, Box<Node<T>>),
    Mul(Box<Node<T>>, Box<Node<T>>),
    Div(Box<Node<T>>, Box<Node<T>>),
    Pow(Box<Node<T>>, Box<Node<T>>),

    Sin(Box<Node<T>>),
    Cos(Box<Node<T>>),
    Exp(Box<Node<T>>),
    Ln(Box<Node<T>>),
}

impl<T: Scalar> Node<T> {
    pub fn boxed(self) -> Box<Node<T>> {
        Box::new(self)
    }

    /// Creates a variable node, validating the name: non-empty, starts with
    /// an ASCII letter, letters and digits only.
    pub fn variable(name: &str) -> Result<Node<T>, ParseError> {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric())
            }
            None => false,
        };
        if !valid {
            return Err(ParseError::InvalidVariableName(name.to_string()));
        }
        Ok(Node::Variable(name.to_string()))
    }

    pub fn priority(&self) -> Priority {
        match self {
            Node::Number(value) => {
                if value.is_compound() {
                    Priority::Addition
                } else {
                    Priority::Atom
                }
            }
            Node::Variable(_) | Node::Sin(_) | Node::Cos(_) | Node::Exp(_) | Node::Ln(_) => {
                Priority::Atom
            }
            Node::Neg(_) => Priority::Subtraction,
            Node::Add(_, _) => Priority::Addition,
            Node::Sub(_, _) => Priority::Subtraction,
            Node::Mul(_, _) | Node::Div(_, _) => Priority::Multiplication,
            Node::Pow(_, _) => Priority::Power,
        }
    }

    /// Replaces every occurrence of the variable `name` with a copy of
    /// `replacement`. Purely structural, no simplification.
    pub fn substitute(&self, name: &str, replacement: &Node<T>) -> Node<T> {
        match self {
            Node::Number(_) => self.clone(),
            Node::Variable(own) => {
                if own == name {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Node::Neg(arg) => Node::Neg(arg.substitute(name, replacement).boxed()),
            Node::Add(left, right) => Node::Add(
                left.substitute(name, replacement).boxed(),
                right.substitute(name, replacement).boxed(),
            ),
            Node::Sub(left, right) => Node::Sub(
                left.substitute(name, replacement).boxed(),
                right.substitute(name, replacement).boxed(),
            ),
            Node::Mul(left, right) => Node::Mul(
                left.substitute(name, replacement).boxed(),
                right.substitute(name, replacement).boxed(),
            ),
            Node::Div(left, right) => Node::Div(
                left.substitute(name, replacement).boxed(),
                right.substitute(name, replacement).boxed(),
            ),
            Node::Pow(left, right) => Node::Pow(
                left.substitute(name, replacement).boxed(),
                right.substitute(name, replacement).boxed(),
            ),
            Node::Sin(arg) => Node::Sin(arg.substitute(name, replacement).boxed()),
            Node::Cos(arg) => Node::Cos(arg.substitute(name, replacement).boxed()),
            Node::Exp(arg) => Node::Exp(arg.substitute(name, replacement).boxed()),
            Node::Ln(arg) => Node::Ln(arg.substitute(name, replacement).boxed()),
        }
    }

    /// Evaluates the tree to a scalar. `variables` and `values` are matched
    /// by position; a variable not listed makes evaluation fail.
    pub fn evaluate(&self, variables: &[&str], values: &[T]) -> Result<T, EvalError> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Variable(name) => variables
                .iter()
                .position(|candidate| candidate == name)
                .and_then(|index| values.get(index).copied())
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
            Node::Neg(arg) => Ok(-arg.evaluate(variables, values)?),
            Node::Add(left, right) => {
                Ok(left.evaluate(variables, values)? + right.evaluate(variables, values)?)
            }
            Node::Sub(left, right) => {
                Ok(left.evaluate(variables, values)? - right.evaluate(variables, values)?)
            }
            Node::Mul(left, right) => {
                Ok(left.evaluate(variables, values)? * right.evaluate(variables, values)?)
            }
            Node::Div(left, right) => {
                Ok(left.evaluate(variables, values)? / right.evaluate(variables, values)?)
            }
            Node::Pow(left, right) => Ok(left
                .evaluate(variables, values)?
                .pow(right.evaluate(variables, values)?)),
            Node::Sin(arg) => Ok(arg.evaluate(variables, values)?.sin()),
            Node::Cos(arg) => Ok(arg.evaluate(variables, values)?.cos()),
            Node::Exp(arg) => Ok(arg.evaluate(variables, values)?.exp()),
            Node::Ln(arg) => {
                let value = arg.evaluate(variables, values)?;
                if value.is_zero() {
                    return Err(EvalError::LogarithmOfZero);
                }
                Ok(value.ln())
            }
        }
    }
}

/// Shorthand for a real-valued constant node in the domain `T`.
pub(crate) fn num<T: Scalar>(value: f64) -> Node<T> {
    Node::Number(T::from_real(value))
}

fn wrap(text: String, parenthesize: bool) -> String {
    if parenthesize {
        format!("({})", text)
    } else {
        text
    }
}

impl<T: Scalar> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{}", value.render()),
            Node::Variable(name) => write!(f, "{}", name),
            Node::Neg(arg) => {
                let rendered = arg.to_string();
                let parens =
                    rendered.starts_with('-') || arg.priority() <= Priority::Subtraction;
                write!(f, "-{}", wrap(rendered, parens))
            }
            Node::Add(left, right) => {
                let rendered = right.to_string();
                let parens = rendered.starts_with('-');
                write!(f, "{} + {}", left, wrap(rendered, parens))
            }
            Node::Sub(left, right) => {
                let rendered = right.to_string();
                let parens =
                    rendered.starts_with('-') || right.priority() <= Priority::Subtraction;
                write!(f, "{} - {}", left, wrap(rendered, parens))
            }
            Node::Mul(left, right) => {
                let left_rendered =
                    wrap(left.to_string(), left.priority() < Priority::Multiplication);
                let rendered = right.to_string();
                let parens =
                    rendered.starts_with('-') || right.priority() < Priority::Multiplication;
                write!(f, "{} * {}", left_rendered, wrap(rendered, parens))
            }
            Node::Div(left, right) => {
                let left_rendered =
                    wrap(left.to_string(), left.priority() < Priority::Multiplication);
                let rendered = right.to_string();
                let parens =
                    rendered.starts_with('-') || right.priority() <= Priority::Multiplication;
                write!(f, "{} / {}", left_rendered, wrap(rendered, parens))
            }
            Node::Pow(left, right) => {
                let left_rendered = left.to_string();
                let left_parens =
                    left_rendered.starts_with('-') || left.priority() <= Priority::Power;
                let right_rendered = right.to_string();
                let right_parens =
                    right_rendered.starts_with('-') || right.priority() <= Priority::Power;
                write!(
                    f,
                    "{}^{}",
                    wrap(left_rendered, left_parens),
                    wrap(right_rendered, right_parens)
                )
            }
            Node::Sin(arg) => write!(f, "sin({})", arg),
            Node::Cos(arg) => write!(f, "cos({})", arg),
            Node::Exp(arg) => write!(f, "exp({})", arg),
            Node::Ln(arg) => write!(f, "ln({})", arg),
        }
    }
}
