use std::marker::PhantomData;

use crate::symbolic::errors::ParseError;
use crate::symbolic::lexer::Lexer;
use crate::symbolic::node::Node;
use crate::symbolic::scalar::Scalar;
use crate::symbolic::token::{Token, TokenKind};

/// Built-in function names. These cannot be variables or assignment
/// targets.
pub const FUNCTIONS: [&str; 4] = ["sin", "cos", "exp", "ln"];

/// Recursive-descent parser producing a [`Node`] tree.
///
/// Grammar, loosest to tightest binding:
///
/// ```text
/// sum     := unary (('+' | '-') product)*
/// unary   := '-' product | product
/// product := power (('*' | '/' | <adjacent symbol or '('>) power)*
/// power   := primary ('^' power)?
/// primary := group | number | function '(' sum ')' | variable
/// ```
///
/// A symbol or parenthesis directly following a factor multiplies
/// implicitly, so `2x(y + 1)` reads as `2 * x * (y + 1)`.
/// # Example
/// ```
/// use differentiator::symbolic::parser::Parser;
///
/// let tree = Parser::<f64>::new("2 * x^2 + 1").parse_expression().unwrap();
/// assert_eq!(tree.to_string(), "2 * x^2 + 1");
/// ```
pub struct Parser<T> {
    lexer: Lexer,
    _scalar: PhantomData<T>,
}

impl<T: Scalar> Parser<T> {
    pub fn new(source: &str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            _scalar: PhantomData,
        }
    }

    /// Parses the whole input as one expression; anything left over is an
    /// error.
    pub fn parse_expression(&mut self) -> Result<Node<T>, ParseError> {
        let root = self.sum()?;
        let token = self.lexer.next_token();
        if token.kind != TokenKind::End {
            return Err(ParseError::TrailingInput(token.describe()));
        }
        Ok(root)
    }

    /// Parses `name = expression` and returns the pair.
    ///
    /// The target must be a valid variable name; function names and, in a
    /// complex domain, `i` are rejected.
    pub fn parse_assignment(&mut self) -> Result<(String, Node<T>), ParseError> {
        let variable = self.lexer.next_token();
        let eq = self.lexer.next_token();
        if eq.kind != TokenKind::Eq {
            return Err(ParseError::Expected {
                expected: "=",
                found: eq.describe(),
            });
        }
        if variable.kind != TokenKind::Symbol {
            return Err(ParseError::InvalidVariableName(variable.describe()));
        }
        if FUNCTIONS.contains(&variable.text.as_str())
            || (variable.text == "i" && T::imaginary_unit().is_some())
        {
            return Err(ParseError::ReservedName(variable.text));
        }
        Node::<T>::variable(&variable.text)?;
        let value = self.parse_expression()?;
        Ok((variable.text, value))
    }

    fn sum(&mut self) -> Result<Node<T>, ParseError> {
        let mut left = self.unary()?;
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::Plus => {
                    left = Node::Add(left.boxed(), self.product()?.boxed());
                }
                TokenKind::Minus => {
                    left = Node::Sub(left.boxed(), self.product()?.boxed());
                }
                _ => {
                    self.lexer.push_back(token);
                    return Ok(left);
                }
            }
        }
    }

    // a leading minus negates the whole first product: -x * y is -(x * y)
    fn unary(&mut self) -> Result<Node<T>, ParseError> {
        let token = self.lexer.next_token();
        if token.kind == TokenKind::Minus {
            return Ok(Node::Neg(self.product()?.boxed()));
        }
        self.lexer.push_back(token);
        self.product()
    }

    fn product(&mut self) -> Result<Node<T>, ParseError> {
        let mut left = self.power()?;
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::Star => {
                    left = Node::Mul(left.boxed(), self.power()?.boxed());
                }
                TokenKind::Slash => {
                    left = Node::Div(left.boxed(), self.power()?.boxed());
                }
                TokenKind::Symbol | TokenKind::LPar => {
                    // implicit multiplication
                    self.lexer.push_back(token);
                    left = Node::Mul(left.boxed(), self.power()?.boxed());
                }
                _ => {
                    self.lexer.push_back(token);
                    return Ok(left);
                }
            }
        }
    }

    fn power(&mut self) -> Result<Node<T>, ParseError> {
        let left = self.primary()?;
        let token = self.lexer.next_token();
        if token.kind == TokenKind::Pow {
            // right-associative: x^y^z is x^(y^z)
            return Ok(Node::Pow(left.boxed(), self.power()?.boxed()));
        }
        self.lexer.push_back(token);
        Ok(left)
    }

    fn primary(&mut self) -> Result<Node<T>, ParseError> {
        let token = self.lexer.next_token();
        match token.kind {
            TokenKind::LPar => {
                self.lexer.push_back(token);
                self.group()
            }
            TokenKind::Number => {
                let value: f64 = token
                    .text
                    .parse()
                    .map_err(|_| ParseError::UnexpectedToken(token.text.clone()))?;
                Ok(Node::Number(T::from_real(value)))
            }
            TokenKind::Symbol => {
                if FUNCTIONS.contains(&token.text.as_str()) {
                    self.lexer.push_back(token);
                    return self.func_call();
                }
                if token.text == "i" {
                    if let Some(unit) = T::imaginary_unit() {
                        return Ok(Node::Number(unit));
                    }
                }
                Node::variable(&token.text)
            }
            _ => Err(ParseError::UnexpectedToken(token.describe())),
        }
    }

    fn func_call(&mut self) -> Result<Node<T>, ParseError> {
        let name = self.lexer.next_token();
        let argument = self.group()?.boxed();
        Ok(match name.text.as_str() {
            "sin" => Node::Sin(argument),
            "cos" => Node::Cos(argument),
            "exp" => Node::Exp(argument),
            "ln" => Node::Ln(argument),
            _ => return Err(ParseError::UnexpectedToken(name.describe())),
        })
    }

    fn group(&mut self) -> Result<Node<T>, ParseError> {
        self.expect(TokenKind::LPar, "(")?;
        let inner = self.sum()?;
        self.expect(TokenKind::RPar, ")")?;
        Ok(inner)
    }

    fn expect(&mut self, kind: TokenKind, name: &'static str) -> Result<Token, ParseError> {
        let token = self.lexer.next_token();
        if token.kind != kind {
            return Err(ParseError::Expected {
                expected: name,
                found: token.describe(),
            });
        }
        Ok(token)
    }
}
