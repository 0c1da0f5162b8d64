/// Token data model shared by the lexer and the parser.
pub mod token;
/// ________________________________________________________________________________________________________________________________
/// Hand-written lexer with pushback, feeding the recursive-descent parser.
pub mod lexer;
/// ________________________________________________________________________________________________________________________________
/// # Parser
/// a module that turns a String expression into an expression tree,
/// supports implicit multiplication and `name = expression` assignments
///# Example
/// ```
/// use differentiator::symbolic::parser::Parser;
/// let mut parser = Parser::<f64>::new("2x + sin(y)");
/// let tree = parser.parse_expression().unwrap();
/// println!("parsed: {}", tree);
/// ```
pub mod parser;
/// ________________________________________________________________________________________________________________________________
/// Scalar domains the engine is generic over: `f64` and `Complex64`.
pub mod scalar;
/// ________________________________________________________________________________________________________________________________
/// The `Node` sum type with rendering, substitution and evaluation.
pub mod node;
/// ________________________________________________________________________________________________________________________________
/// Analytical differentiation rules on `Node`.
pub mod derivatives;
/// ________________________________________________________________________________________________________________________________
/// Single-pass bottom-up simplification rules on `Node`.
pub mod simplify;
/// ________________________________________________________________________________________________________________________________
/// # Expression
/// the public facade: parse, render, substitute, evaluate, simplify,
/// differentiate to any order, combine with `+ - * /`
///# Example
/// ```
/// use differentiator::symbolic::expression::RealExpression;
/// let f = RealExpression::parse("x * sin(x)").unwrap();
/// let df = f.diff("x").unwrap();
/// println!("df/dx = {}", df);
/// ```
pub mod expression;
/// ________________________________________________________________________________________________________________________________
/// Parse and evaluation errors.
pub mod errors;

#[cfg(test)]
mod engine_tests;
