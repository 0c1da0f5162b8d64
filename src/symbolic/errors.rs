use thiserror::Error;

/// Errors produced while turning source text into an expression tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token \"{0}\"")]
    UnexpectedToken(String),

    #[error("expected \"{expected}\", found \"{found}\"")]
    Expected { expected: &'static str, found: String },

    #[error("trailing input \"{0}\" after expression")]
    TrailingInput(String),

    /// A variable must be non-empty, start with a letter and consist of
    /// letters and digits only.
    #[error("invalid variable name \"{0}\"")]
    InvalidVariableName(String),

    /// Function names and the imaginary unit cannot be assigned to.
    #[error("\"{0}\" cannot be used as an assignment target")]
    ReservedName(String),
}

/// Errors produced while evaluating an expression to a scalar value.
///
/// Simplification can also return these: constant folding of `ln`
/// evaluates the argument, so simplifying `ln(0)` fails the same way
/// evaluating it does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("the variable \"{0}\" has no value")]
    UndefinedVariable(String),

    #[error("logarithm from zero")]
    LogarithmOfZero,
}
