use thiserror::Error;

/// Failure while splitting the input text into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    /// The buffer only ever holds a number or identifier prefix, so this
    /// fires only if that invariant is broken.
    #[error("invalid syntax: '{text}'")]
    InvalidSyntax { text: String },
}

/// Failure while reordering infix tokens into postfix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("close parenthesis without matching open parenthesis")]
    UnmatchedCloseParen,
    #[error("unclosed open parenthesis")]
    UnclosedOpenParen,
}

/// Failure while assembling the expression tree from postfix tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("cannot convert to float: {0}")]
    InvalidNumber(String),
    #[error("missing operand for unary {operator}")]
    MissingOperand { operator: String },
    #[error("missing LHS operand for binary {operator}")]
    MissingLeftOperand { operator: String },
    #[error("missing RHS operand for binary {operator}")]
    MissingRightOperand { operator: String },
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("invalid final stack length: {0}")]
    InvalidStackLength(usize),
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Failure while calculating a built expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),
    #[error("square root of negative number: {0}")]
    NegativeSquareRoot(f64),
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },
    #[error("logarithm out of domain: {argument} log {base}")]
    LogarithmDomain { argument: f64, base: f64 },
}

/// A parse failure tagged with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Tokenizer error: {0}")]
    Lex(#[from] LexError),
    #[error("RPN conversion error: {0}")]
    Conversion(#[from] ConversionError),
    #[error("Builder error: {0}")]
    Build(#[from] BuildError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}
