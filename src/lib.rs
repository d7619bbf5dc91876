pub mod ast;
pub mod error;
pub mod parser;
pub mod shell;

pub use ast::{Evaluator, Expression, SymbolValues};
pub use error::{BuildError, ConversionError, Error, EvalError, LexError, ParseError};
pub use parser::ExpressionParser;

/// Parses `expression` into a tree that can be calculated many times.
pub fn parse_expression(expression: &str) -> Result<Expression, ParseError> {
    ExpressionParser::parse_expression(expression)
}

pub fn evaluate_expression(expression: &str, context: &SymbolValues) -> Result<f64, Error> {
    let tree = parse_expression(expression)?;
    Ok(tree.calculate(context)?)
}
