use crate::ast::Expression;
use crate::error::ParseError;
use log::debug;

mod builder;
mod precedence;
mod rpn;
mod token;
mod tokenizer;

pub use builder::postfix_to_expression;
pub use precedence::{pops_before, priority, OPEN_PAREN_PRIORITY};
pub use rpn::infix_to_postfix;
pub use token::{reserved, Operator, Token, TokenKind};
pub use tokenizer::tokenize;

pub struct ExpressionParser;

impl ExpressionParser {
    /// Runs the whole pipeline: tokenize, reorder to postfix, build the tree.
    /// The first failing stage is reported in the error.
    pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
        debug!("Parsing expression: {}", input);
        let tokens = tokenize(input)?;
        let postfix = infix_to_postfix(tokens)?;
        let expression = postfix_to_expression(postfix)?;
        Ok(expression)
    }
}
