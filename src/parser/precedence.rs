use crate::parser::token::{Operator, Token};

pub const OPEN_PAREN_PRIORITY: u8 = 10;

impl Operator {
    /// Binding strength, higher binds tighter.
    pub fn priority(&self) -> u8 {
        match self {
            Operator::Negate | Operator::Sqrt | Operator::Sin | Operator::Cos | Operator::Tan => 9,
            Operator::Power | Operator::Log => 8,
            Operator::Multiply | Operator::Divide => 7,
            Operator::Add | Operator::Subtract => 6,
        }
    }
}

/// Priority of a token that may sit on the operator stack. Close
/// parentheses and operands never do.
pub fn priority(token: &Token) -> Option<u8> {
    match token {
        Token::OpenParen => Some(OPEN_PAREN_PRIORITY),
        Token::Operator(op) => Some(op.priority()),
        Token::CloseParen | Token::Number(_) | Token::Identifier(_) => None,
    }
}

/// Whether `top` must be moved to the output before `incoming` is pushed.
///
/// Equal priorities pop, so binary operators associate to the left. A
/// prefix operator has no left operand to complete and pops nothing.
pub fn pops_before(top: Operator, incoming: Operator) -> bool {
    !incoming.is_prefix() && top.priority() >= incoming.priority()
}
