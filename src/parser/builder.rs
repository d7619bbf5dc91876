use crate::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::error::BuildError;
use crate::parser::token::{Operator, Token};
use log::debug;

enum Arity {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

fn arity(operator: Operator) -> Arity {
    match operator {
        Operator::Negate => Arity::Unary(UnaryOperator::Negate),
        Operator::Sqrt => Arity::Unary(UnaryOperator::SquareRoot),
        Operator::Sin => Arity::Unary(UnaryOperator::Sine),
        Operator::Cos => Arity::Unary(UnaryOperator::Cosine),
        Operator::Tan => Arity::Unary(UnaryOperator::Tangent),
        Operator::Add => Arity::Binary(BinaryOperator::Add),
        Operator::Subtract => Arity::Binary(BinaryOperator::Subtract),
        Operator::Multiply => Arity::Binary(BinaryOperator::Multiply),
        Operator::Divide => Arity::Binary(BinaryOperator::Divide),
        Operator::Power => Arity::Binary(BinaryOperator::Power),
        Operator::Log => Arity::Binary(BinaryOperator::Logarithm),
    }
}

/// Deepest tree the builder accepts. Calculation, rendering and dropping
/// all recurse once per level.
pub const MAX_DEPTH: usize = 1024;

/// A built subtree and the number of levels it spans.
struct Node {
    expression: Expression,
    depth: usize,
}

impl Node {
    fn leaf(expression: Expression) -> Self {
        Self {
            expression,
            depth: 1,
        }
    }

    fn branch(expression: Expression, child_depth: usize) -> Result<Self, BuildError> {
        let depth = child_depth + 1;
        if depth > MAX_DEPTH {
            return Err(BuildError::TooDeep(MAX_DEPTH));
        }
        Ok(Self { expression, depth })
    }
}

/// Assembles an expression tree from tokens in postfix order.
pub fn postfix_to_expression(tokens: Vec<Token>) -> Result<Expression, BuildError> {
    let mut stack: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(text) => {
                let value = text
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or(BuildError::InvalidNumber(text))?;
                stack.push(Node::leaf(Expression::Constant(value)));
            }
            Token::Identifier(name) => stack.push(Node::leaf(Expression::Variable(name))),
            Token::Operator(operator) => {
                let node = reduce(operator, &mut stack)?;
                stack.push(node);
            }
            Token::OpenParen | Token::CloseParen => {
                return Err(BuildError::UnexpectedToken(token.text().to_string()))
            }
        }
    }

    let len = stack.len();
    if len != 1 {
        return Err(BuildError::InvalidStackLength(len));
    }
    let root = stack.pop().ok_or(BuildError::InvalidStackLength(len))?;
    debug!("Built expression of depth {}: {}", root.depth, root.expression);
    Ok(root.expression)
}

/// Pops the operands of `operator` and builds its node.
///
/// Two nodes are always popped, whatever the arity. In postfix order a
/// unary operator's operand is the most recent node, so a second node
/// popped alongside it belongs to an enclosing operator and goes back.
fn reduce(operator: Operator, stack: &mut Vec<Node>) -> Result<Node, BuildError> {
    let rhs = stack.pop();
    let lhs = stack.pop();

    match arity(operator) {
        Arity::Unary(unary) => {
            let operand = rhs.ok_or_else(|| BuildError::MissingOperand {
                operator: operator.to_string(),
            })?;
            if let Some(lhs) = lhs {
                stack.push(lhs);
            }
            Node::branch(Expression::unary(unary, operand.expression), operand.depth)
        }
        Arity::Binary(binary) => {
            let second = rhs.ok_or_else(|| BuildError::MissingRightOperand {
                operator: operator.to_string(),
            })?;
            let first = lhs.ok_or_else(|| BuildError::MissingLeftOperand {
                operator: operator.to_string(),
            })?;
            let depth = first.depth.max(second.depth);
            Node::branch(
                Expression::binary(binary, first.expression, second.expression),
                depth,
            )
        }
    }
}
