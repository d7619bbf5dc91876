use crate::error::EvalError;
use std::collections::HashMap;

mod display;
mod evaluator;
mod operator;

pub use evaluator::Evaluator;
pub use operator::{BinaryOperator, UnaryOperator};

/// Values for the variables an expression refers to.
pub type SymbolValues = HashMap<String, f64>;

/// An immutable expression tree. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(f64),
    Variable(String),
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    Binary {
        operator: BinaryOperator,
        first: Box<Expression>,
        second: Box<Expression>,
    },
}

impl Expression {
    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: BinaryOperator, first: Expression, second: Expression) -> Self {
        Expression::Binary {
            operator,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Evaluates the tree against `values`.
    ///
    /// Children are evaluated first to last and the first failure is
    /// returned as is. The tree is never modified, so one tree may be
    /// calculated any number of times, from any number of threads.
    pub fn calculate(&self, values: &SymbolValues) -> Result<f64, EvalError> {
        match self {
            Expression::Constant(value) => Ok(*value),
            Expression::Variable(name) => values
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::SymbolNotFound(name.clone())),
            Expression::Unary { operator, operand } => operator.apply(operand.calculate(values)?),
            Expression::Binary {
                operator,
                first,
                second,
            } => {
                let first_value = first.calculate(values)?;
                let second_value = second.calculate(values)?;
                operator.apply(first_value, second_value)
            }
        }
    }

    /// Names of the variables needed to calculate this expression, in the
    /// order they first appear, without duplicates.
    pub fn required_variables(&self) -> Vec<String> {
        let mut names: Vec<&str> = Vec::new();
        self.collect_variables(&mut names);
        names.into_iter().map(str::to_string).collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expression::Constant(_) => {}
            Expression::Variable(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Expression::Unary { operand, .. } => operand.collect_variables(names),
            Expression::Binary { first, second, .. } => {
                first.collect_variables(names);
                second.collect_variables(names);
            }
        }
    }
}
