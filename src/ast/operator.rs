use crate::error::EvalError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    SquareRoot,
    Sine,
    Cosine,
    Tangent,
}

impl UnaryOperator {
    /// Trigonometric functions take radians.
    pub fn apply(&self, operand: f64) -> Result<f64, EvalError> {
        match self {
            UnaryOperator::Negate => Ok(-operand),
            UnaryOperator::SquareRoot => {
                if operand < 0.0 {
                    Err(EvalError::NegativeSquareRoot(operand))
                } else {
                    Ok(operand.sqrt())
                }
            }
            UnaryOperator::Sine => Ok(operand.sin()),
            UnaryOperator::Cosine => Ok(operand.cos()),
            UnaryOperator::Tangent => Ok(operand.tan()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// `first log second`: logarithm of `first` in base `second`.
    Logarithm,
}

impl BinaryOperator {
    pub fn apply(&self, first: f64, second: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOperator::Add => Ok(first + second),
            BinaryOperator::Subtract => Ok(first - second),
            BinaryOperator::Multiply => Ok(first * second),
            BinaryOperator::Divide => {
                if second == 0.0 {
                    Err(EvalError::DivisionByZero { dividend: first })
                } else {
                    Ok(first / second)
                }
            }
            BinaryOperator::Power => Ok(first.powf(second)),
            BinaryOperator::Logarithm => {
                // A base of 1 has ln(base) == 0 and would divide by zero.
                if first <= 0.0 || second <= 0.0 || second == 1.0 {
                    Err(EvalError::LogarithmDomain {
                        argument: first,
                        base: second,
                    })
                } else {
                    Ok(first.ln() / second.ln())
                }
            }
        }
    }
}
