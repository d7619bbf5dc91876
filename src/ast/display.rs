use crate::ast::{BinaryOperator, Expression, UnaryOperator};
use std::fmt;

impl Expression {
    /// Fully parenthesized text that parses back into the same tree.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `{}` on f64 is the shortest text that reads back as the same value.
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Variable(name) => f.write_str(name),
            Expression::Unary { operator, operand } => match operator {
                UnaryOperator::Negate => write!(f, "-{}", operand),
                UnaryOperator::SquareRoot => write!(f, "sqrt({})", operand),
                UnaryOperator::Sine => write!(f, "sin({})", operand),
                UnaryOperator::Cosine => write!(f, "cos({})", operand),
                UnaryOperator::Tangent => write!(f, "tan({})", operand),
            },
            Expression::Binary {
                operator,
                first,
                second,
            } => write!(f, "({} {} {})", first, operator, second),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
            BinaryOperator::Logarithm => "log",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Expression {
        Expression::Variable(name.to_string())
    }

    #[test]
    fn test_render_binary_templates() {
        let cases = [
            (BinaryOperator::Add, "(x + 2)"),
            (BinaryOperator::Subtract, "(x - 2)"),
            (BinaryOperator::Multiply, "(x * 2)"),
            (BinaryOperator::Divide, "(x / 2)"),
            (BinaryOperator::Power, "(x ^ 2)"),
            (BinaryOperator::Logarithm, "(x log 2)"),
        ];
        for (operator, expected) in cases {
            let expr = Expression::binary(operator, var("x"), Expression::Constant(2.0));
            assert_eq!(expr.render(), expected);
        }
    }

    #[test]
    fn test_render_unary_templates() {
        let cases = [
            (UnaryOperator::Negate, "-x"),
            (UnaryOperator::SquareRoot, "sqrt(x)"),
            (UnaryOperator::Sine, "sin(x)"),
            (UnaryOperator::Cosine, "cos(x)"),
            (UnaryOperator::Tangent, "tan(x)"),
        ];
        for (operator, expected) in cases {
            assert_eq!(Expression::unary(operator, var("x")).render(), expected);
        }
    }

    #[test]
    fn test_render_constants() {
        assert_eq!(Expression::Constant(16.0).render(), "16");
        assert_eq!(Expression::Constant(0.25).render(), "0.25");
    }

    #[test]
    fn test_render_nested() {
        let expr = Expression::unary(
            UnaryOperator::Negate,
            Expression::binary(
                BinaryOperator::Add,
                var("a"),
                Expression::unary(UnaryOperator::SquareRoot, var("b")),
            ),
        );
        assert_eq!(expr.render(), "-(a + sqrt(b))");
        assert_eq!(expr.render(), expr.render());
    }
}
