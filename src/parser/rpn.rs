use crate::error::ConversionError;
use crate::parser::precedence::pops_before;
use crate::parser::token::Token;
use log::{debug, trace};

/// Reorders infix tokens into postfix order (shunting-yard).
///
/// Matched parentheses are dropped; every other token appears in the
/// output exactly once.
pub fn infix_to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ConversionError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token),
            Token::OpenParen => stack.push(token),
            Token::CloseParen => loop {
                match stack.pop() {
                    None => return Err(ConversionError::UnmatchedCloseParen),
                    Some(Token::OpenParen) => break,
                    Some(popped) => output.push(popped),
                }
            },
            Token::Operator(incoming) => {
                // Only operators and open parentheses live on the stack, so
                // this stops at the nearest open parenthesis.
                while let Some(&Token::Operator(top)) = stack.last() {
                    if !pops_before(top, incoming) {
                        break;
                    }
                    trace!("{} pops {} from the operator stack", incoming, top);
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(token);
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::OpenParen {
            return Err(ConversionError::UnclosedOpenParen);
        }
        output.push(token);
    }

    debug!(
        "Postfix order: {}",
        output.iter().map(Token::text).collect::<Vec<_>>().join(" ")
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenizer::tokenize;

    fn postfix(input: &str) -> Result<String, ConversionError> {
        let tokens = tokenize(input).unwrap();
        infix_to_postfix(tokens)
            .map(|out| out.iter().map(Token::text).collect::<Vec<_>>().join(" "))
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2 + 3 * 4").unwrap(), "2 3 4 * +");
        assert_eq!(postfix("2 * 3 + 4").unwrap(), "2 3 * 4 +");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix("(2 + 3) * 4").unwrap(), "2 3 + 4 *");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix("10 - 3 - 2").unwrap(), "10 3 - 2 -");
        assert_eq!(postfix("2 ^ 3 ^ 2").unwrap(), "2 3 ^ 2 ^");
    }

    #[test]
    fn test_unary_minus_binds_tighter_than_power() {
        assert_eq!(postfix("-2 ^ 2").unwrap(), "2 u- 2 ^");
        assert_eq!(postfix("2 ^ -2").unwrap(), "2 2 u- ^");
    }

    #[test]
    fn test_stacked_prefix_operators() {
        assert_eq!(postfix("- -4").unwrap(), "4 u- u-");
        assert_eq!(postfix("-sqrt(4)").unwrap(), "4 sqrt u-");
    }

    #[test]
    fn test_functions() {
        assert_eq!(postfix("2 - sqrt(16)").unwrap(), "2 16 sqrt -");
        assert_eq!(postfix("sin(x) * cos(y)").unwrap(), "x sin y cos *");
        assert_eq!(postfix("x log 2 + 1").unwrap(), "x 2 log 1 +");
    }

    #[test]
    fn test_unmatched_close_paren() {
        assert_eq!(postfix("1 + 2)"), Err(ConversionError::UnmatchedCloseParen));
        assert_eq!(postfix(")"), Err(ConversionError::UnmatchedCloseParen));
    }

    #[test]
    fn test_unclosed_open_paren() {
        assert_eq!(postfix("(1 + 2"), Err(ConversionError::UnclosedOpenParen));
        assert_eq!(postfix("((1)"), Err(ConversionError::UnclosedOpenParen));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(postfix("").unwrap(), "");
    }
}
