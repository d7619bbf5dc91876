use crate::error::LexError;
use crate::parser::token::{reserved, Operator, Token};
use log::{debug, trace};
use std::iter;
use std::mem;

/// Splits `input` into tokens.
///
/// The scanner keeps a buffer of the token being built and looks at one
/// character at a time. Immediate operators and parentheses are emitted as
/// soon as they are seen; numbers and words grow greedily and are flushed
/// on the first character that would make them invalid, which is then
/// scanned again against an empty buffer.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    // The trailing space flushes whatever is left in the buffer.
    let chars: Vec<char> = input.chars().chain(iter::once(' ')).collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut buffer = String::new();
    let mut decimal_point = false;
    let mut position = 0;

    while position < chars.len() {
        let next = chars[position];

        buffer.push(next);
        if let Some(token) = reserved(&buffer).filter(Token::is_immediate) {
            let token = disambiguate_minus(token, tokens.last());
            trace!("Immediate token {:?} at {}", token, position);
            tokens.push(token);
            buffer.clear();
            position += 1;
            continue;
        }
        buffer.pop();

        match buffer.chars().next() {
            Some(first) if first.is_ascii_digit() => {
                if continues_number(next, decimal_point) {
                    decimal_point |= next == '.';
                    buffer.push(next);
                    position += 1;
                } else {
                    trace!("Number {:?} ends before {:?}", buffer, next);
                    tokens.push(Token::Number(mem::take(&mut buffer)));
                    decimal_point = false;
                }
            }
            Some(first) if first.is_alphabetic() => {
                if continues_identifier(next) {
                    buffer.push(next);
                    position += 1;
                } else {
                    trace!("Word {:?} ends before {:?}", buffer, next);
                    tokens.push(finish_word(mem::take(&mut buffer)));
                }
            }
            None if next.is_alphabetic() || next.is_ascii_digit() => {
                buffer.push(next);
                position += 1;
            }
            None if next.is_whitespace() => position += 1,
            None => {
                return Err(LexError::UnexpectedCharacter {
                    character: next,
                    position,
                })
            }
            Some(_) => {
                buffer.push(next);
                return Err(LexError::InvalidSyntax { text: buffer });
            }
        }
    }

    debug!("Tokenized {:?} into {:?}", input, tokens);
    Ok(tokens)
}

/// A `-` with no operand before it is a unary minus.
fn disambiguate_minus(token: Token, previous: Option<&Token>) -> Token {
    match (token, previous) {
        (
            Token::Operator(Operator::Subtract),
            None | Some(Token::Operator(_) | Token::OpenParen),
        ) => Token::Operator(Operator::Negate),
        (token, _) => token,
    }
}

/// Turns a finished word into its keyword operator, or a variable name.
fn finish_word(word: String) -> Token {
    match reserved(&word) {
        Some(token) => token,
        None => Token::Identifier(word),
    }
}

/// Numbers start with an ASCII digit and continue with digits and at most
/// one decimal point, which keeps spellings like `inf` or `nan` out of the
/// numeric path.
fn continues_number(c: char, decimal_point: bool) -> bool {
    c.is_ascii_digit() || (c == '.' && !decimal_point)
}

/// Identifiers start with a letter and continue with letters or ASCII
/// digits. Other numeric characters such as `²` or `½` are rejected.
fn continues_identifier(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}
