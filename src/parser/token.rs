use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Operator,
    Parenthesis,
    Number,
    Identifier,
}

/// Every operator the tokenizer can emit, unary minus included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    /// Unary minus. Never read from source directly; the tokenizer
    /// rewrites `-` into this when no operand precedes it.
    Negate,
    Multiply,
    Divide,
    Power,
    Log,
    Sqrt,
    Sin,
    Cos,
    Tan,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Negate => "u-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
            Operator::Log => "log",
            Operator::Sqrt => "sqrt",
            Operator::Sin => "sin",
            Operator::Cos => "cos",
            Operator::Tan => "tan",
        }
    }

    /// Keyword operators are spelled with letters and could be the start
    /// of a longer identifier, so they are only recognised once the word ends.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Operator::Log | Operator::Sqrt | Operator::Sin | Operator::Cos | Operator::Tan
        )
    }

    /// Operators written before their single operand.
    pub fn is_prefix(&self) -> bool {
        matches!(
            self,
            Operator::Negate | Operator::Sqrt | Operator::Sin | Operator::Cos | Operator::Tan
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Operator(Operator),
    OpenParen,
    CloseParen,
    Number(String),
    Identifier(String),
}

/// Source spellings of the reserved tokens. Unary minus has none.
static RESERVED: [Token; 12] = [
    Token::Operator(Operator::Add),
    Token::Operator(Operator::Subtract),
    Token::Operator(Operator::Multiply),
    Token::Operator(Operator::Divide),
    Token::Operator(Operator::Power),
    Token::Operator(Operator::Sqrt),
    Token::Operator(Operator::Log),
    Token::Operator(Operator::Sin),
    Token::Operator(Operator::Cos),
    Token::Operator(Operator::Tan),
    Token::OpenParen,
    Token::CloseParen,
];

/// Looks up the reserved token spelled exactly `text`.
pub fn reserved(text: &str) -> Option<Token> {
    RESERVED.iter().find(|token| token.text() == text).cloned()
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Token::Operator(op) => op.symbol(),
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Number(text) | Token::Identifier(text) => text,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Operator(_) => TokenKind::Operator,
            Token::OpenParen | Token::CloseParen => TokenKind::Parenthesis,
            Token::Number(_) => TokenKind::Number,
            Token::Identifier(_) => TokenKind::Identifier,
        }
    }

    /// True for tokens that can never be a prefix of a longer token and
    /// may be emitted as soon as they are seen.
    pub fn is_immediate(&self) -> bool {
        match self {
            Token::Operator(op) => !op.is_keyword(),
            Token::OpenParen | Token::CloseParen => true,
            Token::Number(_) | Token::Identifier(_) => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
