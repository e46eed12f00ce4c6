use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    If,
    Then,
    Else,
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Modulo,
    And,
    Or,
    Not,
    Equal,
    NotEqual,
    Less,
    Greater,
    Number,
    LParen,
    RParen,
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TokenKind::If => "IF",
                TokenKind::Then => "THEN",
                TokenKind::Else => "ELSE",
                TokenKind::Plus => "PLUS",
                TokenKind::Minus => "MINUS",
                TokenKind::Multiply => "MULTIPLY",
                TokenKind::Divide => "DIVIDE",
                TokenKind::Power => "POWER",
                TokenKind::Modulo => "MODULO",
                TokenKind::And => "AND",
                TokenKind::Or => "OR",
                TokenKind::Not => "NOT",
                TokenKind::Equal => "EQUAL",
                TokenKind::NotEqual => "NOT_EQUAL",
                TokenKind::Less => "LESS",
                TokenKind::Greater => "GREATER",
                TokenKind::Number => "NUMBER",
                TokenKind::LParen => "LPAREN",
                TokenKind::RParen => "RPAREN",
                TokenKind::Eof => "EOF",
            }
        )
    }
}

/// The payload of a token: the converted number, or the canonical text of an
/// operator or keyword (keywords are upper-cased).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Number(f64),
    Text(&'static str),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n:?}"),
            Literal::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// `None` only for [`TokenKind::Eof`].
    pub value: Option<Literal>,
    pub slice: &'a str,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Token<'_> {
    pub fn number(&self) -> Option<f64> {
        match self.value {
            Some(Literal::Number(n)) => Some(n),
            _ => None,
        }
    }
}

impl<'a> std::fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(
                f,
                "Token({}, {}, pos={}:{})",
                self.kind, value, self.line, self.column
            ),
            None => write!(f, "Token({}, None, pos={}:{})", self.kind, self.line, self.column),
        }
    }
}

fn keyword(word: &str) -> Option<(TokenKind, &'static str)> {
    let entry = match word {
        "IF" => (TokenKind::If, "IF"),
        "THEN" => (TokenKind::Then, "THEN"),
        "ELSE" => (TokenKind::Else, "ELSE"),
        "AND" => (TokenKind::And, "AND"),
        "OR" => (TokenKind::Or, "OR"),
        "NOT" => (TokenKind::Not, "NOT"),
        _ => return None,
    };
    Some(entry)
}

/// Single-pass scanner over a borrowed source string.
///
/// Keeps one character of lookahead (`current`) and the 1-based line and
/// column of that character. Only `advance` moves the cursor.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    current: Option<char>,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            pos: 0,
            current: input.chars().next(),
            line: 1,
            column: 1,
            finished: false,
        }
    }

    fn advance(&mut self) {
        let Some(c) = self.current else {
            return;
        };
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        }
        self.pos += c.len_utf8();
        self.column += 1;
        self.current = self.source[self.pos..].chars().next();
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn number(&mut self) -> Result<Token<'a>, EvalError> {
        let (offset, line, column) = (self.pos, self.line, self.column);
        while matches!(self.current, Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }

        let literal = &self.source[offset..self.pos];
        let n = literal
            .parse::<f64>()
            .map_err(|_| EvalError::MalformedNumber {
                literal: literal.to_string(),
                line,
                column,
                span: (offset..self.pos).into(),
            })?;

        Ok(Token {
            kind: TokenKind::Number,
            value: Some(Literal::Number(n)),
            slice: literal,
            offset,
            line,
            column,
        })
    }

    fn word(&mut self, first: char) -> Result<Token<'a>, EvalError> {
        let (offset, line, column) = (self.pos, self.line, self.column);
        while matches!(self.current, Some(c) if c.is_alphanumeric()) {
            self.advance();
        }

        let literal = &self.source[offset..self.pos];
        match keyword(&literal.to_uppercase()) {
            Some((kind, text)) => Ok(Token {
                kind,
                value: Some(Literal::Text(text)),
                slice: literal,
                offset,
                line,
                column,
            }),
            None => Err(EvalError::UnexpectedCharacter {
                found: first,
                line,
                column,
                span: (offset..self.pos).into(),
                help: Some(format!("`{literal}` is not a keyword (IF, THEN, ELSE, AND, OR, NOT)")),
            }),
        }
    }

    /// Scans the next token, or an EOF token once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'a>, EvalError> {
        self.skip_whitespace();

        let Some(c) = self.current else {
            return Ok(Token {
                kind: TokenKind::Eof,
                value: None,
                slice: "",
                offset: self.pos,
                line: self.line,
                column: self.column,
            });
        };

        if c.is_ascii_digit() {
            return self.number();
        }
        if c.is_alphabetic() {
            return self.word(c);
        }

        let (kind, text) = match c {
            '+' => (TokenKind::Plus, "+"),
            '-' => (TokenKind::Minus, "-"),
            '*' => (TokenKind::Multiply, "*"),
            '/' => (TokenKind::Divide, "/"),
            '^' => (TokenKind::Power, "^"),
            '%' => (TokenKind::Modulo, "%"),
            '(' => (TokenKind::LParen, "("),
            ')' => (TokenKind::RParen, ")"),
            '<' => (TokenKind::Less, "<"),
            '>' => (TokenKind::Greater, ">"),
            _ => {
                return Err(EvalError::UnexpectedCharacter {
                    found: c,
                    line: self.line,
                    column: self.column,
                    span: (self.pos, c.len_utf8()).into(),
                    help: None,
                })
            }
        };

        let offset = self.pos;
        self.advance();
        Ok(Token {
            kind,
            value: Some(Literal::Text(text)),
            slice: &self.source[offset..self.pos],
            offset,
            line: self.line,
            column: self.column - 1,
        })
    }
}

/// Yields every token up to and including EOF, stopping after the first error.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let next = self.next_token();
        if !matches!(&next, Ok(token) if token.kind != TokenKind::Eof) {
            self.finished = true;
        }
        Some(next)
    }
}
