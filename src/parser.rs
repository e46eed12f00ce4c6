use miette::SourceSpan;

use crate::{
    error::EvalError,
    lexer::{Token, TokenKind},
    value::Value,
    Lexer,
};

fn span_of(token: &Token<'_>) -> SourceSpan {
    (token.offset, token.slice.len()).into()
}

/// Recursive-descent parser that evaluates while it parses.
///
/// ```text
/// expression := term
/// term       := factor ( ( "*" | "/" | "%" ) factor )*
/// factor     := NUMBER | "(" expression ")" | NOT factor | "-" factor
/// ```
///
/// `current` is always the next unconsumed token; only [`Parser::eat`]
/// replaces it.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    consumed_end: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, EvalError> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            consumed_end: 0,
        })
    }

    /// Evaluates one expression. Tokens after it are left unconsumed.
    pub fn parse(&mut self) -> Result<Value, EvalError> {
        self.expression()
    }

    /// Like [`Parser::parse`], but the expression must cover the whole input.
    pub fn parse_all(&mut self) -> Result<Value, EvalError> {
        let value = self.expression()?;
        match self.current.kind {
            TokenKind::Eof => Ok(value),
            found => Err(EvalError::TrailingInput {
                found,
                span: span_of(&self.current),
            }),
        }
    }

    /// Consumes the current token if it has the `expected` kind and scans the
    /// next one.
    pub fn eat(&mut self, expected: TokenKind) -> Result<Token<'a>, EvalError> {
        if self.current.kind != expected {
            return Err(EvalError::UnexpectedToken {
                expected,
                found: self.current.kind,
                span: span_of(&self.current),
            });
        }

        let next = self.lexer.next_token()?;
        let token = std::mem::replace(&mut self.current, next);
        self.consumed_end = token.offset + token.slice.len();
        Ok(token)
    }

    pub fn expression(&mut self) -> Result<Value, EvalError> {
        self.term()
    }

    pub fn term(&mut self) -> Result<Value, EvalError> {
        let mut result = self.factor()?;

        loop {
            match self.current.kind {
                TokenKind::Multiply => {
                    self.eat(TokenKind::Multiply)?;
                    result = result * self.factor()?;
                }
                TokenKind::Divide => {
                    self.eat(TokenKind::Divide)?;
                    let (divisor, span) = self.operand()?;
                    if divisor.is_zero() {
                        return Err(EvalError::DivisionByZero { span });
                    }
                    result = result / divisor;
                }
                TokenKind::Modulo => {
                    self.eat(TokenKind::Modulo)?;
                    let (divisor, span) = self.operand()?;
                    if divisor.is_zero() {
                        return Err(EvalError::ModuloByZero { span });
                    }
                    result = result % divisor;
                }
                _ => return Ok(result),
            }
        }
    }

    pub fn factor(&mut self) -> Result<Value, EvalError> {
        if let Some(n) = self.current.number() {
            self.eat(TokenKind::Number)?;
            return Ok(Value::Number(n));
        }

        match self.current.kind {
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let result = self.expression()?;
                self.eat(TokenKind::RParen)?;
                Ok(result)
            }
            TokenKind::Not => {
                self.eat(TokenKind::Not)?;
                Ok(!self.factor()?)
            }
            TokenKind::Minus => {
                self.eat(TokenKind::Minus)?;
                Ok(-self.factor()?)
            }
            found => Err(EvalError::InvalidFactor {
                found,
                span: span_of(&self.current),
            }),
        }
    }

    /// A right-hand factor together with the source span it was read from.
    fn operand(&mut self) -> Result<(Value, SourceSpan), EvalError> {
        let start = self.current.offset;
        let value = self.factor()?;
        Ok((value, (start..self.consumed_end).into()))
    }
}
