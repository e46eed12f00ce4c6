use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::TokenKind;

/// Everything that can abort an evaluation.
///
/// Scanning errors carry the 1-based line and column of the offending input;
/// every variant carries a byte span so a caller holding the source text can
/// render it with `miette::Report::with_source_code`.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("unexpected character {found} at line {line}, column {column}")]
    #[diagnostic(code(scalc::unexpected_character))]
    UnexpectedCharacter {
        found: char,
        line: usize,
        column: usize,
        #[label("this input character")]
        span: SourceSpan,
        #[help]
        help: Option<String>,
    },

    #[error("malformed number {literal} at line {line}, column {column}")]
    #[diagnostic(code(scalc::malformed_number))]
    MalformedNumber {
        literal: String,
        line: usize,
        column: usize,
        #[label("this numeric literal")]
        span: SourceSpan,
    },

    #[error("expected {expected}, got {found}")]
    #[diagnostic(code(scalc::unexpected_token))]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid factor")]
    #[diagnostic(
        code(scalc::invalid_factor),
        help("a factor is a number, a parenthesized expression, or NOT / - followed by a factor")
    )]
    InvalidFactor {
        found: TokenKind,
        #[label("this token")]
        span: SourceSpan,
    },

    #[error("division by zero")]
    #[diagnostic(code(scalc::division_by_zero))]
    DivisionByZero {
        #[label("this divisor is zero")]
        span: SourceSpan,
    },

    #[error("modulo by zero")]
    #[diagnostic(code(scalc::modulo_by_zero))]
    ModuloByZero {
        #[label("this divisor is zero")]
        span: SourceSpan,
    },

    #[error("unexpected {found} after the end of the expression")]
    #[diagnostic(code(scalc::trailing_input))]
    TrailingInput {
        found: TokenKind,
        #[label("unconsumed input starts here")]
        span: SourceSpan,
    },
}

impl EvalError {
    /// The 1-based `(line, column)` of a scanning error.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            EvalError::UnexpectedCharacter { line, column, .. }
            | EvalError::MalformedNumber { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}
