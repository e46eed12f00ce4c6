pub mod error;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod value;

pub use error::EvalError;
pub use lexer::*;
pub use parser::Parser;
pub use value::Value;

/// Evaluates one expression.
///
/// Only as much input as the grammar accepts is consumed; anything after the
/// expression is ignored, so `evaluate("2+3")` is `2.0`.
pub fn evaluate(text: &str) -> Result<Value, EvalError> {
    let mut parser = Parser::new(Lexer::new(text))?;
    parser.parse()
}

/// Evaluates one expression that must span the whole input.
pub fn evaluate_strict(text: &str) -> Result<Value, EvalError> {
    let mut parser = Parser::new(Lexer::new(text))?;
    parser.parse_all()
}

/// Scans the whole input, EOF token included.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, EvalError> {
    Lexer::new(text).collect()
}
