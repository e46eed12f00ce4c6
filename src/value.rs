/// The result of evaluating an expression.
///
/// `NOT` is the only producer of `Bool`. Arithmetic reads a boolean as `1.0`
/// or `0.0` and always yields a `Number`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
}

impl Value {
    pub fn as_number(self) -> f64 {
        match self {
            Value::Number(n) => n,
            Value::Bool(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Zero and `false` are falsy; everything else, NaN included, is truthy.
    pub fn is_truthy(self) -> bool {
        match self {
            Value::Number(n) => n != 0.0,
            Value::Bool(b) => b,
        }
    }

    pub fn is_zero(self) -> bool {
        self.as_number() == 0.0
    }
}

impl std::ops::Not for Value {
    type Output = Value;

    fn not(self) -> Value {
        Value::Bool(!self.is_truthy())
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value::Number(-self.as_number())
    }
}

impl std::ops::Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        Value::Number(self.as_number() * rhs.as_number())
    }
}

/// Callers reject a zero divisor before dividing.
impl std::ops::Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        Value::Number(self.as_number() / rhs.as_number())
    }
}

/// Truncated remainder: the sign follows the dividend.
impl std::ops::Rem for Value {
    type Output = Value;

    fn rem(self, rhs: Value) -> Value {
        Value::Number(self.as_number() % rhs.as_number())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n:?}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
