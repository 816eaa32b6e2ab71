//! Runtime values and declared types.

use std::cmp::Ordering;
use std::fmt;

/// Declared type of a variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VarType {
    Integer,
    Double,
}

impl VarType {
    /// Resolve an already lower-cased type name.
    pub fn from_name(name: &str) -> Option<VarType> {
        match name {
            "integer" => Some(VarType::Integer),
            "double" => Some(VarType::Double),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Integer => "integer",
            VarType::Double => "double",
        }
    }

    /// Parse a literal as a value of this type.
    ///
    /// `integer` accepts whole numbers only; `double` accepts anything
    /// `f64` parsing accepts.
    pub fn parse_literal(self, text: &str) -> Option<Value> {
        match self {
            VarType::Integer => text.parse::<i64>().ok().map(Value::Int),
            VarType::Double => text.parse::<f64>().ok().map(Value::Double),
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric value held by a variable.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Value {
    Int(i64),
    Double(f64),
}

impl Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed int/double arithmetic degrades to double"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Double(d) => d,
        }
    }

    /// `self + other`. Int + Int stays Int (wrapping); anything else is Double.
    #[must_use]
    pub fn plus(self, other: Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_add(b)),
            (a, b) => Value::Double(a.as_f64() + b.as_f64()),
        }
    }

    /// `self - other`. Int - Int stays Int (wrapping); anything else is Double.
    #[must_use]
    pub fn minus(self, other: Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_sub(b)),
            (a, b) => Value::Double(a.as_f64() - b.as_f64()),
        }
    }

    /// Numeric ordering. `None` when either side is NaN.
    pub fn compare(self, other: Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Double(d) if d.is_nan() => f.write_str("nan"),
            Value::Double(d) if d.is_infinite() => {
                f.write_str(if d.is_sign_negative() { "-inf" } else { "inf" })
            }
            // Debug keeps the fractional part on whole numbers: `5.0`.
            Value::Double(d) => write!(f, "{d:?}"),
        }
    }
}

#[cfg(test)]
mod tests;
