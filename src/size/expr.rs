//! Size expression language
//!
//! A size is either a plain non-negative number or an expression relative to
//! the measured size of the display element:
//!
//! ```text
//! element            measured size
//! element + N        measured size plus N
//! element - N        measured size minus N
//! element * N        measured size times N
//! element / N        measured size divided by N (N != 0)
//! ```
//!
//! Whitespace around the operator is allowed. `N` is an unsigned decimal.

use std::fmt;
use std::str::FromStr;

use super::error::SizeError;

const ELEMENT: &str = "element";

/// Arithmetic operator of a relative expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

/// A parsed size leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeExpr {
    /// Fixed size in device-independent units
    Literal(f64),
    /// Exactly the measured size
    Element,
    /// Measured size combined with a constant
    Relative { op: Operator, operand: f64 },
}

impl SizeExpr {
    /// Build a literal, rejecting negative and non-finite numbers
    pub fn literal(value: f64) -> Result<Self, SizeError> {
        if !value.is_finite() {
            return Err(SizeError::NonFinite(value.to_string()));
        }
        if value < 0.0 {
            return Err(SizeError::Negative(value));
        }
        Ok(SizeExpr::Literal(value))
    }

    /// Whether evaluation needs the element's measured size
    pub fn references_element(&self) -> bool {
        !matches!(self, SizeExpr::Literal(_))
    }

    /// Evaluate against the element. `measured` is only called for
    /// element-relative expressions.
    pub fn evaluate(&self, measured: impl FnOnce() -> f64) -> f64 {
        match *self {
            SizeExpr::Literal(value) => value,
            SizeExpr::Element => measured(),
            SizeExpr::Relative { op, operand } => op.apply(measured(), operand),
        }
    }
}

impl FromStr for SizeExpr {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let malformed = || SizeError::Malformed(text.to_string());

        let Some(rest) = text.strip_prefix(ELEMENT) else {
            let value = parse_unsigned(text).ok_or_else(malformed)?;
            return SizeExpr::literal(value);
        };

        let rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(SizeExpr::Element);
        }

        let mut chars = rest.chars();
        let op = chars
            .next()
            .and_then(Operator::from_char)
            .ok_or_else(malformed)?;
        let operand = parse_unsigned(chars.as_str().trim()).ok_or_else(malformed)?;

        if op == Operator::Div && operand == 0.0 {
            return Err(SizeError::DivisionByZero(text.to_string()));
        }

        Ok(SizeExpr::Relative { op, operand })
    }
}

impl fmt::Display for SizeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeExpr::Literal(value) => write!(f, "{}", value),
            SizeExpr::Element => f.write_str(ELEMENT),
            SizeExpr::Relative { op, operand } => {
                write!(f, "{}{}{}", ELEMENT, op.symbol(), operand)
            }
        }
    }
}

/// Digits with an optional fractional part. Signs, exponents, units and
/// `inf`/`nan` spellings are rejected.
fn parse_unsigned(text: &str) -> Option<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}
