//! Configuration errors raised while parsing or resolving sizes

use super::axis::Axis;

/// A size configuration that cannot produce a finite layout value.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeError {
    /// Neither a plain number nor an `element` expression
    Malformed(String),
    /// Literal below zero
    Negative(f64),
    /// `element/0`
    DivisionByZero(String),
    /// The adapter measured NaN or infinity
    InvalidMeasurement { axis: Axis, value: f64 },
    /// Evaluation overflowed or otherwise left the finite range
    NonFinite(String),
    /// Error at a specific leaf of the size record (e.g. `min.width`)
    Field {
        path: String,
        source: Box<SizeError>,
    },
}

impl SizeError {
    /// Attach the configuration path of the leaf that failed
    pub fn at(self, path: impl Into<String>) -> Self {
        SizeError::Field {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error with any field context stripped
    pub fn cause(&self) -> &SizeError {
        match self {
            SizeError::Field { source, .. } => source.cause(),
            other => other,
        }
    }
}

impl std::fmt::Display for SizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeError::Malformed(s) => write!(f, "malformed size expression '{}'", s),
            SizeError::Negative(v) => write!(f, "size must not be negative (got {})", v),
            SizeError::DivisionByZero(s) => write!(f, "division by zero in '{}'", s),
            SizeError::InvalidMeasurement { axis, value } => {
                write!(f, "measured {} is not finite ({})", axis, value)
            }
            SizeError::NonFinite(s) => write!(f, "'{}' does not evaluate to a finite size", s),
            SizeError::Field { path, source } => write!(f, "{}: {}", path, source),
        }
    }
}

impl std::error::Error for SizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SizeError::Field { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
