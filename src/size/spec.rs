//! Size configuration record
//!
//! Mirrors the configuration shape:
//!
//! ```yaml
//! width: element
//! height: element
//! min: { width: 100, height: 15 }
//! max: { width: element+200, height: null }
//! ```

use serde::{Deserialize, Serialize};

use super::axis::{Axis, AxisPair};
use super::error::SizeError;
use super::expr::SizeExpr;

/// A size leaf as written in configuration: a number or an expression string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Number(f64),
    Expr(String),
}

impl SizeValue {
    pub fn element() -> Self {
        SizeValue::Expr("element".to_string())
    }

    /// Parse into an evaluable expression
    pub fn parse(&self) -> Result<SizeExpr, SizeError> {
        match self {
            SizeValue::Number(value) => SizeExpr::literal(*value),
            SizeValue::Expr(text) => text.parse(),
        }
    }
}

impl From<f64> for SizeValue {
    fn from(value: f64) -> Self {
        SizeValue::Number(value)
    }
}

impl From<u32> for SizeValue {
    fn from(value: u32) -> Self {
        SizeValue::Number(f64::from(value))
    }
}

impl From<&str> for SizeValue {
    fn from(text: &str) -> Self {
        SizeValue::Expr(text.to_string())
    }
}

impl From<String> for SizeValue {
    fn from(text: String) -> Self {
        SizeValue::Expr(text)
    }
}

/// Per-axis target size plus optional lower and upper bounds.
///
/// `None` at a bound means unbounded. `None` at a target means the editor
/// takes the measured size of the element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeSpec {
    pub width: Option<SizeValue>,
    pub height: Option<SizeValue>,
    pub min: AxisPair<Option<SizeValue>>,
    pub max: AxisPair<Option<SizeValue>>,
}

impl Default for SizeSpec {
    /// Follow the element, never narrower than 100 or shorter than 15
    fn default() -> Self {
        Self {
            width: Some(SizeValue::element()),
            height: Some(SizeValue::element()),
            min: AxisPair::new(Some(100u32.into()), Some(15u32.into())),
            max: AxisPair::new(None, None),
        }
    }
}

impl SizeSpec {
    /// Targets with no bounds
    pub fn new(width: impl Into<SizeValue>, height: impl Into<SizeValue>) -> Self {
        Self {
            width: Some(width.into()),
            height: Some(height.into()),
            min: AxisPair::default(),
            max: AxisPair::default(),
        }
    }

    pub fn with_target(mut self, axis: Axis, value: impl Into<SizeValue>) -> Self {
        *self.target_mut(axis) = Some(value.into());
        self
    }

    pub fn with_min(mut self, axis: Axis, value: impl Into<SizeValue>) -> Self {
        *self.min.get_mut(axis) = Some(value.into());
        self
    }

    pub fn with_max(mut self, axis: Axis, value: impl Into<SizeValue>) -> Self {
        *self.max.get_mut(axis) = Some(value.into());
        self
    }

    pub fn target(&self, axis: Axis) -> Option<&SizeValue> {
        match axis {
            Axis::Width => self.width.as_ref(),
            Axis::Height => self.height.as_ref(),
        }
    }

    pub fn target_mut(&mut self, axis: Axis) -> &mut Option<SizeValue> {
        match axis {
            Axis::Width => &mut self.width,
            Axis::Height => &mut self.height,
        }
    }

    /// Parse every leaf without measuring anything.
    ///
    /// Catches malformed expressions and `element/0` at configuration time;
    /// non-finite results that depend on a measurement still surface later,
    /// from [`resolve`](super::resolve).
    pub fn validate(&self) -> Result<(), SizeError> {
        self.parse_leaves().map(|_| ())
    }

    /// Parse every leaf, keyed by group and axis
    pub fn parse_leaves(&self) -> Result<ParsedSizes, SizeError> {
        let target = AxisPair::new(self.width.clone(), self.height.clone());
        Ok(ParsedSizes {
            target: parse_group(&target, None)?,
            min: parse_group(&self.min, Some("min"))?,
            max: parse_group(&self.max, Some("max"))?,
        })
    }
}

/// Every leaf of a [`SizeSpec`] parsed into an expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedSizes {
    pub target: AxisPair<Option<SizeExpr>>,
    pub min: AxisPair<Option<SizeExpr>>,
    pub max: AxisPair<Option<SizeExpr>>,
}

fn parse_group(
    group: &AxisPair<Option<SizeValue>>,
    name: Option<&str>,
) -> Result<AxisPair<Option<SizeExpr>>, SizeError> {
    group.try_map(|axis, leaf| {
        leaf.as_ref()
            .map(|value| value.parse().map_err(|e| e.at(leaf_path(name, axis))))
            .transpose()
    })
}

pub(crate) fn leaf_path(group: Option<&str>, axis: Axis) -> String {
    match group {
        Some(group) => format!("{}.{}", group, axis),
        None => axis.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::expr::Operator;

    #[test]
    fn test_default_spec_is_valid() {
        let spec = SizeSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.min.width, Some(SizeValue::Number(100.0)));
        assert_eq!(spec.max.height, None);
    }

    #[test]
    fn test_builder_sets_leaves() {
        let spec = SizeSpec::new("element+10", 30u32)
            .with_min(Axis::Width, 50u32)
            .with_max(Axis::Height, "element*2");

        let parsed = spec.parse_leaves().unwrap();
        assert_eq!(
            parsed.target.width,
            Some(SizeExpr::Relative {
                op: Operator::Add,
                operand: 10.0
            })
        );
        assert_eq!(parsed.target.height, Some(SizeExpr::Literal(30.0)));
        assert_eq!(parsed.min.width, Some(SizeExpr::Literal(50.0)));
        assert_eq!(parsed.min.height, None);
        assert!(parsed.max.height.is_some());
    }

    #[test]
    fn test_validate_reports_leaf_path() {
        let spec = SizeSpec::new("element", "element").with_max(Axis::Height, "abc");
        let err = spec.validate().unwrap_err();
        assert_eq!(
            err,
            SizeError::Malformed("abc".into()).at("max.height")
        );
    }

    #[test]
    fn test_untagged_yaml_leaf() {
        let number: SizeValue = serde_yaml::from_str("42").unwrap();
        assert_eq!(number, SizeValue::Number(42.0));
        let expr: SizeValue = serde_yaml::from_str("element + 5").unwrap();
        assert_eq!(expr, SizeValue::Expr("element + 5".into()));
    }
}
