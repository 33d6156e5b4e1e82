//! Resolution of a [`SizeSpec`] into concrete editor dimensions.

use serde::Serialize;

use super::axis::Axis;
use super::error::SizeError;
use super::expr::SizeExpr;
use super::spec::{leaf_path, SizeSpec};

/// Final size along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedAxis {
    /// Target after clamping
    pub value: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ResolvedAxis {
    /// Apply the floor, then the ceiling. A floor above the ceiling pins the
    /// value to the ceiling.
    pub fn clamped(value: f64, min: Option<f64>, max: Option<f64>) -> Self {
        let mut clamped = value;
        if let Some(min) = min {
            clamped = clamped.max(min);
        }
        if let Some(max) = max {
            clamped = clamped.min(max);
        }
        Self {
            value: clamped,
            min,
            max,
        }
    }
}

/// Concrete editor dimensions, ready to be applied by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedSize {
    pub width: ResolvedAxis,
    pub height: ResolvedAxis,
}

impl ResolvedSize {
    pub fn axis(&self, axis: Axis) -> &ResolvedAxis {
        match axis {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }

    /// Style-level declarations: `width`, `min-width`, `max-width`, then the
    /// same for height. Absent bounds are omitted.
    pub fn style_declarations(&self) -> Vec<(String, f64)> {
        let mut declarations = Vec::with_capacity(6);
        for axis in Axis::ALL {
            let resolved = self.axis(axis);
            declarations.push((axis.name().to_string(), resolved.value));
            if let Some(min) = resolved.min {
                declarations.push((format!("min-{}", axis), min));
            }
            if let Some(max) = resolved.max {
                declarations.push((format!("max-{}", axis), max));
            }
        }
        declarations
    }
}

/// Resolve `spec` against the display element.
///
/// `measure` reports the element's current rendered size along an axis and is
/// only queried for leaves that reference `element`. Every leaf is evaluated
/// before clamping; the first leaf that fails aborts resolution.
pub fn resolve(spec: &SizeSpec, measure: impl Fn(Axis) -> f64) -> Result<ResolvedSize, SizeError> {
    let parsed = spec.parse_leaves()?;

    let evaluate = |group: Option<&str>, axis: Axis, expr: SizeExpr| {
        evaluate_leaf(expr, axis, &measure).map_err(|e| e.at(leaf_path(group, axis)))
    };

    // A missing target follows the element
    let target = parsed
        .target
        .try_map(|axis, expr| evaluate(None, axis, expr.unwrap_or(SizeExpr::Element)))?;
    let min = parsed
        .min
        .try_map(|axis, expr| expr.map(|e| evaluate(Some("min"), axis, e)).transpose())?;
    let max = parsed
        .max
        .try_map(|axis, expr| expr.map(|e| evaluate(Some("max"), axis, e)).transpose())?;

    let clamp = |axis| ResolvedAxis::clamped(*target.get(axis), *min.get(axis), *max.get(axis));
    let resolved = ResolvedSize {
        width: clamp(Axis::Width),
        height: clamp(Axis::Height),
    };

    tracing::trace!(
        width = resolved.width.value,
        height = resolved.height.value,
        "resolved editor size"
    );

    Ok(resolved)
}

fn evaluate_leaf(
    expr: SizeExpr,
    axis: Axis,
    measure: &impl Fn(Axis) -> f64,
) -> Result<f64, SizeError> {
    let measured = if expr.references_element() {
        let value = measure(axis);
        if !value.is_finite() {
            return Err(SizeError::InvalidMeasurement { axis, value });
        }
        value
    } else {
        0.0
    };

    let value = expr.evaluate(|| measured);
    if !value.is_finite() {
        return Err(SizeError::NonFinite(expr.to_string()));
    }
    Ok(value)
}
