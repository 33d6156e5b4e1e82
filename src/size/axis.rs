//! Axis identifiers and per-axis value pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two layout axes. Each axis is resolved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Width, Axis::Height];

    /// Name used in configuration keys and style declarations
    pub fn name(self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value for each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisPair<T> {
    pub width: T,
    pub height: T,
}

impl<T> AxisPair<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Width => &mut self.width,
            Axis::Height => &mut self.height,
        }
    }

    /// Apply `f` to both values, passing the axis each one belongs to
    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> AxisPair<U> {
        AxisPair {
            width: f(Axis::Width, self.width),
            height: f(Axis::Height, self.height),
        }
    }

    /// Fallible [`AxisPair::map`] over borrowed values. Width is evaluated first.
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(Axis, &T) -> Result<U, E>,
    ) -> Result<AxisPair<U>, E> {
        Ok(AxisPair {
            width: f(Axis::Width, &self.width)?,
            height: f(Axis::Height, &self.height)?,
        })
    }
}
