//! Editor size resolution.
//!
//! Turns a [`SizeSpec`] (literal numbers, or expressions relative to the
//! display element's measured size) into a [`ResolvedSize`] with concrete
//! width, height and min/max bounds.
//!
//! # Example
//!
//! ```
//! use inline_edit::size::{resolve, Axis, SizeSpec};
//!
//! let spec = SizeSpec::new("element+10", "element").with_min(Axis::Width, 50u32);
//! let size = resolve(&spec, |axis| match axis {
//!     Axis::Width => 40.0,
//!     Axis::Height => 18.0,
//! })
//! .unwrap();
//!
//! assert_eq!(size.width.value, 50.0);
//! assert_eq!(size.height.value, 18.0);
//! ```

mod axis;
mod error;
mod expr;
mod resolve;
mod spec;

pub use axis::{Axis, AxisPair};
pub use error::SizeError;
pub use expr::{Operator, SizeExpr};
pub use resolve::{resolve, ResolvedAxis, ResolvedSize};
pub use spec::{ParsedSizes, SizeSpec, SizeValue};
