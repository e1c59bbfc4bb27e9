//! Generic 2D points and polylines over integer, real and complex coordinates.

pub mod error;
pub mod line;
pub mod point;
pub mod scalar;
#[cfg(feature = "svg")]
pub mod svg;

pub use error::{LineError, Result};
pub use line::Line;
pub use num_complex::Complex;
pub use point::Point;
pub use scalar::{Scalar, ScalarKind, EPSILON};
