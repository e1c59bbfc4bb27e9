use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    pub fn origin() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Length of the segment from `self` to `other`.
    ///
    /// Each axis contributes the magnitude of its coordinate difference, so
    /// integer and real points get the usual Euclidean distance in double
    /// precision and complex points get the modulus of the complex difference.
    pub fn distance(&self, other: &Self) -> f64 {
        let xs = self.x.separation(other.x);
        let ys = self.y.separation(other.y);
        ((xs * xs) + (ys * ys)).sqrt()
    }
}

impl<T: Scalar> Default for Point<T> {
    fn default() -> Self {
        Point::origin()
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}

impl<T: Scalar> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x.approx_eq(other.x) && self.y.approx_eq(other.y)
    }
}

impl<T: Scalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
