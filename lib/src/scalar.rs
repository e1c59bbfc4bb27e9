//! Coordinate types a [`Point`](crate::Point) can be built from.
//!
//! Every scalar belongs to one of three kinds. The kind decides how two values
//! are compared: integers compare exactly while reals and complex numbers are
//! considered equal when they are closer than [`EPSILON`].

use num_complex::Complex;
use num_traits::Num;
use std::fmt;

/// Absolute tolerance used when comparing real and complex coordinates.
pub const EPSILON: f64 = 1e-5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    Integer,
    Real,
    Complex,
}

pub trait Scalar: Num + Copy + fmt::Debug + fmt::Display {
    const KIND: ScalarKind;

    /// Magnitude of `self - other` in double precision. For complex values this
    /// is the modulus of the difference.
    fn separation(self, other: Self) -> f64;

    /// Real part in double precision.
    fn real(self) -> f64;

    /// Converts a real number back into the scalar type. Integers truncate
    /// toward zero, complex numbers get a zero imaginary part.
    fn from_real(value: f64) -> Self;

    fn approx_eq(self, other: Self) -> bool {
        match Self::KIND {
            ScalarKind::Integer => self == other,
            ScalarKind::Real | ScalarKind::Complex => self.separation(other) < EPSILON,
        }
    }
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::Integer;

                fn separation(self, other: Self) -> f64 {
                    (self as f64 - other as f64).abs()
                }

                fn real(self) -> f64 {
                    self as f64
                }

                fn from_real(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

macro_rules! real_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::Real;

                fn separation(self, other: Self) -> f64 {
                    (self - other).abs() as f64
                }

                fn real(self) -> f64 {
                    self as f64
                }

                fn from_real(value: f64) -> Self {
                    value as $t
                }
            }

            impl Scalar for Complex<$t> {
                const KIND: ScalarKind = ScalarKind::Complex;

                fn separation(self, other: Self) -> f64 {
                    (self - other).norm() as f64
                }

                fn real(self) -> f64 {
                    self.re as f64
                }

                fn from_real(value: f64) -> Self {
                    Complex::new(value as $t, 0.0)
                }
            }
        )*
    };
}

integer_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
real_scalar!(f32, f64);
