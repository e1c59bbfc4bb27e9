use crate::error::{LineError, Result};
use crate::point::Point;
use crate::scalar::Scalar;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Index, IndexMut};

/// An open polyline with a fixed, non-zero number of vertices.
///
/// Adding points or other lines never grows a line in place, the `+`
/// operators always return a new `Line`.
#[derive(Debug)]
pub struct Line<T> {
    vertices: Vec<Point<T>>,
}

// A line always holds at least one vertex.
#[allow(clippy::len_without_is_empty)]
impl<T: Scalar> Line<T> {
    /// Creates a line of `n` points, all at the origin.
    pub fn with_len(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(LineError::empty());
        }

        Ok(Line {
            vertices: vec![Point::origin(); n],
        })
    }

    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point<T>>,
    {
        Line::try_from(points.into_iter().collect::<Vec<_>>())
    }

    /// Creates `n` points with coordinates drawn uniformly from the real parts
    /// of `m1` and `m2`, using a generator seeded from system entropy.
    pub fn random(m1: T, m2: T, n: usize) -> Result<Self> {
        Line::random_with(&mut StdRng::from_entropy(), m1, m2, n)
    }

    /// Like [`Line::random`] but draws from `rng`.
    ///
    /// Both coordinates of every point are drawn as `f64` from the same
    /// half-open range `[min, max)` spanned by `real(m1)` and `real(m2)`, then
    /// converted with [`Scalar::from_real`]. The bound holds for the draw, not
    /// the converted value: an `f32` draw just below `max` may round up to it.
    pub fn random_with<R: Rng>(rng: &mut R, m1: T, m2: T, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(LineError::empty());
        }

        let (a, b) = (m1.real(), m2.real());
        let (low, high) = (a.min(b), a.max(b));

        if !a.is_finite() || !b.is_finite() || !(high - low).is_finite() {
            return Err(LineError::InvalidArgument(format!(
                "cannot sample from range [{a}, {b})"
            )));
        }

        let mut draw = || {
            if low < high {
                rng.gen_range(low..high)
            } else {
                low
            }
        };

        let mut vertices = Vec::with_capacity(n);

        for _ in 0..n {
            let x = draw();
            let y = draw();
            vertices.push(Point::new(T::from_real(x), T::from_real(y)));
        }

        debug!("Sampled {} points in [{}, {})", n, low, high);
        Ok(Line { vertices })
    }

    /// The letter "H" drawn as one stroke: up the left side, down to the
    /// middle, up to the top right and down the right side.
    pub fn h_shape(width: T, height: T) -> Self {
        let zero = T::zero();
        let two = T::one() + T::one();

        Line {
            vertices: vec![
                Point::new(zero, zero),
                Point::new(zero, height),
                Point::new(width / two, height / two),
                Point::new(width, height),
                Point::new(width, zero),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn get(&self, index: usize) -> Result<&Point<T>> {
        let len = self.len();
        self.vertices
            .get(index)
            .ok_or(LineError::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Point<T>> {
        let len = self.len();
        self.vertices
            .get_mut(index)
            .ok_or(LineError::OutOfRange { index, len })
    }

    pub fn first(&self) -> &Point<T> {
        &self.vertices[0]
    }

    pub fn last(&self) -> &Point<T> {
        &self.vertices[self.vertices.len() - 1]
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.vertices
    }

    pub fn into_points(self) -> Vec<Point<T>> {
        self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.vertices.iter()
    }

    /// Consecutive vertex pairs, one per straight segment.
    pub fn segments(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Total arc length, zero for a single point.
    pub fn length(&self) -> f64 {
        self.segments().map(|(from, to)| from.distance(to)).sum()
    }
}

impl<T: Clone> Clone for Line<T> {
    fn clone(&self) -> Self {
        Line {
            vertices: self.vertices.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.vertices.clone_from(&source.vertices);
    }
}

impl<T: Scalar> TryFrom<Vec<Point<T>>> for Line<T> {
    type Error = LineError;

    fn try_from(vertices: Vec<Point<T>>) -> Result<Self> {
        if vertices.is_empty() {
            return Err(LineError::empty());
        }

        Ok(Line { vertices })
    }
}

impl<T> From<Line<T>> for Vec<Point<T>> {
    fn from(line: Line<T>) -> Self {
        line.vertices
    }
}

impl<T: Scalar> PartialEq for Line<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<T: Scalar> Index<usize> for Line<T> {
    type Output = Point<T>;

    fn index(&self, index: usize) -> &Point<T> {
        match self.get(index) {
            Ok(point) => point,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Line<T> {
    fn index_mut(&mut self, index: usize) -> &mut Point<T> {
        let len = self.len();
        match self.vertices.get_mut(index) {
            Some(point) => point,
            None => panic!("{}", LineError::OutOfRange { index, len }),
        }
    }
}

impl<T: Scalar> Add for Line<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        debug!("Joining lines of {} and {} points", self.len(), other.len());
        self.vertices.extend(other.vertices);
        self
    }
}

impl<T: Scalar> Add for &Line<T> {
    type Output = Line<T>;

    fn add(self, other: Self) -> Line<T> {
        let mut vertices = Vec::with_capacity(self.len() + other.len());
        vertices.extend_from_slice(&self.vertices);
        vertices.extend_from_slice(&other.vertices);
        Line { vertices }
    }
}

impl<T: Scalar> Add<Point<T>> for Line<T> {
    type Output = Self;

    fn add(mut self, point: Point<T>) -> Self {
        self.vertices.push(point);
        self
    }
}

impl<T: Scalar> Add<Point<T>> for &Line<T> {
    type Output = Line<T>;

    fn add(self, point: Point<T>) -> Line<T> {
        self.clone() + point
    }
}

impl<T: Scalar> Add<Line<T>> for Point<T> {
    type Output = Line<T>;

    fn add(self, mut line: Line<T>) -> Line<T> {
        line.vertices.insert(0, self);
        line
    }
}

impl<T: Scalar> Add<&Line<T>> for Point<T> {
    type Output = Line<T>;

    fn add(self, line: &Line<T>) -> Line<T> {
        let mut vertices = Vec::with_capacity(line.len() + 1);
        vertices.push(self);
        vertices.extend_from_slice(&line.vertices);
        Line { vertices }
    }
}

impl<'a, T> IntoIterator for &'a Line<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl<T> IntoIterator for Line<T> {
    type Item = Point<T>;
    type IntoIter = std::vec::IntoIter<Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<T: Scalar> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Line with {} points:", self.len())?;

        for point in &self.vertices {
            writeln!(f, "{}", point)?;
        }

        Ok(())
    }
}

impl<T: Serialize> Serialize for Line<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.vertices.serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Line<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let vertices = Vec::<Point<T>>::deserialize(deserializer)?;
        Line::try_from(vertices).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn line() -> impl Strategy<Value = Line<i32>> {
        prop::collection::vec((-1000i32..1000, -1000i32..1000), 1..16).prop_map(|coords| {
            Line::try_from(coords.into_iter().map(Point::from).collect::<Vec<_>>())
                .expect("strategy never yields an empty vec")
        })
    }

    proptest! {
        #[test]
        fn line_equals_itself(a in line()) {
            prop_assert!(a == a);
            prop_assert!(a == a.clone());
        }

        #[test]
        fn indices_past_the_end_fail(a in line(), extra in 0usize..8) {
            let index = a.len() + extra;
            prop_assert_eq!(a.get(index), Err(LineError::OutOfRange { index, len: a.len() }));
            for i in 0..a.len() {
                prop_assert_eq!(a.get(i).unwrap(), &a.points()[i]);
            }
        }

        #[test]
        fn concatenation_splits_back(a in line(), b in line()) {
            let joined = &a + &b;
            prop_assert_eq!(joined.len(), a.len() + b.len());
            prop_assert_eq!(Line::from_points(joined.points()[..a.len()].to_vec()).unwrap(), a.clone());
            prop_assert_eq!(Line::from_points(joined.points()[a.len()..].to_vec()).unwrap(), b.clone());

            let bridge = a.last().distance(b.first());
            prop_assert!((joined.length() - (a.length() + bridge + b.length())).abs() < 1e-6);
        }

        #[test]
        fn prepend_and_append_drop_back(a in line(), x in -50i32..50, y in -50i32..50) {
            let p = Point::new(x, y);
            let front = p + &a;
            let back = &a + p;
            prop_assert_eq!(front.first(), &p);
            prop_assert_eq!(back.last(), &p);
            prop_assert_eq!(Line::from_points(front.points()[1..].to_vec()).unwrap(), a.clone());
            prop_assert_eq!(Line::from_points(back.points()[..a.len()].to_vec()).unwrap(), a.clone());
        }
    }
}
