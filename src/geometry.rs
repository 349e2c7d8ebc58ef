//! Mesh geometry

use crate::error::{MeshError, Result};
use crate::types::RealScalar;
use nalgebra::{DMatrix, SVector};
use std::fmt::{Debug, Formatter};

/// Owned store of point coordinates in `GDIM`-dimensional space.
///
/// Coordinates are held in a single column-major array of shape
/// `[GDIM, point_count]`, so the coordinates of point `i` are the contiguous
/// entries `data[GDIM * i..GDIM * (i + 1)]`.
pub struct Geometry<T: RealScalar, const GDIM: usize> {
    points: DMatrix<T>,
}

impl<T: RealScalar, const GDIM: usize> Debug for Geometry<T, GDIM> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Geometry")
            .field("dim", &GDIM)
            .field("point_count", &self.point_count())
            .finish()
    }
}

impl<T: RealScalar, const GDIM: usize> Geometry<T, GDIM> {
    /// Create a geometry from a flat coordinate array.
    ///
    /// `coordinates` must hold `GDIM` entries per point and is copied into
    /// storage owned by the geometry.
    pub fn from_coordinates(point_count: usize, coordinates: &[T]) -> Result<Self> {
        let expected = point_count * GDIM;
        if coordinates.len() != expected {
            return Err(MeshError::CoordinateCount {
                expected,
                found: coordinates.len(),
            });
        }
        Ok(Self {
            points: DMatrix::from_column_slice(GDIM, point_count, coordinates),
        })
    }

    pub(crate) fn from_parts(points: DMatrix<T>) -> Self {
        Self { points }
    }

    /// Geometric dimension
    pub fn dim(&self) -> usize {
        GDIM
    }

    /// Number of points
    pub fn point_count(&self) -> usize {
        self.points.ncols()
    }

    /// Points
    pub fn points(&self) -> &DMatrix<T> {
        &self.points
    }

    /// The position of a point, copied out of storage
    pub fn point(&self, index: usize) -> Result<SVector<T, GDIM>> {
        let count = self.point_count();
        if index >= count {
            return Err(MeshError::PointIndexOutOfBounds { index, count });
        }
        Ok(SVector::from_column_slice(
            &self.points.as_slice()[GDIM * index..GDIM * (index + 1)],
        ))
    }

    /// Iterator over borrowed views of each point
    pub fn point_iter(&self) -> PointIter<'_, T> {
        PointIter::new(self.points.as_slice().chunks_exact(GDIM).collect())
    }
}

/// A point
#[derive(Debug, Clone, Copy)]
pub struct Point<'a, T: RealScalar> {
    coordinates: &'a [T],
}

impl<'a, T: RealScalar> Point<'a, T> {
    /// Create new
    pub fn new(coordinates: &'a [T]) -> Self {
        Self { coordinates }
    }

    /// Return the dimension of the point.
    pub fn dim(&self) -> usize {
        self.coordinates.len()
    }

    /// Get the coordinates of the point.
    pub fn coords(&self, data: &mut [T]) {
        data.copy_from_slice(self.coordinates);
    }
}

/// Iterator over points
#[derive(Debug)]
pub struct PointIter<'a, T: RealScalar> {
    points: Vec<&'a [T]>,
    index: usize,
}

impl<'a, T: RealScalar> PointIter<'a, T> {
    /// Create new
    pub fn new(points: Vec<&'a [T]>) -> Self {
        Self { points, index: 0 }
    }
}

impl<'a, T: RealScalar> Iterator for PointIter<'a, T> {
    type Item = Point<'a, T>;

    fn next(&mut self) -> Option<Point<'a, T>> {
        self.index += 1;
        if self.index <= self.points.len() {
            Some(Point::new(self.points[self.index - 1]))
        } else {
            None
        }
    }
}
