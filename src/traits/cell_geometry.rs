//! Cell geometry

use crate::error::{MeshError, Result};
use crate::types::RealScalar;
use itertools::izip;
use nalgebra::SVector;
use num::Zero;

/// Geometric queries that a concrete cell-shape mesh must answer.
///
/// Implementors resolve cell indices through a
/// [`VolumetricMesh`](crate::VolumetricMesh) and apply the geometry of their
/// particular cell shape (tetrahedra, hexahedra, triangles, ...) on top of its
/// storage. All methods report out-of-range cell indices as errors.
pub trait CellGeometry<const GDIM: usize> {
    /// The floating point type used for coordinates
    type T: RealScalar;

    /// The measure of a cell's extent.
    ///
    /// Whether the measure is signed or unsigned is a decision of the
    /// implementing shape.
    fn cell_volume(&self, cell: usize) -> Result<Self::T>;

    /// Whether a point lies inside a cell
    fn contains_point(&self, cell: usize, point: &SVector<Self::T, GDIM>) -> Result<bool>;

    /// Interpolation weights of a point with respect to a cell's points.
    ///
    /// The returned weights have exactly one entry per cell point, in local
    /// point order, and sum to 1 for points inside the cell. Their values for
    /// points outside the cell are a decision of the implementing shape.
    fn interpolation_weights(
        &self,
        cell: usize,
        point: &SVector<Self::T, GDIM>,
    ) -> Result<Vec<Self::T>>;

    /// Interpolate a per-point field at a point.
    ///
    /// `values` holds one value per cell point, in local point order.
    fn interpolate(
        &self,
        cell: usize,
        point: &SVector<Self::T, GDIM>,
        values: &[Self::T],
    ) -> Result<Self::T> {
        let weights = self.interpolation_weights(cell, point)?;
        if values.len() != weights.len() {
            return Err(MeshError::ValueCount {
                expected: weights.len(),
                found: values.len(),
            });
        }
        let mut value = Self::T::zero();
        for (w, v) in izip!(&weights, values) {
            value = value + *w * *v;
        }
        Ok(value)
    }
}
