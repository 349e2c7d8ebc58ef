//! Volumetric mesh

use crate::error::Result;
use crate::geometry::{Geometry, PointIter};
use crate::topology::{CellConnectivity, CellIter};
use crate::types::RealScalar;
use nalgebra::SVector;
use std::fmt::{Debug, Formatter};

/// A volumetric mesh in `GDIM`-dimensional space.
///
/// The mesh owns a flat coordinate store and the cell-to-point connectivity
/// and is immutable once constructed. Every query is a pure read, so shared
/// references may be used freely from multiple threads.
///
/// # Example
/// ```
/// use ndmesh::VolumetricMesh;
///
/// let mesh = VolumetricMesh::<f64, 2>::from_uniform_data(
///     4,
///     &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
///     2,
///     &[0, 1, 2, 1, 3, 2],
///     3,
/// )?;
/// assert_eq!(mesh.cell_count(), 2);
/// assert_eq!(mesh.cell_point(1, 0)?, 1);
/// assert_eq!(mesh.point(3)?[1], 1.0);
/// # Ok::<(), ndmesh::MeshError>(())
/// ```
pub struct VolumetricMesh<T: RealScalar, const GDIM: usize> {
    geometry: Geometry<T, GDIM>,
    connectivity: CellConnectivity,
}

/// Two-dimensional volumetric mesh
pub type VolumetricMesh2d<T> = VolumetricMesh<T, 2>;
/// Three-dimensional volumetric mesh
pub type VolumetricMesh3d<T> = VolumetricMesh<T, 3>;

impl<T: RealScalar, const GDIM: usize> Debug for VolumetricMesh<T, GDIM> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("VolumetricMesh")
            .field("dim", &GDIM)
            .field("point_count", &self.point_count())
            .field("cell_count", &self.cell_count())
            .field("layout", self.connectivity.layout())
            .finish()
    }
}

impl<T: RealScalar, const GDIM: usize> VolumetricMesh<T, GDIM> {
    /// Create a mesh from its geometry and connectivity
    pub fn new(geometry: Geometry<T, GDIM>, connectivity: CellConnectivity) -> Self {
        Self {
            geometry,
            connectivity,
        }
    }

    /// Create a mesh in which every cell has `points_per_cell` points.
    ///
    /// `coordinates` holds `GDIM` entries per point and `cells` holds
    /// `points_per_cell` point indices per cell. Both arrays are copied; no
    /// reference to the caller's memory is retained. Index values in `cells`
    /// are not range checked here, a cell referencing a point at or past
    /// `point_count` is reported by the query that first touches it.
    pub fn from_uniform_data(
        point_count: usize,
        coordinates: &[T],
        cell_count: usize,
        cells: &[usize],
        points_per_cell: usize,
    ) -> Result<Self> {
        Ok(Self::new(
            Geometry::from_coordinates(point_count, coordinates)?,
            CellConnectivity::uniform(cells, cell_count, points_per_cell)?,
        ))
    }

    /// Create a mesh in which cell `i` has `points_per_cell[i]` points.
    ///
    /// The same copying and range-check rules as [`Self::from_uniform_data`]
    /// apply; the cell count is the length of `points_per_cell`.
    pub fn from_mixed_data(
        point_count: usize,
        coordinates: &[T],
        cells: &[usize],
        points_per_cell: &[usize],
    ) -> Result<Self> {
        Ok(Self::new(
            Geometry::from_coordinates(point_count, coordinates)?,
            CellConnectivity::mixed(cells, points_per_cell)?,
        ))
    }

    /// Geometric dimension
    pub fn dim(&self) -> usize {
        GDIM
    }

    /// Number of points
    pub fn point_count(&self) -> usize {
        self.geometry.point_count()
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.connectivity.cell_count()
    }

    /// Whether all cells share one point count
    pub fn is_uniform(&self) -> bool {
        self.connectivity.is_uniform()
    }

    /// Number of points of a cell
    pub fn cell_point_count(&self, cell: usize) -> Result<usize> {
        self.connectivity.points_per_cell(cell)
    }

    /// The position of a point, copied out of storage
    pub fn point(&self, index: usize) -> Result<SVector<T, GDIM>> {
        self.geometry.point(index)
    }

    /// The global index of a cell's `local_index`-th point
    pub fn cell_point(&self, cell: usize, local_index: usize) -> Result<usize> {
        self.connectivity.cell_point(cell, local_index)
    }

    /// The position of a cell's `local_index`-th point
    pub fn cell_point_position(&self, cell: usize, local_index: usize) -> Result<SVector<T, GDIM>> {
        self.point(self.cell_point(cell, local_index)?)
    }

    /// The point indices of a cell, in the order they were supplied
    pub fn cell_points(&self, cell: usize) -> Result<&[usize]> {
        self.connectivity.cell(cell)
    }

    /// Iterator over borrowed views of each point
    pub fn point_iter(&self) -> PointIter<'_, T> {
        self.geometry.point_iter()
    }

    /// Iterator over the point-index slice of each cell
    pub fn cell_iter(&self) -> CellIter<'_> {
        self.connectivity.cell_iter()
    }

    /// Geometry
    pub fn geometry(&self) -> &Geometry<T, GDIM> {
        &self.geometry
    }

    /// Connectivity
    pub fn connectivity(&self) -> &CellConnectivity {
        &self.connectivity
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_relative_eq;

    fn example_mesh_uniform() -> VolumetricMesh2d<f64> {
        //! Two triangles covering the unit square
        VolumetricMesh::from_uniform_data(
            4,
            &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            2,
            &[0, 1, 2, 1, 3, 2],
            3,
        )
        .unwrap()
    }

    fn example_mesh_mixed() -> VolumetricMesh2d<f64> {
        //! A triangle and a quadrilateral sharing an edge
        VolumetricMesh::from_mixed_data(
            5,
            &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 2.0, 0.0, 2.0, 1.0],
            &[0, 1, 2, 1, 3, 4, 2],
            &[3, 4],
        )
        .unwrap()
    }

    #[test]
    fn test_uniform_queries() {
        let mesh = example_mesh_uniform();
        assert_eq!(mesh.dim(), 2);
        assert!(mesh.is_uniform());
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.cell_count(), 2);
        assert_eq!(mesh.cell_point_count(1).unwrap(), 3);

        let p = mesh.cell_point_position(1, 0).unwrap();
        assert_relative_eq!(p[0], 1.0);
        assert_relative_eq!(p[1], 0.0);
        let p = mesh.cell_point_position(1, 2).unwrap();
        assert_relative_eq!(p[0], 0.0);
        assert_relative_eq!(p[1], 1.0);
        let p = mesh.point(3).unwrap();
        assert_relative_eq!(p[0], 1.0);
        assert_relative_eq!(p[1], 1.0);
    }

    #[test]
    fn test_mixed_queries() {
        let mesh = example_mesh_mixed();
        assert!(!mesh.is_uniform());
        assert_eq!(mesh.cell_point_count(0).unwrap(), 3);
        assert_eq!(mesh.cell_point_count(1).unwrap(), 4);
        assert_eq!(mesh.cell_point(1, 1).unwrap(), 3);
        assert_eq!(mesh.cell_points(1).unwrap(), &[1, 3, 4, 2]);

        let p = mesh.cell_point_position(1, 1).unwrap();
        assert_relative_eq!(p[0], 2.0);
        assert_relative_eq!(p[1], 0.0);
    }

    #[test]
    fn test_unchecked_reference_surfaces_at_query() {
        //! A cell may reference a point that does not exist; the query that
        //! resolves the position reports it
        let mesh =
            VolumetricMesh::<f64, 2>::from_uniform_data(2, &[0.0, 0.0, 1.0, 0.0], 1, &[0, 9], 2)
                .unwrap();
        assert_eq!(mesh.cell_point(0, 1).unwrap(), 9);
        assert_eq!(
            mesh.cell_point_position(0, 1),
            Err(MeshError::PointIndexOutOfBounds { index: 9, count: 2 })
        );
    }

    #[test]
    fn test_out_of_range_queries() {
        let mesh = example_mesh_uniform();
        assert!(mesh.point(4).is_err());
        assert!(mesh.cell_points(2).is_err());
        assert!(mesh.cell_point_position(0, 3).is_err());
        assert_eq!(
            mesh.cell_point(2, 0),
            Err(MeshError::CellIndexOutOfBounds { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_repeated_queries_agree() {
        let mesh = example_mesh_mixed();
        assert_eq!(mesh.cell_points(1).unwrap(), mesh.cell_points(1).unwrap());
        assert_eq!(mesh.point(2).unwrap(), mesh.point(2).unwrap());
        assert_eq!(
            mesh.cell_point_position(1, 3).unwrap(),
            mesh.cell_point_position(1, 3).unwrap()
        );
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = VolumetricMesh::<f64, 3>::from_uniform_data(0, &[], 0, &[], 4).unwrap();
        assert_eq!(mesh.point_count(), 0);
        assert_eq!(mesh.cell_count(), 0);
        assert!(mesh.point(0).is_err());
        assert!(mesh.cell_points(0).is_err());
    }
}
