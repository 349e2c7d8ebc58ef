//! Mesh builders

use crate::geometry::Geometry;
use crate::mesh::VolumetricMesh;
use crate::topology::{CellConnectivity, CellLayout};
use crate::traits::Builder;
use crate::types::RealScalar;
use nalgebra::DMatrix;
use std::collections::HashMap;

/// Mesh builder for a mesh in which every cell has the same number of points.
///
/// Points are identified by caller-chosen ids and cells reference the ids of
/// points that have already been added, so a builder that has accepted its
/// input always creates a mesh whose cells reference existing points.
/// Malformed input panics at the offending call.
pub struct UniformMeshBuilder<T: RealScalar, const GDIM: usize> {
    points_per_cell: usize,
    points: Vec<T>,
    cells: Vec<usize>,
    point_indices_to_ids: Vec<usize>,
    point_ids_to_indices: HashMap<usize, usize>,
    cell_indices_to_ids: Vec<usize>,
}

impl<T: RealScalar, const GDIM: usize> UniformMeshBuilder<T, GDIM> {
    /// Create a new mesh builder
    pub fn new(points_per_cell: usize) -> Self {
        if points_per_cell == 0 {
            panic!("Cells must have at least one point");
        }
        Self {
            points_per_cell,
            points: vec![],
            cells: vec![],
            point_indices_to_ids: vec![],
            point_ids_to_indices: HashMap::new(),
            cell_indices_to_ids: vec![],
        }
    }

    /// Create a new mesh builder with capacity for a given number of points and cells
    pub fn new_with_capacity(npoints: usize, ncells: usize, points_per_cell: usize) -> Self {
        if points_per_cell == 0 {
            panic!("Cells must have at least one point");
        }
        Self {
            points_per_cell,
            points: Vec::with_capacity(npoints * GDIM),
            cells: Vec::with_capacity(ncells * points_per_cell),
            point_indices_to_ids: Vec::with_capacity(npoints),
            point_ids_to_indices: HashMap::new(),
            cell_indices_to_ids: Vec::with_capacity(ncells),
        }
    }
}

impl<T: RealScalar, const GDIM: usize> Builder for UniformMeshBuilder<T, GDIM> {
    type Mesh = VolumetricMesh<T, GDIM>;
    type T = T;
    type CellData<'a> = &'a [usize];

    fn add_point(&mut self, id: usize, data: &[T]) {
        if data.len() != GDIM {
            panic!("Point has wrong number of coordinates");
        }
        if self.point_indices_to_ids.contains(&id) {
            panic!("Cannot add point with duplicate id.");
        }
        self.point_ids_to_indices
            .insert(id, self.point_indices_to_ids.len());
        self.point_indices_to_ids.push(id);
        self.points.extend_from_slice(data);
    }

    fn add_cell(&mut self, id: usize, cell_data: &[usize]) {
        if self.cell_indices_to_ids.contains(&id) {
            panic!("Cannot add cell with duplicate id.");
        }
        assert_eq!(cell_data.len(), self.points_per_cell);
        self.cell_indices_to_ids.push(id);
        for id in cell_data {
            self.cells.push(self.point_ids_to_indices[id]);
        }
    }

    fn create_mesh(self) -> VolumetricMesh<T, GDIM> {
        let npts = self.point_indices_to_ids.len();
        VolumetricMesh::new(
            Geometry::from_parts(DMatrix::from_column_slice(GDIM, npts, &self.points)),
            CellConnectivity::from_parts(
                self.cells,
                CellLayout::Uniform(self.points_per_cell),
                vec![],
            ),
        )
    }
}

/// Mesh builder for a mesh in which each cell has its own number of points.
///
/// The same id rules as [`UniformMeshBuilder`] apply; the per-cell point
/// counts and their prefix offsets are accumulated as cells are added.
pub struct MixedMeshBuilder<T: RealScalar, const GDIM: usize> {
    points: Vec<T>,
    cells: Vec<usize>,
    points_per_cell: Vec<usize>,
    offsets: Vec<usize>,
    point_indices_to_ids: Vec<usize>,
    point_ids_to_indices: HashMap<usize, usize>,
    cell_indices_to_ids: Vec<usize>,
}

impl<T: RealScalar, const GDIM: usize> Default for MixedMeshBuilder<T, GDIM> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar, const GDIM: usize> MixedMeshBuilder<T, GDIM> {
    /// Create a new mesh builder
    pub fn new() -> Self {
        Self {
            points: vec![],
            cells: vec![],
            points_per_cell: vec![],
            offsets: vec![0],
            point_indices_to_ids: vec![],
            point_ids_to_indices: HashMap::new(),
            cell_indices_to_ids: vec![],
        }
    }

    /// Create a new mesh builder with capacity for a given number of points and cells
    pub fn new_with_capacity(npoints: usize, ncells: usize) -> Self {
        let mut offsets = Vec::with_capacity(ncells + 1);
        offsets.push(0);
        Self {
            points: Vec::with_capacity(npoints * GDIM),
            cells: vec![],
            points_per_cell: Vec::with_capacity(ncells),
            offsets,
            point_indices_to_ids: Vec::with_capacity(npoints),
            point_ids_to_indices: HashMap::new(),
            cell_indices_to_ids: Vec::with_capacity(ncells),
        }
    }
}

impl<T: RealScalar, const GDIM: usize> Builder for MixedMeshBuilder<T, GDIM> {
    type Mesh = VolumetricMesh<T, GDIM>;
    type T = T;
    type CellData<'a> = &'a [usize];

    fn add_point(&mut self, id: usize, data: &[T]) {
        if data.len() != GDIM {
            panic!("Point has wrong number of coordinates");
        }
        if self.point_indices_to_ids.contains(&id) {
            panic!("Cannot add point with duplicate id.");
        }
        self.point_ids_to_indices
            .insert(id, self.point_indices_to_ids.len());
        self.point_indices_to_ids.push(id);
        self.points.extend_from_slice(data);
    }

    fn add_cell(&mut self, id: usize, cell_data: &[usize]) {
        if self.cell_indices_to_ids.contains(&id) {
            panic!("Cannot add cell with duplicate id.");
        }
        if cell_data.is_empty() {
            panic!("Cells must have at least one point");
        }
        self.cell_indices_to_ids.push(id);
        self.points_per_cell.push(cell_data.len());
        self.offsets
            .push(self.offsets.last().unwrap() + cell_data.len());
        for id in cell_data {
            self.cells.push(self.point_ids_to_indices[id]);
        }
    }

    fn create_mesh(self) -> VolumetricMesh<T, GDIM> {
        let npts = self.point_indices_to_ids.len();
        VolumetricMesh::new(
            Geometry::from_parts(DMatrix::from_column_slice(GDIM, npts, &self.points)),
            CellConnectivity::from_parts(
                self.cells,
                CellLayout::Mixed(self.points_per_cell),
                self.offsets,
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_builder_mesh() {
        let mut b = UniformMeshBuilder::<f64, 2>::new(3);

        b.add_point(10, &[0.0, 0.0]);
        b.add_point(11, &[1.0, 0.0]);
        b.add_point(12, &[0.0, 1.0]);
        b.add_point(13, &[1.0, 1.0]);

        b.add_cell(0, &[10, 11, 12]);
        b.add_cell(1, &[11, 13, 12]);

        let mesh = b.create_mesh();
        assert!(mesh.is_uniform());
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.cell_count(), 2);
        assert_eq!(mesh.cell_points(1).unwrap(), &[1, 3, 2]);
        let p = mesh.cell_point_position(1, 1).unwrap();
        assert_relative_eq!(p[0], 1.0);
        assert_relative_eq!(p[1], 1.0);
    }

    #[test]
    fn test_mixed_builder_mesh() {
        let mut b = MixedMeshBuilder::<f64, 2>::new_with_capacity(5, 2);

        b.add_point(0, &[0.0, 0.0]);
        b.add_point(1, &[1.0, 0.0]);
        b.add_point(2, &[0.0, 1.0]);
        b.add_point(3, &[2.0, 0.0]);
        b.add_point(4, &[2.0, 1.0]);

        b.add_cell(0, &[0, 1, 2]);
        b.add_cell(1, &[1, 3, 4, 2]);

        let mesh = b.create_mesh();
        assert!(!mesh.is_uniform());
        assert_eq!(mesh.cell_point_count(0).unwrap(), 3);
        assert_eq!(mesh.cell_point_count(1).unwrap(), 4);
        assert_eq!(mesh.cell_points(1).unwrap(), &[1, 3, 4, 2]);
    }

    #[test]
    fn test_empty_builder() {
        let mesh = MixedMeshBuilder::<f64, 3>::new().create_mesh();
        assert_eq!(mesh.point_count(), 0);
        assert_eq!(mesh.cell_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_duplicate_point_id() {
        let mut b = UniformMeshBuilder::<f64, 2>::new(3);

        b.add_point(2, &[0.0, 0.0]);
        b.add_point(0, &[1.0, 0.0]);
        b.add_point(1, &[0.0, 1.0]);
        b.add_point(2, &[1.0, 1.0]);
    }

    #[test]
    #[should_panic]
    fn test_duplicate_cell_id() {
        let mut b = UniformMeshBuilder::<f64, 2>::new(3);

        b.add_point(0, &[0.0, 0.0]);
        b.add_point(1, &[1.0, 0.0]);
        b.add_point(2, &[0.0, 1.0]);
        b.add_point(3, &[1.0, 1.0]);

        b.add_cell(0, &[0, 1, 2]);
        b.add_cell(0, &[1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_wrong_coordinate_count() {
        let mut b = UniformMeshBuilder::<f64, 3>::new(4);

        b.add_point(0, &[0.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn test_wrong_cell_size() {
        let mut b = UniformMeshBuilder::<f64, 2>::new(3);

        b.add_point(0, &[0.0, 0.0]);
        b.add_point(1, &[1.0, 0.0]);
        b.add_point(2, &[0.0, 1.0]);
        b.add_point(3, &[1.0, 1.0]);

        b.add_cell(0, &[0, 1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_unknown_point_id() {
        let mut b = MixedMeshBuilder::<f64, 2>::new();

        b.add_point(0, &[0.0, 0.0]);
        b.add_point(1, &[1.0, 0.0]);
        b.add_point(2, &[0.0, 1.0]);

        b.add_cell(0, &[0, 1, 7]);
    }

    #[test]
    #[should_panic]
    fn test_cell_with_no_points() {
        let mut b = MixedMeshBuilder::<f64, 2>::new();

        b.add_cell(0, &[]);
    }

    #[test]
    #[should_panic]
    fn test_zero_points_per_cell() {
        let _ = UniformMeshBuilder::<f64, 2>::new(0);
    }
}
