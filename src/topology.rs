//! Cell-to-point connectivity storage
//!
//! Cells are stored as one flat array of global point indices together with a
//! layout describing how many points each cell has. A uniform layout shares a
//! single point count across all cells, so the slice of cell `i` starts at
//! `i * points_per_cell`. A mixed layout carries one point count per cell and
//! a cached prefix-offset table, so slice starts stay O(1) there too.

use crate::error::{MeshError, Result};

/// Layout of per-cell point counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellLayout {
    /// Every cell has the same number of points
    Uniform(usize),
    /// Each cell has its own number of points, in cell order
    Mixed(Vec<usize>),
}

/// Cell-to-point connectivity of a volumetric mesh.
///
/// The point order within a cell is preserved exactly as supplied; shape
/// specific geometry routines rely on it for face and edge identification.
pub struct CellConnectivity {
    cells: Vec<usize>,
    layout: CellLayout,
    // Prefix sums of the per-cell point counts, length cell_count + 1.
    // Empty in uniform mode, where offsets are a multiplication instead.
    offsets: Vec<usize>,
}

impl CellConnectivity {
    /// Create connectivity in which every cell has `points_per_cell` points.
    ///
    /// `cells` holds the point indices of cell 0, then cell 1, and so on, and
    /// is copied into owned storage.
    pub fn uniform(cells: &[usize], cell_count: usize, points_per_cell: usize) -> Result<Self> {
        if points_per_cell == 0 {
            return Err(MeshError::ZeroArity);
        }
        let expected = cell_count * points_per_cell;
        if cells.len() != expected {
            return Err(MeshError::ConnectivityCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells: cells.to_vec(),
            layout: CellLayout::Uniform(points_per_cell),
            offsets: vec![],
        })
    }

    /// Create connectivity in which cell `i` has `points_per_cell[i]` points.
    ///
    /// `cells` holds the point indices of every cell back to back and must
    /// have exactly `points_per_cell.iter().sum()` entries.
    pub fn mixed(cells: &[usize], points_per_cell: &[usize]) -> Result<Self> {
        let mut offsets = Vec::with_capacity(points_per_cell.len() + 1);
        offsets.push(0);
        for (cell, npts) in points_per_cell.iter().enumerate() {
            if *npts == 0 {
                return Err(MeshError::EmptyCell { cell });
            }
            offsets.push(offsets[cell] + npts);
        }
        let expected = offsets[points_per_cell.len()];
        if cells.len() != expected {
            return Err(MeshError::ConnectivityCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells: cells.to_vec(),
            layout: CellLayout::Mixed(points_per_cell.to_vec()),
            offsets,
        })
    }

    pub(crate) fn from_parts(cells: Vec<usize>, layout: CellLayout, offsets: Vec<usize>) -> Self {
        Self {
            cells,
            layout,
            offsets,
        }
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        match &self.layout {
            CellLayout::Uniform(points_per_cell) => self.cells.len() / points_per_cell,
            CellLayout::Mixed(points_per_cell) => points_per_cell.len(),
        }
    }

    /// Whether all cells share one point count
    pub fn is_uniform(&self) -> bool {
        matches!(self.layout, CellLayout::Uniform(_))
    }

    /// Layout
    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// Flat cell-to-point index array
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Number of points of a cell
    pub fn points_per_cell(&self, cell: usize) -> Result<usize> {
        let count = self.cell_count();
        if cell >= count {
            return Err(MeshError::CellIndexOutOfBounds { index: cell, count });
        }
        Ok(match &self.layout {
            CellLayout::Uniform(points_per_cell) => *points_per_cell,
            CellLayout::Mixed(points_per_cell) => points_per_cell[cell],
        })
    }

    // Start of a cell's slice in the flat array. Callers bounds check first.
    fn offset(&self, cell: usize) -> usize {
        match &self.layout {
            CellLayout::Uniform(points_per_cell) => cell * points_per_cell,
            CellLayout::Mixed(_) => self.offsets[cell],
        }
    }

    /// The point indices of a cell, in the order they were supplied
    pub fn cell(&self, cell: usize) -> Result<&[usize]> {
        let npts = self.points_per_cell(cell)?;
        let start = self.offset(cell);
        Ok(&self.cells[start..start + npts])
    }

    /// The global index of a cell's `local_index`-th point
    pub fn cell_point(&self, cell: usize, local_index: usize) -> Result<usize> {
        let count = self.points_per_cell(cell)?;
        if local_index >= count {
            return Err(MeshError::LocalPointOutOfBounds {
                cell,
                index: local_index,
                count,
            });
        }
        Ok(self.cells[self.offset(cell) + local_index])
    }

    /// Iterator over the point-index slice of each cell
    pub fn cell_iter(&self) -> CellIter<'_> {
        CellIter {
            connectivity: self,
            index: 0,
        }
    }
}

impl std::fmt::Debug for CellConnectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("CellConnectivity")
            .field("cell_count", &self.cell_count())
            .field("layout", &self.layout)
            .finish()
    }
}

/// Iterator over cells
#[derive(Debug)]
pub struct CellIter<'a> {
    connectivity: &'a CellConnectivity,
    index: usize,
}

impl<'a> Iterator for CellIter<'a> {
    type Item = &'a [usize];

    fn next(&mut self) -> Option<&'a [usize]> {
        self.index += 1;
        self.connectivity.cell(self.index - 1).ok()
    }
}
