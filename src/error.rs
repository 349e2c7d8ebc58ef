//! Error types

use thiserror::Error;

/// Errors reported by mesh construction and queries.
///
/// Out-of-range errors are raised by queries; the remaining variants are
/// raised at construction time when the supplied arrays are inconsistent
/// with the declared counts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A point index was at or past the mesh's point count
    #[error("point index {index} out of range for mesh with {count} points")]
    PointIndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of points in the mesh
        count: usize,
    },
    /// A cell index was at or past the mesh's cell count
    #[error("cell index {index} out of range for mesh with {count} cells")]
    CellIndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of cells in the mesh
        count: usize,
    },
    /// A local point index was at or past the cell's point count
    #[error("local point index {index} out of range for cell {cell} with {count} points")]
    LocalPointOutOfBounds {
        /// The cell being queried
        cell: usize,
        /// The offending local index
        index: usize,
        /// Number of points of that cell
        count: usize,
    },
    /// Coordinate array length disagrees with the declared point count
    #[error("coordinate array has {found} entries, expected {expected}")]
    CoordinateCount {
        /// Expected number of entries
        expected: usize,
        /// Number of entries supplied
        found: usize,
    },
    /// Cell-to-point array length disagrees with the declared point counts
    #[error("cell array has {found} entries, expected {expected}")]
    ConnectivityCount {
        /// Expected number of entries
        expected: usize,
        /// Number of entries supplied
        found: usize,
    },
    /// A cell was declared with no points
    #[error("cell {cell} has no points")]
    EmptyCell {
        /// The offending cell
        cell: usize,
    },
    /// A uniform layout was declared with zero points per cell
    #[error("points per cell must be at least 1")]
    ZeroArity,
    /// Per-point value array length disagrees with the cell's point count
    #[error("value array has {found} entries, expected {expected}")]
    ValueCount {
        /// Expected number of entries
        expected: usize,
        /// Number of entries supplied
        found: usize,
    },
}

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
