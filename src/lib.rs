//! n-dimensional volumetric mesh
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod topology;
pub mod traits;
pub mod types;

pub use builder::{MixedMeshBuilder, UniformMeshBuilder};
pub use error::{MeshError, Result};
pub use mesh::{VolumetricMesh, VolumetricMesh2d, VolumetricMesh3d};
