//! Grid geometry: Bresenham rasterization and character meshes.

pub mod mesh;
pub mod raster;

pub use mesh::{coords_to_mesh, optimize_mesh, trim_mesh, Mesh, OptimizedMesh, PlacedMesh, StampMode};
pub use raster::{line, MAX_LINE_POINTS};
