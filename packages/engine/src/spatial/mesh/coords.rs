use crate::core::Cell;
use crate::domain::errors::GeometryError;

use super::{trim_mesh, Mesh};

/// Largest width or height `coords_to_mesh` will allocate.
pub const MAX_MESH_EXTENT: usize = 10_000;

/// Mesh built from world cells, plus the world cell its `(0, 0)` maps to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedMesh {
    pub mesh: Mesh,
    pub x: i32,
    pub y: i32,
}

/// Stamp `ch` at every `[x, y]` cell of a grid sized to the cells' extent.
///
/// Cells are shifted so the minimum lands on index 0 and the result is
/// trimmed. An empty list is an error rather than an empty mesh.
pub fn coords_to_mesh(coords: &[Cell], ch: char) -> Result<PlacedMesh, GeometryError> {
    let Some(first) = coords.first() else {
        return Err(GeometryError::EmptyCoordinates);
    };

    let (mut min_x, mut min_y) = (first[0], first[1]);
    let (mut max_x, mut max_y) = (first[0], first[1]);
    for c in coords.iter().skip(1) {
        min_x = min_x.min(c[0]);
        min_y = min_y.min(c[1]);
        max_x = max_x.max(c[0]);
        max_y = max_y.max(c[1]);
    }

    let width = (max_x as i64 - min_x as i64 + 1) as usize;
    let height = (max_y as i64 - min_y as i64 + 1) as usize;
    if width > MAX_MESH_EXTENT || height > MAX_MESH_EXTENT {
        return Err(GeometryError::ExtentTooLarge { width, height });
    }

    let mut mesh = Mesh::blank(width, height);
    for c in coords {
        let col = (c[0] as i64 - min_x as i64) as usize;
        let row = (c[1] as i64 - min_y as i64) as usize;
        mesh.set(row, col, ch);
    }

    Ok(PlacedMesh {
        mesh: trim_mesh(&mesh),
        x: min_x,
        y: min_y,
    })
}
