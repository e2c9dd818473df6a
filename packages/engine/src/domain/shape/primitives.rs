//! Closed-form fill rules for the flat primitives.

use crate::core::Point2D;
use crate::domain::errors::GeometryError;
use crate::spatial::mesh::{coords_to_mesh, optimize_mesh, Mesh};
use crate::spatial::raster;

/// Filled: every cell. Outline: first/last row and first/last column.
pub(super) fn rect(width: usize, height: usize, filled: bool, ch: char) -> Mesh {
    let mut mesh = Mesh::blank(width, height);
    for r in 0..height {
        for c in 0..width {
            let border = r == 0 || r + 1 == height || c == 0 || c + 1 == width;
            if filled || border {
                mesh.set(r, c, ch);
            }
        }
    }
    mesh
}

/// One row of `length` characters.
pub(super) fn line(length: usize, ch: char) -> Mesh {
    Mesh::from_grid(vec![vec![ch; length]])
}

/// Row `i` paints `2i + 1` cells starting at `width/2 - i`, clipped.
pub(super) fn triangle(width: usize, height: usize, ch: char) -> Mesh {
    let mut mesh = Mesh::blank(width, height);
    let mut start = (width / 2) as i64;
    let mut amount = 1i64;
    for r in 0..height {
        for c in start..start + amount {
            if c >= 0 && (c as usize) < width {
                mesh.set(r, c as usize, ch);
            }
        }
        start -= 1;
        amount += 2;
    }
    mesh
}

/// `(2r+1)^2` grid. Filled: `dx^2 + dy^2 <= r^2`. Ring: `|d - r| < 0.5`.
pub(super) fn circle(radius: usize, filled: bool, ch: char) -> Mesh {
    let size = radius * 2 + 1;
    let r = radius as f64;
    let mut mesh = Mesh::blank(size, size);
    for row in 0..size {
        for col in 0..size {
            let dx = col as f64 - r;
            let dy = row as f64 - r;
            let dist_sq = dx * dx + dy * dy;
            let inside = if filled {
                dist_sq <= r * r
            } else {
                (dist_sq.sqrt() - r).abs() < 0.5
            };
            if inside {
                mesh.set(row, col, ch);
            }
        }
    }
    mesh
}

/// Bresenham segment as a mesh, plus the world offset of its top-left cell.
pub(super) fn bline(from: Point2D, to: Point2D, ch: char) -> Result<(Mesh, f64, f64), GeometryError> {
    let cells = raster::line(from, to);
    let placed = coords_to_mesh(&cells, ch)?;
    let optimized = optimize_mesh(&placed.mesh);
    let dx = placed.x as f64 + optimized.x as f64;
    let dy = placed.y as f64 + optimized.y as f64;
    Ok((optimized.mesh, dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_rect_is_hollow() {
        let mesh = rect(4, 3, false, '#');
        assert_eq!(mesh.to_strings(), vec!["####", "#  #", "####"]);
    }

    #[test]
    fn triangle_grows_two_per_row() {
        let mesh = triangle(6, 3, '^');
        assert_eq!(mesh.to_strings(), vec!["   ^  ", "  ^^^ ", " ^^^^^"]);
    }

    #[test]
    fn triangle_rows_clip_at_left_edge() {
        let mesh = triangle(2, 3, 'A');
        assert_eq!(mesh.to_strings(), vec![" A", "AA", "AA"]);
    }

    #[test]
    fn filled_circle_radius_one_is_a_plus() {
        let mesh = circle(1, true, 'o');
        assert_eq!(mesh.to_strings(), vec![" o ", "ooo", " o "]);
    }

    #[test]
    fn ring_leaves_center_empty() {
        let mesh = circle(3, false, 'o');
        assert_eq!(mesh.get(3, 3), Some(' '));
        assert_eq!(mesh.get(0, 3), Some('o'));
        assert_eq!(mesh.get(3, 0), Some('o'));
        assert_eq!(mesh.get(0, 0), Some(' '));
    }

    #[test]
    fn bline_offsets_to_its_top_left_cell() {
        let (mesh, dx, dy) = bline(Point2D::new(2.0, 3.0), Point2D::new(4.0, 5.0), '\\').unwrap();
        assert_eq!((dx, dy), (2.0, 3.0));
        assert_eq!(mesh.to_strings(), vec!["\\", " \\", "  \\"]);
    }
}
