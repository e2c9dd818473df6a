//! Bresenham line rasterization shared by `bline` shapes and 3D wireframes.

use crate::core::math::round_half_up;
use crate::core::{Cell, Point2D};

/// Hard cap on emitted cells; malformed input returns the partial line.
pub const MAX_LINE_POINTS: usize = 10_000;

/// Cells on the segment `p1 -> p2` (endpoints rounded, both included).
///
/// The walk runs from the lexicographically smaller endpoint so that
/// `line(a, b)` and `line(b, a)` cover the same cells; the result is then
/// ordered to start at `p1`. A capped line is walked from `p1` instead, so
/// the partial result still starts there.
pub fn line(p1: Point2D, p2: Point2D) -> Vec<Cell> {
    let a = round_cell(p1);
    let b = round_cell(p2);
    if (a[0], a[1]) <= (b[0], b[1]) || span(a, b) > MAX_LINE_POINTS {
        return bresenham(a, b);
    }
    let mut cells = bresenham(b, a);
    cells.reverse();
    cells
}

/// Cells bresenham emits between `a` and `b`, both included.
fn span(a: Cell, b: Cell) -> usize {
    let dx = (b[0] as i64 - a[0] as i64).unsigned_abs();
    let dy = (b[1] as i64 - a[1] as i64).unsigned_abs();
    (dx.max(dy) as usize).saturating_add(1)
}

fn round_cell(p: Point2D) -> Cell {
    [round_half_up(p.x) as i32, round_half_up(p.y) as i32]
}

fn bresenham(start: Cell, end: Cell) -> Vec<Cell> {
    let (x1, y1) = (end[0] as i64, end[1] as i64);
    let (mut x, mut y) = (start[0] as i64, start[1] as i64);
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut cells = Vec::with_capacity(span(start, end).min(MAX_LINE_POINTS));
    loop {
        if cells.len() >= MAX_LINE_POINTS {
            log::warn!(
                "[LINE] stopped after {} points between {:?} and {:?}",
                MAX_LINE_POINTS,
                start,
                end
            );
            break;
        }
        cells.push([x as i32, y as i32]);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = err << 1;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
