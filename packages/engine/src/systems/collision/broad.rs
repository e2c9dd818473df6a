use crate::core::Vec2D;
use crate::domain::BodyClass;

/// Pairs with a closed-form bounding-box test: box-box, box-line,
/// line-box, line-line.
#[inline]
pub fn uses_broad_phase(a: BodyClass, b: BodyClass) -> bool {
    matches!(a, BodyClass::Box | BodyClass::Line) && matches!(b, BodyClass::Box | BodyClass::Line)
}

/// Strict AABB overlap; boxes that only share an edge do not overlap.
#[inline]
pub fn aabb_overlap(a_pos: Vec2D, a_size: (f64, f64), b_pos: Vec2D, b_size: (f64, f64)) -> bool {
    let (aw, ah) = a_size;
    let (bw, bh) = b_size;
    a_pos.x < b_pos.x + bw && a_pos.x + aw > b_pos.x && a_pos.y < b_pos.y + bh && a_pos.y + ah > b_pos.y
}
