use crate::core::Point2D;
use crate::domain::{CollisionSides, PhysicsBody};

/// Broad-phase sides from center comparison. The body whose center is
/// further left touches on its right, the higher one touches on its bottom.
pub fn sides_from_centers(a: Point2D, b: Point2D) -> (CollisionSides, CollisionSides) {
    let a_first_x = a.x <= b.x;
    let a_first_y = a.y <= b.y;
    (
        CollisionSides { left: !a_first_x, right: a_first_x, top: !a_first_y, bottom: a_first_y },
        CollisionSides { left: a_first_x, right: !a_first_x, top: a_first_y, bottom: !a_first_y },
    )
}

/// Sides from the touching point of one body. A body resting on the floor
/// always touches on its bottom.
pub fn side_from_point(point: Point2D, center: Point2D, on_floor: bool) -> CollisionSides {
    let left = point.x <= center.x;
    let bottom = on_floor || point.y > center.y;
    CollisionSides { left, right: !left, top: !bottom, bottom }
}

/// Merge `hit` into the body's flags. Non-colliding bodies are never
/// flagged, and an axis already decided this pass stays as it is.
pub fn apply_sides<B: PhysicsBody>(body: &mut B, hit: CollisionSides) {
    if !body.collides() {
        return;
    }
    let sides = body.sides_mut();
    if !sides.horizontal() {
        sides.left = hit.left;
        sides.right = hit.right;
    }
    if !sides.vertical() {
        sides.top = hit.top;
        sides.bottom = hit.bottom;
    }
}
