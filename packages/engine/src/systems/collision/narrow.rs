use crate::core::Point2D;
use crate::domain::{CollisionError, PhysicsBody};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::pair_mut;
use super::sides::{apply_sides, side_from_point};

#[inline]
fn touching(a: &Point2D, b: &Point2D, accuracy: f64) -> bool {
    (a.x - b.x).abs() < accuracy && (a.y - b.y).abs() < accuracy
}

/// First touching point pair, scanning `a` in order and `b` in order for
/// each point of `a`. Returns indices into both tables.
pub fn find_contact(a: &[Point2D], b: &[Point2D], accuracy: f64) -> Option<(usize, usize)> {
    #[cfg(feature = "parallel")]
    {
        a.par_iter()
            .enumerate()
            .find_map_first(|(i, pa)| b.iter().position(|pb| touching(pa, pb, accuracy)).map(|j| (i, j)))
    }
    #[cfg(not(feature = "parallel"))]
    {
        a.iter()
            .enumerate()
            .find_map(|(i, pa)| b.iter().position(|pb| touching(pa, pb, accuracy)).map(|j| (i, j)))
    }
}

/// Narrow test for one pair. On contact both bodies get sides from their
/// own touching point.
pub(super) fn resolve_pair<B: PhysicsBody>(a: &mut B, b: &mut B, accuracy: f64, world_height: usize) -> bool {
    if a.id() == b.id() {
        return false;
    }
    let Some((ia, ib)) = find_contact(a.world_points(), b.world_points(), accuracy) else {
        return false;
    };
    let pa = a.world_points()[ia];
    let pb = b.world_points()[ib];
    let hit_a = side_from_point(pa, a.center(), rests_on_floor(a, world_height));
    let hit_b = side_from_point(pb, b.center(), rests_on_floor(b, world_height));
    apply_sides(a, hit_a);
    apply_sides(b, hit_b);
    true
}

fn rests_on_floor<B: PhysicsBody>(body: &B, world_height: usize) -> bool {
    body.position().y + body.size().1 == world_height as f64
}

/// Point-by-point test over every pair of `bodies`, using the world points
/// from their last `calculate()`. Returns the number of touching pairs.
pub fn narrow_phase<B: PhysicsBody>(bodies: &mut [B], accuracy: f64, world_height: usize) -> Result<usize, CollisionError> {
    if bodies.len() < 2 {
        let err = CollisionError::TooFewShapes { found: bodies.len() };
        log::error!("[COLL_NARROW] {}", err);
        return Err(err);
    }
    let mut contacts = 0;
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            if resolve_pair(a, b, accuracy, world_height) {
                contacts += 1;
            }
        }
    }
    Ok(contacts)
}
