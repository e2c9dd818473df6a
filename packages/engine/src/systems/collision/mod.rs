//! Collision detection between shapes.
//!
//! A pass resets every body's side flags, refreshes world points, then looks
//! at every unordered pair once:
//! - box/line pairs go through an AABB test when `moreEfficientPhysics` is on
//! - everything else is queued for the point-by-point narrow phase
//!
//! Broad-phase pairs are resolved first, then the narrow queue. A side flag
//! set earlier in the pass is never flipped by a later pair.

mod broad;
mod narrow;
mod sides;
mod types;

pub use broad::{aabb_overlap, uses_broad_phase};
pub use narrow::{find_contact, narrow_phase};
pub use sides::{apply_sides, side_from_point, sides_from_centers};
pub use types::{CollisionReport, CollisionStats};

use crate::domain::{CollisionError, EngineConfig, PhysicsBody};

/// Two distinct mutable bodies out of one slice.
pub(crate) fn pair_mut<B>(bodies: &mut [B], i: usize, j: usize) -> (&mut B, &mut B) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Run one full detection pass.
pub fn detect<B: PhysicsBody>(bodies: &mut [B], config: &EngineConfig) -> Result<CollisionStats, CollisionError> {
    if bodies.len() < 2 {
        let err = CollisionError::TooFewShapes { found: bodies.len() };
        log::error!("[COLL_MAIN] {}", err);
        return Err(err);
    }

    for body in bodies.iter_mut() {
        body.sides_mut().reset();
        body.calculate();
    }

    let mut stats = CollisionStats::default();
    let mut narrow_queue = Vec::new();
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            if a.id() == b.id() || !(a.collides() || b.collides()) {
                continue;
            }
            stats.considered_pairs += 1;

            if config.more_efficient_physics && uses_broad_phase(a.class(), b.class()) {
                stats.broad_pairs += 1;
                if aabb_overlap(a.position(), a.size(), b.position(), b.size()) {
                    let (hit_a, hit_b) = sides_from_centers(a.center(), b.center());
                    apply_sides(a, hit_a);
                    apply_sides(b, hit_b);
                    stats.contacts += 1;
                }
            } else {
                narrow_queue.push((i, j));
            }
        }
    }

    stats.narrow_pairs = narrow_queue.len();
    for (i, j) in narrow_queue {
        let (a, b) = pair_mut(bodies, i, j);
        if narrow::resolve_pair(a, b, config.collision_accuracy, config.height) {
            stats.contacts += 1;
        }
    }

    stats.finish();
    if config.debug_mode {
        log::debug!(
            "[COLL_MAIN] {} pairs, {} narrow, {} contacts, efficiency {:.1}%",
            stats.considered_pairs,
            stats.narrow_pairs,
            stats.contacts,
            stats.collision_efficiency
        );
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Shape, ShapeOptions};

    fn cfg() -> EngineConfig {
        EngineConfig::default()
    }

    fn rect(x: f64, y: f64, w: usize, h: usize) -> Shape {
        Shape::new("rect", &ShapeOptions::at(x, y).with_size(w, h), &cfg()).unwrap()
    }

    #[test]
    fn too_few_shapes_is_an_error() {
        let mut one = vec![rect(0.0, 0.0, 2, 2)];
        assert_eq!(detect(&mut one, &cfg()).unwrap_err(), CollisionError::TooFewShapes { found: 1 });
    }

    #[test]
    fn overlapping_rects_use_the_broad_phase() {
        let mut shapes = vec![rect(0.0, 0.0, 10, 10), rect(5.0, 5.0, 10, 10)];
        let stats = detect(&mut shapes, &cfg()).unwrap();
        assert_eq!(stats.broad_pairs, 1);
        assert_eq!(stats.narrow_pairs, 0);
        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.collision_efficiency, 100.0);

        assert!(!shapes[0].sides.left);
        assert!(shapes[0].sides.right && shapes[0].sides.bottom);
        assert!(shapes[1].sides.left && shapes[1].sides.top);
    }

    #[test]
    fn flags_reset_each_pass() {
        let mut shapes = vec![rect(0.0, 0.0, 10, 10), rect(5.0, 5.0, 10, 10)];
        detect(&mut shapes, &cfg()).unwrap();
        shapes[1].x = 80.0;
        detect(&mut shapes, &cfg()).unwrap();
        assert!(!shapes[0].sides.any());
        assert!(!shapes[1].sides.any());
    }

    #[test]
    fn non_colliding_pairs_are_ignored() {
        let opts = ShapeOptions::at(0.0, 0.0).with_size(4, 4).with_collide(false);
        let mut shapes = vec![
            Shape::new("rect", &opts, &cfg()).unwrap(),
            Shape::new("rect", &opts, &cfg()).unwrap(),
        ];
        let stats = detect(&mut shapes, &cfg()).unwrap();
        assert_eq!(stats.considered_pairs, 0);
        assert!(!shapes[0].sides.any());
    }

    #[test]
    fn disabling_broad_phase_sends_rects_to_narrow() {
        let config = EngineConfig { more_efficient_physics: false, ..cfg() };
        let mut shapes = vec![rect(0.0, 0.0, 4, 4), rect(3.0, 3.0, 4, 4)];
        let stats = detect(&mut shapes, &config).unwrap();
        assert_eq!(stats.narrow_pairs, 1);
        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.collision_efficiency, 0.0);
    }

    #[test]
    fn circle_and_box_meet_in_the_narrow_phase() {
        let circle = Shape::new("circle", &ShapeOptions::at(0.0, 0.0).with_radius(3), &cfg()).unwrap();
        let first = circle.upd_point_table()[0];
        let mut shapes = vec![circle, rect(first.x, first.y, 3, 3)];

        let stats = detect(&mut shapes, &cfg()).unwrap();
        assert_eq!(stats.narrow_pairs, 1);
        assert_eq!(stats.contacts, 1);
        assert!(shapes[0].sides.any());
        assert!(shapes[1].sides.any());
    }
}
