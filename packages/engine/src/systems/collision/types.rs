/// Pair counts for one detection pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionStats {
    /// Pairs where at least one body collides.
    pub considered_pairs: usize,
    pub broad_pairs: usize,
    pub narrow_pairs: usize,
    /// Pairs found touching.
    pub contacts: usize,
    /// `narrow_pairs / considered_pairs`.
    pub inefficiency_ratio: f64,
    /// `100 - 100 * inefficiency_ratio`, or `-1` before any pass ran.
    pub collision_efficiency: f64,
}

impl Default for CollisionStats {
    fn default() -> Self {
        CollisionStats {
            considered_pairs: 0,
            broad_pairs: 0,
            narrow_pairs: 0,
            contacts: 0,
            inefficiency_ratio: 0.0,
            collision_efficiency: -1.0,
        }
    }
}

impl CollisionStats {
    pub(super) fn finish(&mut self) {
        self.inefficiency_ratio = if self.considered_pairs == 0 {
            0.0
        } else {
            self.narrow_pairs as f64 / self.considered_pairs as f64
        };
        self.collision_efficiency = 100.0 - 100.0 * self.inefficiency_ratio;
    }
}

/// What `World::calculate_collisions` did this call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionReport {
    /// `false` when the tick gate held the pass back.
    pub ran: bool,
    pub stats: CollisionStats,
}
