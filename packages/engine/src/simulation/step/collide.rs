use crate::domain::{CollisionError, PhysicsBody};
use crate::systems::collision::{detect, narrow_phase as narrow_pass, CollisionReport};

use super::{PerfTimer, World};

pub(super) fn calculate_collisions<B: PhysicsBody>(
    world: &mut World,
    bodies: &mut [B],
    now_ms: f64,
) -> Result<CollisionReport, CollisionError> {
    if bodies.len() < 2 {
        // detect logs and reports the count
        return detect(bodies, &world.config).map(|stats| CollisionReport { ran: true, stats });
    }
    if !world.tick_gate.poll(now_ms) {
        return Ok(CollisionReport { ran: false, stats: world.collision_stats });
    }

    let timer = PerfTimer::start_if(world.perf_enabled);
    let stats = detect(bodies, &world.config)?;
    world.collision_stats = stats;

    let perf = &mut world.perf_stats;
    perf.considered_pairs = stats.considered_pairs as u32;
    perf.narrow_pairs = stats.narrow_pairs as u32;
    perf.contacts = stats.contacts as u32;
    perf.collision_efficiency = stats.collision_efficiency;
    if let Some(t0) = timer {
        perf.collision_ms = t0.elapsed_ms();
    }

    Ok(CollisionReport { ran: true, stats })
}

pub(super) fn narrow_phase<B: PhysicsBody>(world: &World, bodies: &mut [B]) -> Result<usize, CollisionError> {
    narrow_pass(bodies, world.config.collision_accuracy, world.config.height)
}
