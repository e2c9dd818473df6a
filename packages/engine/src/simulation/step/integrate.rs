use crate::domain::PhysicsBody;
use crate::systems::physics::{integrate_bodies, IntegrationReport};

use super::{PerfTimer, World};

pub(super) fn integrate<B: PhysicsBody>(world: &mut World, bodies: &mut [B], now_ms: f64) -> IntegrationReport {
    let timer = PerfTimer::start_if(world.perf_enabled);

    let dt = world.timing.advance(now_ms, &world.config);
    let report = integrate_bodies(bodies, dt, &world.config);

    let stats = &mut world.perf_stats;
    stats.delta_time = dt;
    stats.current_fps = world.timing.current_fps;
    stats.bodies_integrated = report.integrated as u32;
    stats.bodies_skipped = report.skipped.len() as u32;
    if let Some(t0) = timer {
        stats.integrate_ms = t0.elapsed_ms();
    }

    report
}

pub(super) fn update_frame_physics<B: PhysicsBody>(
    world: &mut World,
    bodies: &mut [B],
    now_ms: f64,
) -> Option<IntegrationReport> {
    if !world.update_gate.poll(now_ms) {
        return None;
    }
    Some(integrate(world, bodies, now_ms))
}
