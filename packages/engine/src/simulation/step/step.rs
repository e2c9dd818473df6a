use crate::domain::Shape;
use crate::systems::collision::CollisionReport;
use crate::systems::physics::IntegrationReport;
use crate::systems::render::{Frame, RenderOptions};

use super::{collide, integrate, render_frame, PerfTimer, World};

/// What one call to [`World::frame`] did.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutcome {
    /// `None` when the update gate was closed.
    pub integration: Option<IntegrationReport>,
    /// `None` with fewer than two shapes.
    pub collisions: Option<CollisionReport>,
    pub frame: Frame,
}

pub(super) fn frame(world: &mut World, shapes: &mut [Shape], now_ms: f64, options: RenderOptions) -> FrameOutcome {
    world.perf_stats.reset();
    let frame_timer = PerfTimer::start_if(world.perf_enabled);

    // === PHYSICS ===
    let integration = integrate::update_frame_physics(world, shapes, now_ms);

    // === COLLISIONS ===
    let collisions = if shapes.len() >= 2 {
        match collide::calculate_collisions(world, shapes, now_ms) {
            Ok(report) => Some(report),
            Err(e) => {
                log::error!("[FRAME] collision pass failed: {}", e);
                None
            }
        }
    } else {
        None
    };

    // === RENDER ===
    let frame = render_frame::render(world, shapes, options);

    world.frame += 1;
    let stats = &mut world.perf_stats;
    stats.frames = stats.frames.wrapping_add(1);
    stats.shapes = shapes.len() as u32;
    if let Some(t0) = frame_timer {
        stats.frame_ms = t0.elapsed_ms();
    }

    FrameOutcome { integration, collisions, frame }
}
