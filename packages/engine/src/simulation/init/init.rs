use crate::core::logging;
use crate::domain::{ConfigError, EngineConfig};
use crate::systems::collision::CollisionStats;
use crate::systems::render::Compositor;

use super::perf_stats::FrameStats;
use super::timing::{FrameTiming, TickGate};
use super::World;

pub(super) fn create_world(config: EngineConfig, start_ms: f64) -> Result<World, ConfigError> {
    config.validate()?;
    if config.debug_mode {
        logging::set_debug(true);
    }

    log::debug!(
        "[INIT] {}x{} world, {} ticks/s, {} updates/s",
        config.width,
        config.height,
        config.ticks_per_second,
        config.updates_per_second
    );

    Ok(World {
        timing: FrameTiming::new(start_ms),
        tick_gate: TickGate::per_second(config.ticks_per_second, start_ms),
        update_gate: TickGate::per_second(config.updates_per_second, start_ms),
        collision_stats: CollisionStats::default(),
        compositor: Compositor::new(config.width, config.height),
        frame: 0,
        perf_enabled: false,
        perf_stats: FrameStats::default(),
        config,
    })
}

pub(super) fn create_world_from_json(json: &str, start_ms: f64) -> Result<World, ConfigError> {
    create_world(EngineConfig::from_json(json)?, start_ms)
}
