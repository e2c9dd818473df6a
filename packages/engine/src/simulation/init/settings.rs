use crate::core::logging;
use crate::core::Vec2D;
use crate::domain::{ConfigError, EngineConfig};

use super::perf_stats::FrameStats;
use super::World;

pub(super) fn set_config(world: &mut World, config: EngineConfig) -> Result<(), ConfigError> {
    config.validate()?;
    world.tick_gate.set_rate(config.ticks_per_second);
    world.update_gate.set_rate(config.updates_per_second);
    if config.debug_mode != world.config.debug_mode {
        logging::set_debug(config.debug_mode);
    }
    world.config = config;
    Ok(())
}

/// Apply `edit` to a copy of the config; keep it only if it validates.
fn update_config<F>(world: &mut World, edit: F) -> Result<(), ConfigError>
where
    F: FnOnce(&mut EngineConfig),
{
    let mut next = world.config.clone();
    edit(&mut next);
    set_config(world, next)
}

pub(super) fn set_gravity(world: &mut World, x: f64, y: f64) -> Result<(), ConfigError> {
    update_config(world, |c| c.gravitational_constant = Vec2D::new(x, y))
}

pub(super) fn set_rates(world: &mut World, ticks: f64, updates: f64, renders: f64) -> Result<(), ConfigError> {
    update_config(world, |c| {
        c.ticks_per_second = ticks;
        c.updates_per_second = updates;
        c.render_per_second = renders;
    })
}

pub(super) fn set_screen_size(world: &mut World, width: usize, height: usize) -> Result<(), ConfigError> {
    update_config(world, |c| {
        c.width = width;
        c.height = height;
    })
}

pub(super) fn set_debug(world: &mut World, debug: bool) {
    world.config.debug_mode = debug;
    logging::set_debug(debug);
}

pub(super) fn enable_perf_metrics(world: &mut World, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_stats(world: &World) -> FrameStats {
    world.perf_stats.clone()
}
