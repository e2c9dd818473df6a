//! World - orchestration of one ASCII physics scene
//!
//! The world owns configuration, timing, collision statistics and the
//! compositor. Shapes stay with the caller and are passed in as slices, so
//! every phase sees exactly the bodies it is given:
//!
//! 1. integration  - gated at `updatesPerSecond`
//! 2. collisions   - gated at `ticksPerSecond`, resets side flags
//! 3. compositing  - read-only over shapes, writes the sink
//!
//! Per-phase logic lives in `systems/`; the files below only wire it to the
//! world state.

use crate::domain::{CollisionError, ConfigError, EngineConfig, PhysicsBody, Shape};
use crate::systems::collision::{CollisionReport, CollisionStats};
use crate::systems::physics::IntegrationReport;
use crate::systems::render::{Compositor, Frame, FrameSink, RenderOptions};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "timing/timing.rs"]
mod timing;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/collide.rs"]
mod collide;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_frame.rs"]
mod render_frame;
#[path = "loops/render_loop.rs"]
mod render_loop;
#[path = "loops/simulation_loop.rs"]
mod simulation_loop;
mod facade;

pub use facade::AsciiWorld;
pub use perf_stats::FrameStats;
pub use perf_timer::now_ms;
pub use render_loop::{FrameCallback, RenderLoop};
pub use simulation_loop::SimulationLoop;
pub use step::FrameOutcome;
pub use timing::{FrameTiming, TickGate};

use perf_timer::PerfTimer;

/// One scene: config, clocks, collision stats and output.
pub struct World {
    config: EngineConfig,

    // Timing
    timing: FrameTiming,
    tick_gate: TickGate,
    update_gate: TickGate,

    // State
    collision_stats: CollisionStats,
    compositor: Compositor,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FrameStats,
}

// === LIFECYCLE & SETTINGS ===
impl World {
    /// Validate `config` and start the clocks at `start_ms`.
    pub fn new(config: EngineConfig, start_ms: f64) -> Result<Self, ConfigError> {
        init::create_world(config, start_ms)
    }

    /// Parse a camelCase JSON config (missing keys keep defaults).
    pub fn from_json(json: &str, start_ms: f64) -> Result<Self, ConfigError> {
        init::create_world_from_json(json, start_ms)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the whole config. Rejected configs leave the world unchanged.
    pub fn set_config(&mut self, config: EngineConfig) -> Result<(), ConfigError> {
        settings::set_config(self, config)
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) -> Result<(), ConfigError> {
        settings::set_gravity(self, x, y)
    }

    pub fn set_rates(&mut self, ticks: f64, updates: f64, renders: f64) -> Result<(), ConfigError> {
        settings::set_rates(self, ticks, updates, renders)
    }

    pub fn set_screen_size(&mut self, width: usize, height: usize) -> Result<(), ConfigError> {
        settings::set_screen_size(self, width, height)
    }

    /// Toggle `debugMode` and the console log level with it.
    pub fn set_debug(&mut self, debug: bool) {
        settings::set_debug(self, debug)
    }

    /// Enable or disable per-phase timings (counters are always kept).
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled)
    }

    pub fn stats(&self) -> FrameStats {
        settings::get_stats(self)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn timing(&self) -> FrameTiming {
        self.timing
    }

    pub fn current_fps(&self) -> f64 {
        self.timing.current_fps
    }

    pub fn collision_stats(&self) -> CollisionStats {
        self.collision_stats
    }

    /// `-1` until the first collision pass ran.
    pub fn collision_efficiency(&self) -> f64 {
        self.collision_stats.collision_efficiency
    }
}

// === FRAME PIPELINE ===
impl World {
    /// Integrate every body once, ungated. One delta time for the batch.
    pub fn integrate<B: PhysicsBody>(&mut self, bodies: &mut [B], now_ms: f64) -> IntegrationReport {
        integrate::integrate(self, bodies, now_ms)
    }

    /// `integrate`, at most `updatesPerSecond` times per second.
    pub fn update_frame_physics<B: PhysicsBody>(&mut self, bodies: &mut [B], now_ms: f64) -> Option<IntegrationReport> {
        integrate::update_frame_physics(self, bodies, now_ms)
    }

    /// Collision pass, at most `ticksPerSecond` times per second.
    pub fn calculate_collisions<B: PhysicsBody>(
        &mut self,
        bodies: &mut [B],
        now_ms: f64,
    ) -> Result<CollisionReport, CollisionError> {
        collide::calculate_collisions(self, bodies, now_ms)
    }

    /// Point-by-point test over all pairs with the configured accuracy.
    pub fn narrow_phase<B: PhysicsBody>(&self, bodies: &mut [B]) -> Result<usize, CollisionError> {
        collide::narrow_phase(self, bodies)
    }

    /// Composite `shapes` and hand the frame to the sink if it changed.
    pub fn render(&mut self, shapes: &[Shape], options: RenderOptions) -> Frame {
        render_frame::render(self, shapes, options)
    }

    pub fn recall_frame(&self) -> Option<&str> {
        self.compositor.recall_frame()
    }

    pub fn display_saved_frame(&mut self, text: &str) -> bool {
        self.compositor.display_saved_frame(text)
    }

    pub fn display_saved_rows<S: AsRef<str>>(&mut self, rows: &[S]) -> bool {
        render_frame::display_saved_rows(self, rows)
    }

    /// Blank the buffer and the sink.
    pub fn clear(&mut self) {
        render_frame::clear(self)
    }

    pub fn set_sink(&mut self, sink: Box<dyn FrameSink>) {
        self.compositor.set_sink(sink)
    }

    pub fn take_sink(&mut self) -> Option<Box<dyn FrameSink>> {
        self.compositor.take_sink()
    }

    /// Full frame: integrate, collide, render.
    pub fn frame(&mut self, shapes: &mut [Shape], now_ms: f64, options: RenderOptions) -> FrameOutcome {
        step::frame(self, shapes, now_ms, options)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
